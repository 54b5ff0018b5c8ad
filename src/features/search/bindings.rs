use crate::features::search::dtos::{Eletricista, PrefixoSugestao};
use crate::shared::ui::TextField;

/// Fields a widget fills in when a suggestion is picked.
///
/// `commit` only copies values already present on the item, so a selection
/// either updates every mapped field or, if never called, none of them.
pub trait SelectionBinding<T>: Send + Sync + 'static {
    /// Called on every keystroke: a previous selection no longer holds
    fn reset(&self) {}

    fn commit(&self, item: &T);
}

/// Widgets whose selection only fills their own input
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBinding;

impl<T> SelectionBinding<T> for NoBinding {
    fn commit(&self, _item: &T) {}
}

/// Attendance form: matricula and base follow the selected person, the
/// team prefix is only suggested when the operator has not typed one.
#[derive(Debug, Clone)]
pub struct PersonnelFormBinding {
    pub matricula: TextField,
    pub base: TextField,
    pub prefixo: TextField,
}

impl SelectionBinding<Eletricista> for PersonnelFormBinding {
    fn reset(&self) {
        self.matricula.clear();
        self.base.clear();
    }

    fn commit(&self, item: &Eletricista) {
        self.matricula.set_value(item.matricula.clone());
        self.base.set_value(item.base.clone());
        if self.prefixo.is_empty() {
            self.prefixo.set_value(item.prefixo.clone());
        }
        self.prefixo.focus_and_select();
    }
}

/// Prefix input: moves on to the motive field after a pick
#[derive(Debug, Clone, Default)]
pub struct PrefixBinding {
    pub next_focus: Option<TextField>,
}

impl SelectionBinding<PrefixoSugestao> for PrefixBinding {
    fn commit(&self, _item: &PrefixoSugestao) {
        if let Some(field) = &self.next_focus {
            field.focus();
        }
    }
}

/// Unavailability form: the hidden id is only set through a selection
#[derive(Debug, Clone)]
pub struct UnavailabilityBinding {
    pub personnel_id: TextField,
    pub prefixo: Option<TextField>,
}

impl SelectionBinding<Eletricista> for UnavailabilityBinding {
    fn reset(&self) {
        self.personnel_id.clear();
    }

    fn commit(&self, item: &Eletricista) {
        self.personnel_id.set_value(item.id.to_string());
        if let Some(prefixo) = &self.prefixo {
            if prefixo.is_empty() {
                prefixo.set_value(item.prefixo.clone());
            }
        }
    }
}
