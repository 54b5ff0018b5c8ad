use serde::Serialize;
use thiserror::Error;

use crate::core::error::AppError;
use crate::features::registration::dtos::PendingAssociation;
use crate::features::registration::models::{PendingQueue, PendingRow};
use crate::features::search::dtos::Eletricista;

pub const INFO_PLACEHOLDER: &str = "Selecione um eletricista acima";

/// Reasons the associate action refuses to queue the selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Selecione um eletricista acima")]
    NoSelection,

    #[error("Informe o prefixo da equipe!")]
    MissingPrefix,

    #[error("Este eletricista já foi associado!")]
    AlreadyQueued,
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Selectable crew member card of the attendance section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonnelCard {
    pub eletricista: Eletricista,
    pub visible: bool,
    pub checked: bool,
}

/// Info panel next to the prefix input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "estado", rename_all = "snake_case")]
pub enum InfoPanel {
    Empty,
    Filled { nome: String, detalhe: String },
}

impl InfoPanel {
    pub fn text(&self) -> String {
        match self {
            InfoPanel::Empty => INFO_PLACEHOLDER.to_string(),
            InfoPanel::Filled { nome, detalhe } => format!("{}\n{}", nome, detalhe),
        }
    }
}

/// Attendance section state: the cards, the single checked card and the
/// pending queue. A card is hidden exactly while its id is queued; once a
/// batch is saved its cards leave the board.
#[derive(Debug, Clone, Default)]
pub struct AttendanceBoard {
    cards: Vec<PersonnelCard>,
    queue: PendingQueue,
}

impl AttendanceBoard {
    pub fn new(personnel: Vec<Eletricista>) -> Self {
        let cards = personnel
            .into_iter()
            .map(|eletricista| PersonnelCard {
                eletricista,
                visible: true,
                checked: false,
            })
            .collect();
        Self {
            cards,
            queue: PendingQueue::new(),
        }
    }

    pub fn cards(&self) -> &[PersonnelCard] {
        &self.cards
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &PersonnelCard> {
        self.cards.iter().filter(|c| c.visible)
    }

    pub fn queue(&self) -> &PendingQueue {
        &self.queue
    }

    pub fn pending_rows(&self) -> Vec<PendingRow> {
        self.queue.rows()
    }

    pub fn selected(&self) -> Option<&Eletricista> {
        self.cards
            .iter()
            .find(|c| c.checked)
            .map(|c| &c.eletricista)
    }

    pub fn info(&self) -> InfoPanel {
        match self.selected() {
            Some(e) => InfoPanel::Filled {
                nome: e.nome.clone(),
                detalhe: format!("Mat: {} | Base: {}", e.matricula, e.base),
            },
            None => InfoPanel::Empty,
        }
    }

    /// Check one card, unchecking every other one.
    ///
    /// Returns the prefix to suggest, or `None` if no visible card has that id.
    pub fn check(&mut self, personnel_id: i64) -> Option<String> {
        let position = self
            .cards
            .iter()
            .position(|c| c.visible && c.eletricista.id == personnel_id)?;

        for (i, card) in self.cards.iter_mut().enumerate() {
            card.checked = i == position;
        }
        Some(self.cards[position].eletricista.prefixo.clone())
    }

    /// Returns whether `personnel_id` was the checked card
    pub fn uncheck(&mut self, personnel_id: i64) -> bool {
        let mut was_checked = false;
        for card in self
            .cards
            .iter_mut()
            .filter(|c| c.checked && c.eletricista.id == personnel_id)
        {
            card.checked = false;
            was_checked = true;
        }
        was_checked
    }

    fn clear_selection(&mut self) {
        for card in self.cards.iter_mut() {
            card.checked = false;
        }
    }

    fn set_visible(&mut self, personnel_id: i64, visible: bool) {
        for card in self.cards.iter_mut().filter(|c| c.eletricista.id == personnel_id) {
            card.visible = visible;
        }
    }

    /// Queue the checked card under `prefix`, hide it and clear the selection
    pub fn associate(&mut self, prefix: &str) -> Result<PendingAssociation, BoardError> {
        let selected = self.selected().cloned().ok_or(BoardError::NoSelection)?;

        let prefixo = prefix.trim();
        if prefixo.is_empty() {
            return Err(BoardError::MissingPrefix);
        }

        let association = PendingAssociation {
            eletricista_id: selected.id,
            nome: selected.nome,
            matricula: selected.matricula,
            prefixo: prefixo.to_string(),
        };
        self.queue.push(association.clone())?;

        self.set_visible(association.eletricista_id, false);
        self.clear_selection();
        Ok(association)
    }

    /// Remove one pending entry and show its card again
    pub fn remove(&mut self, index: usize) -> Option<PendingAssociation> {
        let removed = self.queue.remove(index)?;
        self.set_visible(removed.eletricista_id, true);
        Some(removed)
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.queue.clear();
        for card in self.cards.iter_mut() {
            card.visible = true;
        }
        removed.len()
    }

    /// Drop the saved entries together with their cards. Saved personnel
    /// already have attendance recorded and cannot be queued again.
    pub fn discard_saved(&mut self, personnel_ids: &[i64]) {
        self.queue.discard(personnel_ids);
        self.cards.retain(|c| !personnel_ids.contains(&c.eletricista.id));
    }
}
