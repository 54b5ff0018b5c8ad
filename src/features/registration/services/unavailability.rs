use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::registration::dtos::{
    UnavailabilityRequest, MOTIVE_REQUIRED, PERSONNEL_REQUIRED, PREFIX_REQUIRED,
};
use crate::features::registration::services::RegistrationServices;
use crate::features::search::{
    PersonnelSource, PrefixBinding, PrefixSource, SuggestionWidget, UnavailabilityBinding,
};
use crate::shared::ui::{emit, ActionOutcome, AppEvent, Button, TextField};
use crate::shared::validation::NUMERIC_ID_REGEX;

pub const SUBMIT_LABEL: &str = "Registrar Indisponibilidade";
pub const SUBMITTING_LABEL: &str = "Salvando...";

/// Unavailability section: a personnel search that owns the hidden id,
/// a prefix search, the motive and notes fields, and the submit button.
pub struct UnavailabilityForm {
    personnel: SuggestionWidget<PersonnelSource, UnavailabilityBinding>,
    prefix: SuggestionWidget<PrefixSource, PrefixBinding>,
    personnel_id: TextField,
    motivo_id: TextField,
    observacoes: TextField,
    submit: Button,
    services: RegistrationServices,
}

impl UnavailabilityForm {
    pub fn attach(services: RegistrationServices) -> Self {
        let personnel_id = TextField::new();
        let prefixo = TextField::new();
        let motivo_id = TextField::new();

        let personnel = SuggestionWidget::attach(
            TextField::new(),
            PersonnelSource::new(Arc::clone(&services.search)),
            UnavailabilityBinding {
                personnel_id: personnel_id.clone(),
                prefixo: Some(prefixo.clone()),
            },
            services.search_config,
        );
        let prefix = SuggestionWidget::attach(
            prefixo,
            PrefixSource::new(Arc::clone(&services.search)),
            PrefixBinding {
                next_focus: Some(motivo_id.clone()),
            },
            services.search_config,
        );

        Self {
            personnel,
            prefix,
            personnel_id,
            motivo_id,
            observacoes: TextField::new(),
            submit: Button::new(SUBMIT_LABEL),
            services,
        }
    }

    pub fn personnel(&self) -> &SuggestionWidget<PersonnelSource, UnavailabilityBinding> {
        &self.personnel
    }

    pub fn prefix(&self) -> &SuggestionWidget<PrefixSource, PrefixBinding> {
        &self.prefix
    }

    pub fn personnel_id(&self) -> &TextField {
        &self.personnel_id
    }

    pub fn motivo_id(&self) -> &TextField {
        &self.motivo_id
    }

    pub fn observacoes(&self) -> &TextField {
        &self.observacoes
    }

    pub fn submit_button(&self) -> &Button {
        &self.submit
    }

    /// The hidden id is only ever written by a suggestion pick, so typing a
    /// name without choosing a row leaves the form unsubmittable.
    fn build_request(&self) -> Result<UnavailabilityRequest, AppError> {
        let id = self.personnel_id.trimmed();
        if !NUMERIC_ID_REGEX.is_match(&id) {
            return Err(AppError::Validation(PERSONNEL_REQUIRED.to_string()));
        }
        let eletricista_id = id
            .parse::<i64>()
            .map_err(|_| AppError::Validation(PERSONNEL_REQUIRED.to_string()))?;

        let prefixo = self.prefix.input().trimmed();
        let motivo_id = match self.motivo_id.trimmed().parse::<i64>() {
            Ok(motivo_id) => motivo_id,
            Err(_) if prefixo.is_empty() => {
                return Err(AppError::Validation(PREFIX_REQUIRED.to_string()));
            }
            Err(_) => return Err(AppError::Validation(MOTIVE_REQUIRED.to_string())),
        };

        let request = UnavailabilityRequest {
            eletricista_id,
            prefixo,
            motivo_id,
            observacoes: self.observacoes.trimmed(),
        };
        request.check()?;
        Ok(request)
    }

    pub async fn submit(&self) -> ActionOutcome {
        let dialogs = &self.services.dialogs;

        let request = match self.build_request() {
            Ok(request) => request,
            Err(err) => {
                dialogs.alert(&err.user_message("Erro ao salvar"));
                return ActionOutcome::Blocked;
            }
        };

        if !dialogs.confirm("Confirmar registro de indisponibilidade?") {
            return ActionOutcome::Cancelled;
        }

        let Some(_busy) = self.submit.busy(SUBMITTING_LABEL) else {
            return ActionOutcome::Blocked;
        };

        match self.services.registration.save_unavailability(&request).await {
            Ok(_) => {
                dialogs.alert("Indisponibilidade registrada com sucesso!");
                emit(
                    &self.services.events,
                    AppEvent::UnavailabilityRecorded {
                        personnel_id: request.eletricista_id,
                    },
                );
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::warn!(
                    "Recording unavailability for {} failed: {}",
                    request.eletricista_id,
                    err
                );
                dialogs.alert(&err.user_message("Erro ao salvar"));
                ActionOutcome::Failed
            }
        }
    }
}
