use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::error::AppError;

/// Crew member queued for a team prefix, waiting for the batched save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAssociation {
    pub eletricista_id: i64,
    pub nome: String,
    pub matricula: String,
    pub prefixo: String,
}

/// Body of `POST /api/salvar-frequencia`
#[derive(Debug, Serialize)]
pub struct SaveAttendanceRequest<'a> {
    pub associacoes: &'a [PendingAssociation],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveAttendanceResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub mensagem: Option<String>,
}

/// Body of `POST /api/remanejar-eletricista`
#[derive(Debug, Serialize)]
pub struct ReassignRequest {
    pub eletricista_id: i64,
}

/// Fields of the unavailability form, sent as `multipart/form-data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct UnavailabilityRequest {
    #[validate(range(min = 1, message = "Selecione um eletricista da lista!"))]
    pub eletricista_id: i64,

    #[validate(length(min = 1, max = 50, message = "Informe o prefixo da equipe!"))]
    pub prefixo: String,

    #[validate(range(min = 1, message = "Selecione o motivo da indisponibilidade!"))]
    pub motivo_id: i64,

    #[validate(length(max = 1000, message = "Observações devem ter no máximo 1000 caracteres"))]
    pub observacoes: String,
}

pub const PERSONNEL_REQUIRED: &str = "Selecione um eletricista da lista!";
pub const PREFIX_REQUIRED: &str = "Informe o prefixo da equipe!";
pub const MOTIVE_REQUIRED: &str = "Selecione o motivo da indisponibilidade!";

impl UnavailabilityRequest {
    /// Order of the fields on the form
    pub const FIELD_ORDER: &'static [&'static str] =
        &["eletricista_id", "prefixo", "motivo_id", "observacoes"];

    /// Validate, reporting the first failing field in form order
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|errors| AppError::from_validation(&errors, Self::FIELD_ORDER))
    }
}
