use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::shared::constants::DEFAULT_BACKEND_ERROR;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Decode a `{success: bool, ...payload}` response.
///
/// `success: false` (or a missing flag) becomes [`AppError::Backend`] carrying
/// the server `erro` verbatim; otherwise the whole object is deserialized
/// into `T`, which picks the payload fields it needs.
pub fn decode_envelope<T: DeserializeOwned>(value: Value) -> Result<T> {
    let success = value
        .get("success")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !success {
        let erro = value
            .get("erro")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BACKEND_ERROR)
            .to_string();
        return Err(AppError::Backend(erro));
    }

    serde_json::from_value(value).map_err(|e| AppError::Decode(e.to_string()))
}

/// Payload of the plain mutation endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub mensagem: Option<String>,
}

// =============================================================================
// DATE RANGE
// =============================================================================

/// Inclusive ISO date range sent as `data_inicio` / `data_fim`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AppError::Validation(
                "A data inicial deve ser anterior ou igual à data final".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    /// Parse two `YYYY-MM-DD` strings; an empty bound is a validation failure
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start = start.trim();
        let end = end.trim();
        if start.is_empty() || end.is_empty() {
            return Err(AppError::Validation("Selecione o período".to_string()));
        }
        Self::new(parse_iso_date(start)?, parse_iso_date(end)?)
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("data_inicio", self.start.format("%Y-%m-%d").to_string()),
            ("data_fim", self.end.format("%Y-%m-%d").to_string()),
        ]
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

pub fn parse_iso_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Data inválida: {}", raw)))
}
