use std::str::FromStr;

use crate::core::error::{AppError, Result};
use crate::shared::types::DateRange;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PeriodKind {
    #[default]
    Dia,
    Intervalo,
}

impl FromStr for PeriodKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dia" => Ok(PeriodKind::Dia),
            "intervalo" | "periodo" => Ok(PeriodKind::Intervalo),
            other => Err(AppError::Validation(format!(
                "Tipo de período inválido: {}",
                other
            ))),
        }
    }
}

/// Raw values of the period pickers, as typed by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodSelection {
    pub kind: PeriodKind,
    pub dia: String,
    pub inicio: String,
    pub fim: String,
}

impl PeriodSelection {
    pub fn day(dia: impl Into<String>) -> Self {
        Self {
            kind: PeriodKind::Dia,
            dia: dia.into(),
            ..Default::default()
        }
    }

    pub fn interval(inicio: impl Into<String>, fim: impl Into<String>) -> Self {
        Self {
            kind: PeriodKind::Intervalo,
            inicio: inicio.into(),
            fim: fim.into(),
            ..Default::default()
        }
    }

    /// Only the pickers of the selected kind are read
    pub fn resolve(&self) -> Result<DateRange> {
        match self.kind {
            PeriodKind::Dia => DateRange::parse(&self.dia, &self.dia),
            PeriodKind::Intervalo => DateRange::parse(&self.inicio, &self.fim),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_ignores_interval_pickers() {
        let mut selection = PeriodSelection::day("2024-05-01");
        selection.inicio = "garbage".to_string();
        let range = selection.resolve().unwrap();
        assert!(range.is_single_day());
    }

    #[test]
    fn test_empty_bound_is_rejected() {
        let err = PeriodSelection::interval("2024-05-01", " ").resolve().unwrap_err();
        assert_eq!(err.user_message("Erro"), "Selecione o período");

        let err = PeriodSelection::day("").resolve().unwrap_err();
        assert_eq!(err.user_message("Erro"), "Selecione o período");
    }

    #[test]
    fn test_period_kind_from_picker_value() {
        assert_eq!("dia".parse::<PeriodKind>().unwrap(), PeriodKind::Dia);
        assert_eq!("intervalo".parse::<PeriodKind>().unwrap(), PeriodKind::Intervalo);
        assert!("semana".parse::<PeriodKind>().is_err());
    }
}
