use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::core::error::AppError;

/// Report tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReportKind {
    #[default]
    Geral,
    PorSupervisor,
    PorPrefixo,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Geral,
        ReportKind::PorSupervisor,
        ReportKind::PorPrefixo,
    ];

    /// Tab key (`data-tab`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Geral => "geral",
            ReportKind::PorSupervisor => "supervisor",
            ReportKind::PorPrefixo => "prefixo",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Geral => "Relatório Geral",
            ReportKind::PorSupervisor => "Relatório por Supervisor",
            ReportKind::PorPrefixo => "Relatório por Prefixo",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::Validation(format!("Relatório desconhecido: {}", s)))
    }
}

/// Exactly one tab is active
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportTabs {
    active: ReportKind,
}

impl ReportTabs {
    pub fn active(&self) -> ReportKind {
        self.active
    }

    pub fn select(&mut self, kind: ReportKind) {
        self.active = kind;
    }
}
