use std::fmt;
use std::str::FromStr;

/// Operation sections of the registration screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WorkspaceMode {
    #[default]
    Attendance,
    Reassignment,
    Unavailability,
}

impl WorkspaceMode {
    pub const ALL: [WorkspaceMode; 3] = [
        WorkspaceMode::Attendance,
        WorkspaceMode::Reassignment,
        WorkspaceMode::Unavailability,
    ];

    /// Key used by the section buttons (`data-tipo`)
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkspaceMode::Attendance => "frequencia",
            WorkspaceMode::Reassignment => "remanejado",
            WorkspaceMode::Unavailability => "indisponivel",
        }
    }
}

impl fmt::Display for WorkspaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkspaceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkspaceMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("Unknown workspace section: {}", s))
    }
}

/// Exactly one section is active; switching never touches section state
#[derive(Debug, Clone, Default)]
pub struct ModeSelector {
    active: WorkspaceMode,
}

impl ModeSelector {
    pub fn active(&self) -> WorkspaceMode {
        self.active
    }

    pub fn switch(&mut self, mode: WorkspaceMode) {
        if self.active != mode {
            tracing::debug!("Switching workspace section {} -> {}", self.active, mode);
        }
        self.active = mode;
    }

    pub fn is_active(&self, mode: WorkspaceMode) -> bool {
        self.active == mode
    }
}
