// =============================================================================
// ENDPOINTS
// =============================================================================

pub const PATH_SEARCH_PERSONNEL: &str = "/api/buscar-eletricistas";
pub const PATH_SEARCH_PREFIXES: &str = "/api/buscar-prefixos";
pub const PATH_SAVE_ATTENDANCE: &str = "/api/salvar-frequencia";
pub const PATH_REASSIGN: &str = "/api/remanejar-eletricista";
pub const PATH_SAVE_UNAVAILABILITY: &str = "/api/salvar-indisponibilidade";
pub const PATH_REPORT_OVERALL: &str = "/api/relatorio-geral";
pub const PATH_REPORT_BY_SUPERVISOR: &str = "/api/relatorio-por-supervisor";
pub const PATH_REPORT_BY_PREFIX: &str = "/api/relatorio-por-prefixo";
pub const PATH_USER_TOGGLE_STATUS: &str = "/api/usuarios/toggle-status";
pub const PATH_USER_RESET_PASSWORD: &str = "/api/usuarios/resetar-senha";

/// Shown when a failed envelope carries no `erro`
pub const DEFAULT_BACKEND_ERROR: &str = "Erro no backend ou dados inválidos.";

// =============================================================================
// REPORTS
// =============================================================================

/// Counter key for crew members marked present
pub const MOTIVE_PRESENT: &str = "PRESENTE";

/// Column labels used when a report response does not list its motives
pub const LEGACY_MOTIVE_LABELS: [&str; 9] = [
    "PRESENTE",
    "FÉRIAS",
    "ATESTADO MÉDICO",
    "FOLGA",
    "FALTA",
    "LICENÇA",
    "TREINAMENTO",
    "AFASTAMENTO INSS",
    "REMANEJADO",
];

// =============================================================================
// ADMINISTRATION
// =============================================================================

pub const MIN_PASSWORD_LENGTH: u64 = 6;
