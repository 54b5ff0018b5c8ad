use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Client-side check failed before any request was issued
    #[error("{0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    /// `{success: false, erro}` returned by the backend
    #[error("{0}")]
    Backend(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    /// True for failures that happened before or while reaching the backend,
    /// as opposed to a backend-reported `erro`.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Http(_) | AppError::Transport(_))
    }

    /// Message shown to the operator in a blocking dialog.
    ///
    /// Backend messages are reported verbatim behind the `Erro:` prefix,
    /// transport failures behind the action-specific `context`.
    pub fn user_message(&self, context: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Backend(msg) => format!("Erro: {}", msg),
            other => format!("{}: {}", context, other),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

impl AppError {
    /// Validation error carrying the message of the first failing field.
    /// Fields named in `field_order` come first, the rest by name.
    pub fn from_validation(errors: &validator::ValidationErrors, field_order: &[&str]) -> Self {
        let fields = errors.field_errors();
        let rank = |name: &str| {
            field_order
                .iter()
                .position(|f| *f == name)
                .unwrap_or(field_order.len())
        };

        let mut names: Vec<&str> = fields.keys().map(|k| k.as_ref()).collect();
        names.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));

        let message = names
            .iter()
            .filter_map(|name| fields.get(*name))
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Dados inválidos".to_string());
        AppError::Validation(message)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::from_validation(&errors, &[])
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
