use serde::Serialize;
use validator::Validate;

/// Body of `POST /api/usuarios/toggle-status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleStatusRequest {
    pub user_id: i64,
    pub ativo: bool,
}

/// Body of `POST /api/usuarios/resetar-senha`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct ResetPasswordRequest {
    pub user_id: i64,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres!"))]
    pub nova_senha: String,
}
