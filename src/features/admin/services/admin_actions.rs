use std::sync::Arc;

use validator::Validate;

use crate::core::error::AppError;
use crate::features::admin::clients::AdminBackend;
use crate::features::admin::dtos::{ResetPasswordRequest, ToggleStatusRequest};
use crate::shared::constants::MIN_PASSWORD_LENGTH;
use crate::shared::ui::{emit, ActionOutcome, AppEvent, Dialogs, EventSink};

/// Per-user commands of the user management list
pub struct AdminActions {
    backend: Arc<dyn AdminBackend>,
    dialogs: Arc<dyn Dialogs>,
    events: EventSink,
}

impl AdminActions {
    pub fn new(backend: Arc<dyn AdminBackend>, dialogs: Arc<dyn Dialogs>, events: EventSink) -> Self {
        Self {
            backend,
            dialogs,
            events,
        }
    }

    pub async fn toggle_status(&self, user_id: i64, active: bool) -> ActionOutcome {
        let action = if active { "ativar" } else { "desativar" };
        if !self
            .dialogs
            .confirm(&format!("Tem certeza que deseja {} este usuário?", action))
        {
            return ActionOutcome::Cancelled;
        }

        let request = ToggleStatusRequest {
            user_id,
            ativo: active,
        };
        match self.backend.toggle_status(&request).await {
            Ok(response) => {
                self.dialogs.alert(
                    response
                        .mensagem
                        .as_deref()
                        .unwrap_or("Status atualizado com sucesso!"),
                );
                emit(&self.events, AppEvent::UserStatusChanged { user_id, active });
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::warn!("Changing status of user {} failed: {}", user_id, err);
                self.dialogs
                    .alert(&err.user_message("Erro ao atualizar status"));
                ActionOutcome::Failed
            }
        }
    }

    /// Ask for the new password twice; nothing is sent unless both entries
    /// match and meet the minimum length.
    pub async fn reset_password(&self, user_id: i64, user_name: &str) -> ActionOutcome {
        let question = format!(
            "Digite a nova senha para {}:\n\n(Mínimo {} caracteres)",
            user_name, MIN_PASSWORD_LENGTH
        );
        let password = match self.dialogs.prompt(&question) {
            Some(password) if !password.is_empty() => password,
            _ => return ActionOutcome::Cancelled,
        };

        let request = ResetPasswordRequest {
            user_id,
            nova_senha: password,
        };
        if let Err(errors) = request.validate() {
            let err = AppError::from(errors);
            self.dialogs.alert(&err.user_message("Senha inválida"));
            return ActionOutcome::Blocked;
        }

        let confirmation = self
            .dialogs
            .prompt("Digite a senha novamente para confirmar:");
        if confirmation.as_deref() != Some(request.nova_senha.as_str()) {
            self.dialogs.alert("As senhas não coincidem!");
            return ActionOutcome::Blocked;
        }

        match self.backend.reset_password(&request).await {
            Ok(response) => {
                self.dialogs.alert(
                    response
                        .mensagem
                        .as_deref()
                        .unwrap_or("Senha alterada com sucesso!"),
                );
                emit(&self.events, AppEvent::PasswordReset { user_id });
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::warn!("Resetting password of user {} failed: {}", user_id, err);
                self.dialogs.alert(&err.user_message("Erro ao resetar senha"));
                ActionOutcome::Failed
            }
        }
    }
}
