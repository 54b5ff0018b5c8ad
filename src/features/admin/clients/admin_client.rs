use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::http::HttpClient;
use crate::features::admin::dtos::{ResetPasswordRequest, ToggleStatusRequest};
use crate::shared::constants::{PATH_USER_RESET_PASSWORD, PATH_USER_TOGGLE_STATUS};
use crate::shared::types::{decode_envelope, MutationResponse};

/// User management endpoints
#[async_trait]
pub trait AdminBackend: Send + Sync {
    async fn toggle_status(&self, request: &ToggleStatusRequest) -> Result<MutationResponse>;

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<MutationResponse>;
}

pub struct HttpAdminClient {
    http: Arc<HttpClient>,
}

impl HttpAdminClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AdminBackend for HttpAdminClient {
    async fn toggle_status(&self, request: &ToggleStatusRequest) -> Result<MutationResponse> {
        let value = self.http.post_json(PATH_USER_TOGGLE_STATUS, request).await?;
        let response: MutationResponse = decode_envelope(value)?;

        tracing::info!(
            "User {} set to {}",
            request.user_id,
            if request.ativo { "active" } else { "inactive" }
        );
        Ok(response)
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<MutationResponse> {
        let value = self.http.post_json(PATH_USER_RESET_PASSWORD, request).await?;
        let response: MutationResponse = decode_envelope(value)?;

        // never log the password itself
        tracing::info!("Password reset for user {}", request.user_id);
        Ok(response)
    }
}
