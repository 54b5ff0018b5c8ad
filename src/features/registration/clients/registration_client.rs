use async_trait::async_trait;
use reqwest::multipart::Form;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::http::HttpClient;
use crate::features::registration::dtos::{
    PendingAssociation, ReassignRequest, SaveAttendanceRequest, SaveAttendanceResponse,
    UnavailabilityRequest,
};
use crate::shared::constants::{PATH_REASSIGN, PATH_SAVE_ATTENDANCE, PATH_SAVE_UNAVAILABILITY};
use crate::shared::types::{decode_envelope, MutationResponse};

/// Mutation endpoints of the registration screen
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    async fn save_attendance(
        &self,
        associations: &[PendingAssociation],
    ) -> Result<SaveAttendanceResponse>;

    async fn reassign(&self, personnel_id: i64) -> Result<MutationResponse>;

    async fn save_unavailability(
        &self,
        request: &UnavailabilityRequest,
    ) -> Result<MutationResponse>;
}

pub struct HttpRegistrationClient {
    http: Arc<HttpClient>,
}

impl HttpRegistrationClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RegistrationBackend for HttpRegistrationClient {
    async fn save_attendance(
        &self,
        associations: &[PendingAssociation],
    ) -> Result<SaveAttendanceResponse> {
        let body = SaveAttendanceRequest {
            associacoes: associations,
        };
        let value = self.http.post_json(PATH_SAVE_ATTENDANCE, &body).await?;
        let response: SaveAttendanceResponse = decode_envelope(value)?;

        tracing::info!("Saved {} attendance association(s)", response.total);
        Ok(response)
    }

    async fn reassign(&self, personnel_id: i64) -> Result<MutationResponse> {
        let body = ReassignRequest {
            eletricista_id: personnel_id,
        };
        let value = self.http.post_json(PATH_REASSIGN, &body).await?;
        let response: MutationResponse = decode_envelope(value)?;

        tracing::info!("Reassigned personnel {}", personnel_id);
        Ok(response)
    }

    async fn save_unavailability(
        &self,
        request: &UnavailabilityRequest,
    ) -> Result<MutationResponse> {
        let form = Form::new()
            .text("eletricista_id", request.eletricista_id.to_string())
            .text("prefixo", request.prefixo.clone())
            .text("motivo_id", request.motivo_id.to_string())
            .text("observacoes", request.observacoes.clone());

        let value = self
            .http
            .post_multipart(PATH_SAVE_UNAVAILABILITY, form)
            .await?;
        let response: MutationResponse = decode_envelope(value)?;

        tracing::info!(
            "Recorded unavailability for personnel {}",
            request.eletricista_id
        );
        Ok(response)
    }
}
