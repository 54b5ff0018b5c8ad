use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::http::HttpClient;
use crate::features::search::dtos::{
    Eletricista, PersonnelSearchResponse, PrefixSearchResponse, PrefixoSugestao,
};
use crate::shared::constants::{PATH_SEARCH_PERSONNEL, PATH_SEARCH_PREFIXES};

/// Type-ahead search endpoints
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search_personnel(&self, term: &str) -> Result<Vec<Eletricista>>;

    async fn search_prefixes(&self, term: &str) -> Result<Vec<PrefixoSugestao>>;
}

pub struct HttpSearchClient {
    http: Arc<HttpClient>,
}

impl HttpSearchClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    async fn search_personnel(&self, term: &str) -> Result<Vec<Eletricista>> {
        let value = self
            .http
            .get_json(PATH_SEARCH_PERSONNEL, &[("q", term.to_string())])
            .await?;

        let response: PersonnelSearchResponse = serde_json::from_value(value).map_err(|e| {
            tracing::error!("Failed to parse personnel search response: {}", e);
            AppError::Decode(format!("Failed to parse personnel search response: {}", e))
        })?;

        tracing::debug!(
            "Personnel search '{}' returned {} result(s)",
            term,
            response.eletricistas.len()
        );
        Ok(response.eletricistas)
    }

    async fn search_prefixes(&self, term: &str) -> Result<Vec<PrefixoSugestao>> {
        let value = self
            .http
            .get_json(PATH_SEARCH_PREFIXES, &[("q", term.to_string())])
            .await?;

        let response: PrefixSearchResponse = serde_json::from_value(value).map_err(|e| {
            tracing::error!("Failed to parse prefix search response: {}", e);
            AppError::Decode(format!("Failed to parse prefix search response: {}", e))
        })?;

        tracing::debug!(
            "Prefix search '{}' returned {} result(s)",
            term,
            response.prefixos.len()
        );
        Ok(response.prefixos)
    }
}
