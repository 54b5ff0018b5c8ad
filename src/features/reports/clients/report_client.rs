use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::core::http::HttpClient;
use crate::features::reports::dtos::{OverallReport, PrefixReport, SupervisorReport};
use crate::shared::constants::{
    PATH_REPORT_BY_PREFIX, PATH_REPORT_BY_SUPERVISOR, PATH_REPORT_OVERALL,
};
use crate::shared::types::{decode_envelope, DateRange};

/// Attendance report endpoints, all keyed by a date range
#[async_trait]
pub trait ReportBackend: Send + Sync {
    async fn overall(&self, range: &DateRange) -> Result<OverallReport>;

    async fn by_supervisor(&self, range: &DateRange) -> Result<SupervisorReport>;

    async fn by_prefix(&self, range: &DateRange) -> Result<PrefixReport>;
}

pub struct HttpReportClient {
    http: Arc<HttpClient>,
}

impl HttpReportClient {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str, range: &DateRange) -> Result<T> {
        let value = self.http.get_json(path, &range.query_pairs()).await?;
        decode_envelope(value).inspect_err(|e| {
            tracing::warn!("Report {} for {} failed: {}", path, range, e);
        })
    }
}

#[async_trait]
impl ReportBackend for HttpReportClient {
    async fn overall(&self, range: &DateRange) -> Result<OverallReport> {
        let report: OverallReport = self.fetch(PATH_REPORT_OVERALL, range).await?;
        tracing::debug!("Overall report: {} motive row(s)", report.dados.len());
        Ok(report)
    }

    async fn by_supervisor(&self, range: &DateRange) -> Result<SupervisorReport> {
        let report: SupervisorReport = self.fetch(PATH_REPORT_BY_SUPERVISOR, range).await?;
        tracing::debug!("Supervisor report: {} supervisor(s)", report.dados.len());
        Ok(report)
    }

    async fn by_prefix(&self, range: &DateRange) -> Result<PrefixReport> {
        let report: PrefixReport = self.fetch(PATH_REPORT_BY_PREFIX, range).await?;
        tracing::debug!("Prefix report: {} record(s)", report.dados.len());
        Ok(report)
    }
}
