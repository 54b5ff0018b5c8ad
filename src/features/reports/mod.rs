//! Attendance reports: overall, per supervisor and per team prefix.

pub mod clients;
pub mod dtos;
pub mod models;
pub mod services;

pub use clients::{HttpReportClient, ReportBackend};
pub use models::{percent, Cell, PeriodSelection, RenderedReport, ReportKind, ReportView};
pub use services::ReportRenderer;
