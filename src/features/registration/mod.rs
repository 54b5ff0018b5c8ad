//! Registration screen: attendance queue, reassignment and unavailability.

pub mod clients;
pub mod dtos;
pub mod models;
pub mod services;

pub use clients::{HttpRegistrationClient, RegistrationBackend};
pub use models::{AttendanceBoard, BoardError, InfoPanel, ModeSelector, PendingQueue, WorkspaceMode};
pub use services::{RegistrationServices, RegistrationWorkspace, UnavailabilityForm};
