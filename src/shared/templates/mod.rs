//! Rendering adapters for report views.
//!
//! ```ignore
//! use crate::shared::templates::render_template;
//!
//! let html = render_template("reports/report.html.jinja", minijinja::context! { report })?;
//! ```

pub mod engine;
pub mod text_table;

pub use engine::{render_template, template_exists, TemplateError};
pub use text_table::TextTable;
