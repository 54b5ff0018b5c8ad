pub mod builders;
pub mod output;
pub mod renderer;

pub use builders::{
    build_overall_table, build_prefix_table, build_supervisor_table, supervisor_columns,
};
pub use output::{render_html, render_text};
pub use renderer::*;
