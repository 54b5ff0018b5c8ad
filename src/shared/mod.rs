pub mod constants;
pub mod templates;
pub mod text;
pub mod types;
pub mod ui;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
