use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for record identifiers carried in hidden form fields
    /// - Valid: "1", "4521"
    /// - Invalid: "", "0x1", "12a", " 7"
    pub static ref NUMERIC_ID_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();

    /// Any run of whitespace, collapsed to one space when folding labels
    pub static ref WHITESPACE_RUN_REGEX: Regex = Regex::new(r"\s+").unwrap();
}
