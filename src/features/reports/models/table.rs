use serde::{Serialize, Serializer};
use std::fmt;

use crate::features::reports::models::ReportKind;

/// Share of `count` in `total`, in percent, rounded half away from zero to
/// one decimal. A zero total yields 0.
pub fn percent(count: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Typed table cell; serializes as its display text
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Count(i64),
    Percent(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn as_count(&self) -> Option<i64> {
        match self {
            Cell::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_percent(&self) -> Option<f64> {
        match self {
            Cell::Percent(p) => Some(*p),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Count(n) => write!(f, "{}", n),
            Cell::Percent(p) => write!(f, "{:.1}%", p),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub label: String,
    pub colspan: usize,
    pub rowspan: usize,
}

impl HeaderCell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            colspan: 1,
            rowspan: 1,
        }
    }

    pub fn spanning(label: impl Into<String>, colspan: usize, rowspan: usize) -> Self {
        Self {
            label: label.into(),
            colspan,
            rowspan,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<Cell>,
    /// Rendered bold (first column and totals)
    pub emphasis: bool,
}

/// Label/value pair shown above the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryField {
    pub label: String,
    pub value: String,
}

impl SummaryField {
    pub fn new(label: &str, value: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Everything a rendering adapter needs to draw one report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub kind: ReportKind,
    pub title: String,
    pub summary: Vec<SummaryField>,
    pub header: Vec<Vec<HeaderCell>>,
    pub rows: Vec<TableRow>,
    pub totals: Option<TableRow>,
}

/// A built view stamped with its generation time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedReport {
    pub view: ReportView,
    pub generated_at: String,
}
