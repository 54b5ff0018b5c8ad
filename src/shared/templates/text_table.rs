/// Fixed-width plain-text table for terminal output.
///
/// The first column is left-aligned, the others right-aligned; widths are
/// measured in characters so accented labels line up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let columns = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0);

        (0..columns)
            .map(|col| {
                std::iter::once(&self.header)
                    .chain(&self.rows)
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn format_line(cells: &[String], widths: &[usize]) -> String {
        widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = cells.get(col).map(String::as_str).unwrap_or("");
                let padding = " ".repeat(width.saturating_sub(cell.chars().count()));
                if col == 0 {
                    format!("{}{}", cell, padding)
                } else {
                    format!("{}{}", padding, cell)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut lines = vec![
            Self::format_line(&self.header, &widths),
            "-".repeat(rule_width),
        ];
        lines.extend(self.rows.iter().map(|row| Self::format_line(row, &widths)));
        lines.join("\n")
    }
}
