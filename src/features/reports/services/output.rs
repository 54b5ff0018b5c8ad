use minijinja::context;

use crate::core::error::Result;
use crate::features::reports::models::{RenderedReport, ReportView};
use crate::shared::templates::{render_template, TextTable};

const REPORT_TEMPLATE: &str = "reports/report.html.jinja";

/// HTML fragment of the report screen (summary, table, generation time)
pub fn render_html(report: &RenderedReport) -> Result<String> {
    Ok(render_template(REPORT_TEMPLATE, context! { report })?)
}

/// One label per data column: leading cells spanning every header row,
/// followed by the innermost header row.
fn leaf_labels(view: &ReportView) -> Vec<String> {
    let depth = view.header.len();
    let Some(last) = view.header.last() else {
        return Vec::new();
    };
    if depth == 1 {
        return last.iter().map(|h| h.label.clone()).collect();
    }

    view.header[0]
        .iter()
        .filter(|h| h.rowspan >= depth)
        .chain(last.iter())
        .map(|h| h.label.clone())
        .collect()
}

/// Plain-text rendering for the terminal
pub fn render_text(report: &RenderedReport) -> String {
    let view = &report.view;
    let mut table = TextTable::new(leaf_labels(view));
    for row in view.rows.iter().chain(view.totals.as_ref()) {
        table.push_row(row.cells.iter().map(ToString::to_string).collect());
    }

    let mut out = vec![view.title.clone(), String::new()];
    out.extend(
        view.summary
            .iter()
            .map(|field| format!("{}: {}", field.label, field.value)),
    );
    out.push(String::new());
    out.push(table.render());
    out.push(String::new());
    out.push(format!("Gerado em {}", report.generated_at));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::dtos::{Periodo, SupervisorReport, SupervisorRow};
    use crate::features::reports::services::build_supervisor_table;

    fn rendered() -> RenderedReport {
        let report = SupervisorReport {
            periodo: Periodo {
                inicio: "2024-05-01".to_string(),
                fim: "2024-05-02".to_string(),
            },
            total_geral: 4,
            motivos: vec!["FALTA".to_string()],
            dados: vec![SupervisorRow {
                supervisor: Some("Ana & Cia".to_string()),
                contadores: [("PRESENTE".to_string(), 3), ("FALTA".to_string(), 1)]
                    .into_iter()
                    .collect(),
                percentuais: None,
                total_registros: 4,
            }],
        };
        RenderedReport {
            view: build_supervisor_table(&report).unwrap(),
            generated_at: "01/05/2024 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_html_escapes_and_spans() {
        let html = render_html(&rendered()).unwrap();
        assert!(html.contains("Ana &amp; Cia"));
        assert!(html.contains(r#"<th rowspan="2">SUPERVISOR</th>"#));
        assert!(html.contains(r#"<th colspan="3">QUANTIDADE</th>"#));
        assert!(html.contains(r#"<tr class="linha-total">"#));
        assert!(html.contains("<strong>75.0%</strong>"));
        assert!(html.contains("Gerado em 01/05/2024 10:00:00"));
    }

    #[test]
    fn test_text_output() {
        let text = render_text(&rendered());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Relatório por Supervisor");
        assert!(lines.contains(&"Período: 2024-05-01 até 2024-05-02"));
        assert!(text.contains("SUPERVISOR"));
        assert!(text.contains("% FALTA"));
        assert!(lines.iter().any(|l| l.starts_with("TOTAL")));
        assert_eq!(lines.last(), Some(&"Gerado em 01/05/2024 10:00:00"));
    }
}
