//! Pure report table builders.
//!
//! Each builder turns a decoded report into a [`ReportView`]. Totals rows
//! always sum the body counts and recompute percentages from those sums,
//! whatever the backend sent as per-row percentages.

use crate::features::reports::dtos::{OverallReport, PrefixReport, SupervisorReport};
use crate::features::reports::models::{
    percent, Cell, HeaderCell, ReportKind, ReportView, SummaryField, TableRow,
};
use crate::shared::constants::{LEGACY_MOTIVE_LABELS, MOTIVE_PRESENT};
use crate::shared::text::{find_label, find_motive, labels_match, lookup_motive};

const MISSING_NAME: &str = "---";
const TOTAL_LABEL: &str = "TOTAL";

fn column_sums(rows: &[Vec<i64>], width: usize) -> Vec<i64> {
    (0..width)
        .map(|col| rows.iter().map(|r| r.get(col).copied().unwrap_or(0)).sum())
        .collect()
}

fn name_or_dash(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => MISSING_NAME.to_string(),
    }
}

fn count_cells(counts: &[i64]) -> impl Iterator<Item = Cell> + '_ {
    counts.iter().map(|n| Cell::Count(*n))
}

// =============================================================================
// GERAL
// =============================================================================

/// One row per motive: count and share of all records. `None` when the
/// period has no data.
pub fn build_overall_table(report: &OverallReport) -> Option<ReportView> {
    if report.dados.is_empty() {
        return None;
    }

    let sum: i64 = report.dados.iter().map(|r| r.qtde).sum();
    let denominator = if report.total_registros > 0 {
        report.total_registros
    } else {
        sum
    };

    let rows = report
        .dados
        .iter()
        .map(|row| TableRow {
            cells: vec![
                Cell::text(name_or_dash(Some(row.motivo.as_str()))),
                Cell::Count(row.qtde),
                Cell::Percent(row.percentual.unwrap_or_else(|| percent(row.qtde, denominator))),
            ],
            emphasis: false,
        })
        .collect();

    let totals = TableRow {
        cells: vec![
            Cell::text(TOTAL_LABEL),
            Cell::Count(sum),
            Cell::Percent(percent(sum, denominator)),
        ],
        emphasis: true,
    };

    Some(ReportView {
        kind: ReportKind::Geral,
        title: ReportKind::Geral.title().to_string(),
        summary: vec![
            SummaryField::new("Período", report.periodo.label()),
            SummaryField::new("Total de eletricistas", report.total_eletricistas),
            SummaryField::new("Total de registros", denominator),
        ],
        header: vec![vec![
            HeaderCell::new("MOTIVO"),
            HeaderCell::new("QUANTIDADE"),
            HeaderCell::new("%"),
        ]],
        rows,
        totals: Some(totals),
    })
}

// =============================================================================
// POR SUPERVISOR
// =============================================================================

/// Count columns of the supervisor table: PRESENTE first, then the motives
/// listed by the response (or the legacy list when it lists none).
pub fn supervisor_columns(motivos: &[String]) -> Vec<String> {
    let listed: Vec<String> = if motivos.is_empty() {
        LEGACY_MOTIVE_LABELS.iter().map(|m| m.to_string()).collect()
    } else {
        motivos.to_vec()
    };

    std::iter::once(MOTIVE_PRESENT.to_string())
        .chain(
            listed
                .into_iter()
                .filter(|m| !labels_match(m, MOTIVE_PRESENT)),
        )
        .collect()
}

/// Columns: SUPERVISOR, one count per motive, TOTAL, one percentage per motive
pub fn build_supervisor_table(report: &SupervisorReport) -> Option<ReportView> {
    if report.dados.is_empty() {
        return None;
    }

    let labels = supervisor_columns(&report.motivos);
    let width = labels.len();

    let mut counts_by_row = Vec::with_capacity(report.dados.len());
    let mut rows = Vec::with_capacity(report.dados.len());

    for item in &report.dados {
        let counts: Vec<i64> = labels
            .iter()
            .map(|label| lookup_motive(&item.contadores, label))
            .collect();
        let total = if item.total_registros > 0 {
            item.total_registros
        } else {
            counts.iter().sum()
        };

        let percents = labels.iter().zip(&counts).map(|(label, count)| {
            let provided = item
                .percentuais
                .as_ref()
                .and_then(|p| find_motive(p, label));
            Cell::Percent(provided.unwrap_or_else(|| percent(*count, total)))
        });

        let cells = std::iter::once(Cell::text(name_or_dash(item.supervisor.as_deref())))
            .chain(count_cells(&counts))
            .chain(std::iter::once(Cell::Count(total)))
            .chain(percents)
            .collect();
        rows.push(TableRow {
            cells,
            emphasis: false,
        });

        let mut numeric = counts;
        numeric.push(total);
        counts_by_row.push(numeric);
    }

    let sums = column_sums(&counts_by_row, width + 1);
    let grand_total = sums[width];
    let totals = TableRow {
        cells: std::iter::once(Cell::text(TOTAL_LABEL))
            .chain(count_cells(&sums))
            .chain(sums[..width].iter().map(|n| Cell::Percent(percent(*n, grand_total))))
            .collect(),
        emphasis: true,
    };

    let mut second_row: Vec<HeaderCell> = labels.iter().map(HeaderCell::new).collect();
    second_row.push(HeaderCell::new(TOTAL_LABEL));
    second_row.extend(labels.iter().map(|l| HeaderCell::new(format!("% {}", l))));

    let total_records = if report.total_geral > 0 {
        report.total_geral
    } else {
        grand_total
    };

    Some(ReportView {
        kind: ReportKind::PorSupervisor,
        title: ReportKind::PorSupervisor.title().to_string(),
        summary: vec![
            SummaryField::new("Período", report.periodo.label()),
            SummaryField::new("Total de registros", total_records),
            SummaryField::new("Supervisores", report.dados.len()),
        ],
        header: vec![
            vec![
                HeaderCell::spanning("SUPERVISOR", 1, 2),
                HeaderCell::spanning("QUANTIDADE", width + 1, 1),
                HeaderCell::spanning("PERCENTUAL", width, 1),
            ],
            second_row,
        ],
        rows,
        totals: Some(totals),
    })
}

// =============================================================================
// POR PREFIXO
// =============================================================================

/// Pivots day records into one row per prefix, in first-seen order. Both
/// motives of a record are counted; labels outside the legacy list are
/// ignored, so TOTAL is the sum of the matched motive cells.
pub fn build_prefix_table(report: &PrefixReport) -> Option<ReportView> {
    if report.dados.is_empty() {
        return None;
    }

    let width = LEGACY_MOTIVE_LABELS.len();
    let mut prefixes: Vec<String> = Vec::new();
    let mut counts_by_prefix: Vec<Vec<i64>> = Vec::new();

    for record in &report.dados {
        let prefix = name_or_dash(Some(record.prefixo.as_str()));
        let position = match prefixes.iter().position(|p| *p == prefix) {
            Some(position) => position,
            None => {
                prefixes.push(prefix);
                counts_by_prefix.push(vec![0; width]);
                prefixes.len() - 1
            }
        };

        for motive in [&record.motivo1, &record.motivo2].into_iter().flatten() {
            match find_label(&LEGACY_MOTIVE_LABELS, motive) {
                Some(col) => counts_by_prefix[position][col] += 1,
                None => tracing::debug!("Ignoring unknown motive '{}' in prefix report", motive),
            }
        }
    }

    let rows_numeric: Vec<Vec<i64>> = counts_by_prefix
        .into_iter()
        .map(|mut counts| {
            let total = counts.iter().sum();
            counts.push(total);
            counts
        })
        .collect();

    let rows = prefixes
        .iter()
        .zip(&rows_numeric)
        .map(|(prefix, numeric)| TableRow {
            cells: std::iter::once(Cell::text(prefix.clone()))
                .chain(count_cells(numeric))
                .collect(),
            emphasis: false,
        })
        .collect();

    let sums = column_sums(&rows_numeric, width + 1);
    let totals = TableRow {
        cells: std::iter::once(Cell::text(TOTAL_LABEL))
            .chain(count_cells(&sums))
            .collect(),
        emphasis: true,
    };

    let mut header: Vec<HeaderCell> = vec![HeaderCell::new("PREFIXO")];
    header.extend(LEGACY_MOTIVE_LABELS.iter().map(|l| HeaderCell::new(*l)));
    header.push(HeaderCell::new(TOTAL_LABEL));

    let total_prefixes = if report.total_prefixos > 0 {
        report.total_prefixos
    } else {
        prefixes.len() as i64
    };
    let total_records = if report.total_registros > 0 {
        report.total_registros
    } else {
        report.dados.len() as i64
    };

    Some(ReportView {
        kind: ReportKind::PorPrefixo,
        title: ReportKind::PorPrefixo.title().to_string(),
        summary: vec![
            SummaryField::new("Período", report.periodo.label()),
            SummaryField::new("Total de prefixos", total_prefixes),
            SummaryField::new("Total de registros", total_records),
        ],
        header: vec![header],
        rows,
        totals: Some(totals),
    })
}
