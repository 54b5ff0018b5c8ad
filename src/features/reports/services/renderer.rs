use std::sync::{Arc, Mutex};

use crate::core::error::Result;
use crate::features::reports::clients::ReportBackend;
use crate::features::reports::models::{
    PeriodSelection, RenderedReport, ReportKind, ReportTabs, ReportView,
};
use crate::features::reports::services::builders::{
    build_overall_table, build_prefix_table, build_supervisor_table,
};
use crate::shared::types::DateRange;
use crate::shared::ui::{lock, ActionOutcome, Button, Dialogs};

pub const NO_DATA_MESSAGE: &str = "Nenhum dado encontrado para o período selecionado.";
pub const GENERATE_LABEL: &str = "Gerar Relatório";
pub const GENERATING_LABEL: &str = "Gerando...";

const GENERATED_AT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Report screen: tabs, period pickers and the single generate button
pub struct ReportRenderer {
    backend: Arc<dyn ReportBackend>,
    dialogs: Arc<dyn Dialogs>,
    tabs: Mutex<ReportTabs>,
    period: Mutex<PeriodSelection>,
    generate_button: Button,
    last: Mutex<Option<RenderedReport>>,
}

impl ReportRenderer {
    pub fn new(backend: Arc<dyn ReportBackend>, dialogs: Arc<dyn Dialogs>) -> Self {
        Self {
            backend,
            dialogs,
            tabs: Mutex::new(ReportTabs::default()),
            period: Mutex::new(PeriodSelection::default()),
            generate_button: Button::new(GENERATE_LABEL),
            last: Mutex::new(None),
        }
    }

    pub fn select_tab(&self, kind: ReportKind) {
        lock(&self.tabs).select(kind);
    }

    pub fn active_tab(&self) -> ReportKind {
        lock(&self.tabs).active()
    }

    pub fn set_period(&self, period: PeriodSelection) {
        *lock(&self.period) = period;
    }

    pub fn generate_button(&self) -> &Button {
        &self.generate_button
    }

    /// Last table drawn, if the last generation produced one
    pub fn last_report(&self) -> Option<RenderedReport> {
        lock(&self.last).clone()
    }

    /// Fetch and build one report; `None` when the period has no data
    pub async fn build(&self, kind: ReportKind, range: &DateRange) -> Result<Option<ReportView>> {
        let view = match kind {
            ReportKind::Geral => build_overall_table(&self.backend.overall(range).await?),
            ReportKind::PorSupervisor => {
                build_supervisor_table(&self.backend.by_supervisor(range).await?)
            }
            ReportKind::PorPrefixo => build_prefix_table(&self.backend.by_prefix(range).await?),
        };
        Ok(view)
    }

    /// Generate the report of the active tab for the selected period
    pub async fn generate(&self) -> ActionOutcome {
        let kind = self.active_tab();
        let selection = lock(&self.period).clone();

        let range = match selection.resolve() {
            Ok(range) => range,
            Err(err) => {
                self.dialogs.alert(&err.user_message("Período inválido"));
                return ActionOutcome::Blocked;
            }
        };

        let Some(_busy) = self.generate_button.busy(GENERATING_LABEL) else {
            return ActionOutcome::Blocked;
        };

        tracing::info!("Generating {} report for {}", kind, range);
        match self.build(kind, &range).await {
            Ok(Some(view)) => {
                let generated_at = chrono::Local::now().format(GENERATED_AT_FORMAT).to_string();
                *lock(&self.last) = Some(RenderedReport { view, generated_at });
                ActionOutcome::Completed
            }
            Ok(None) => {
                *lock(&self.last) = None;
                self.dialogs.alert(NO_DATA_MESSAGE);
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::warn!("Report {} failed: {}", kind, err);
                self.dialogs
                    .alert(&err.user_message("Erro ao conectar com a API"));
                ActionOutcome::Failed
            }
        }
    }
}
