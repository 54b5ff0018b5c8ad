use std::sync::{Arc, Mutex};

use crate::core::config::SearchConfig;
use crate::features::registration::clients::RegistrationBackend;
use crate::features::registration::models::{
    AttendanceBoard, BoardError, InfoPanel, ModeSelector, PendingRow, WorkspaceMode,
};
use crate::features::search::{NoBinding, ReassignmentSource, SearchBackend, SuggestionWidget};
use crate::features::search::dtos::Eletricista;
use crate::shared::ui::{emit, lock, ActionOutcome, AppEvent, Button, Dialogs, EventSink, TextField};

pub const SAVE_LABEL: &str = "Salvar Todas as Associações";
pub const SAVING_LABEL: &str = "Salvando...";

/// Collaborators shared by the registration components
#[derive(Clone)]
pub struct RegistrationServices {
    pub search: Arc<dyn SearchBackend>,
    pub registration: Arc<dyn RegistrationBackend>,
    pub dialogs: Arc<dyn Dialogs>,
    pub events: EventSink,
    pub search_config: SearchConfig,
}

/// Controller of the registration screen: section switching, the
/// attendance queue builder and the reassignment search.
pub struct RegistrationWorkspace {
    board: Mutex<AttendanceBoard>,
    modes: Mutex<ModeSelector>,
    services: RegistrationServices,
    prefix: TextField,
    associate_button: Button,
    save_button: Button,
    reassign_search: SuggestionWidget<ReassignmentSource, NoBinding>,
}

impl RegistrationWorkspace {
    pub fn new(personnel: Vec<Eletricista>, services: RegistrationServices) -> Self {
        let associate_button = Button::new("Associar");
        associate_button.set_disabled(true);

        let reassign_search = SuggestionWidget::attach(
            TextField::new(),
            ReassignmentSource::new(Arc::clone(&services.search)),
            NoBinding,
            services.search_config,
        );

        Self {
            board: Mutex::new(AttendanceBoard::new(personnel)),
            modes: Mutex::new(ModeSelector::default()),
            services,
            prefix: TextField::new(),
            associate_button,
            save_button: Button::new(SAVE_LABEL),
            reassign_search,
        }
    }

    // =========================================================================
    // SECTIONS
    // =========================================================================

    pub fn switch_mode(&self, mode: WorkspaceMode) {
        lock(&self.modes).switch(mode);
    }

    pub fn active_mode(&self) -> WorkspaceMode {
        lock(&self.modes).active()
    }

    // =========================================================================
    // ATTENDANCE
    // =========================================================================

    pub fn prefix_field(&self) -> &TextField {
        &self.prefix
    }

    pub fn associate_button(&self) -> &Button {
        &self.associate_button
    }

    pub fn save_button(&self) -> &Button {
        &self.save_button
    }

    /// Snapshot of the board for rendering
    pub fn board(&self) -> AttendanceBoard {
        lock(&self.board).clone()
    }

    pub fn info(&self) -> InfoPanel {
        lock(&self.board).info()
    }

    pub fn pending_rows(&self) -> Vec<PendingRow> {
        lock(&self.board).pending_rows()
    }

    /// Checkbox ticked: fill the info panel and suggest the card's prefix
    pub fn check(&self, personnel_id: i64) {
        let suggestion = lock(&self.board).check(personnel_id);
        if let Some(prefix) = suggestion {
            self.prefix.set_value(prefix);
            self.associate_button.set_disabled(false);
        }
    }

    /// Checkbox cleared: only the checked card resets the prefix and button
    pub fn uncheck(&self, personnel_id: i64) {
        let was_checked = lock(&self.board).uncheck(personnel_id);
        if was_checked {
            self.reset_selection_fields();
        }
    }

    fn reset_selection_fields(&self) {
        self.prefix.clear();
        self.associate_button.set_disabled(true);
    }

    pub fn associate(&self) -> ActionOutcome {
        let result = lock(&self.board).associate(&self.prefix.value());

        match result {
            Ok(association) => {
                tracing::debug!(
                    "Queued personnel {} under {}",
                    association.eletricista_id,
                    association.prefixo
                );
                self.reset_selection_fields();
                ActionOutcome::Completed
            }
            Err(BoardError::NoSelection) => ActionOutcome::Blocked,
            Err(err @ BoardError::MissingPrefix) => {
                self.services.dialogs.alert(&err.to_string());
                self.prefix.focus();
                ActionOutcome::Blocked
            }
            Err(err @ BoardError::AlreadyQueued) => {
                self.services.dialogs.alert(&err.to_string());
                ActionOutcome::Blocked
            }
        }
    }

    pub fn remove(&self, index: usize) -> bool {
        lock(&self.board).remove(index).is_some()
    }

    pub fn clear_all(&self) -> ActionOutcome {
        if !self
            .services
            .dialogs
            .confirm("Limpar todas as associações pendentes?")
        {
            return ActionOutcome::Cancelled;
        }
        let removed = lock(&self.board).clear_all();
        tracing::debug!("Cleared {} pending association(s)", removed);
        ActionOutcome::Completed
    }

    /// Send the whole queue in one request.
    ///
    /// The batch is snapshotted before the await; only those entries are
    /// dropped on success, and a failure leaves the queue untouched.
    pub async fn save_all(&self) -> ActionOutcome {
        let batch = lock(&self.board).queue().entries().to_vec();
        let dialogs = &self.services.dialogs;

        if batch.is_empty() {
            dialogs.alert("Não há associações para salvar!");
            return ActionOutcome::Blocked;
        }
        if !dialogs.confirm(&format!("Salvar {} associação(ões)?", batch.len())) {
            return ActionOutcome::Cancelled;
        }

        let Some(_busy) = self.save_button.busy(SAVING_LABEL) else {
            return ActionOutcome::Blocked;
        };

        match self.services.registration.save_attendance(&batch).await {
            Ok(response) => {
                let saved: Vec<i64> = batch.iter().map(|a| a.eletricista_id).collect();
                lock(&self.board).discard_saved(&saved);
                dialogs.alert(&format!(
                    "{} associação(ões) salva(s) com sucesso!",
                    response.total
                ));
                emit(
                    &self.services.events,
                    AppEvent::AttendanceSaved {
                        total: response.total,
                    },
                );
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::warn!("Saving attendance failed: {}", err);
                dialogs.alert(&err.user_message("Erro ao salvar"));
                ActionOutcome::Failed
            }
        }
    }

    // =========================================================================
    // REASSIGNMENT
    // =========================================================================

    pub fn reassign_search(&self) -> &SuggestionWidget<ReassignmentSource, NoBinding> {
        &self.reassign_search
    }

    /// Reassign the person shown at `index` of the search results
    pub async fn reassign_result(&self, index: usize) -> ActionOutcome {
        match self.reassign_search.item(index) {
            Some(person) => self.reassign(&person).await,
            None => ActionOutcome::Blocked,
        }
    }

    pub async fn reassign(&self, person: &Eletricista) -> ActionOutcome {
        let dialogs = &self.services.dialogs;
        let question = format!(
            "Remanejar {} (Base: {}) para sua supervisão?",
            person.nome, person.base
        );
        if !dialogs.confirm(&question) {
            return ActionOutcome::Cancelled;
        }

        match self.services.registration.reassign(person.id).await {
            Ok(_) => {
                dialogs.alert(&format!(
                    "{} foi remanejado com sucesso!\n\nAgora você pode associá-lo na seção FREQUÊNCIA.",
                    person.nome
                ));
                emit(
                    &self.services.events,
                    AppEvent::PersonnelReassigned {
                        personnel_id: person.id,
                    },
                );
                ActionOutcome::Completed
            }
            Err(err) => {
                tracing::warn!("Reassigning personnel {} failed: {}", person.id, err);
                dialogs.alert(&err.user_message("Erro ao remanejar"));
                ActionOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::{
        eletricista, settle, FakeRegistration, FakeSearch, ScriptedDialogs,
    };
    use crate::shared::ui::event_channel;
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    struct Harness {
        workspace: RegistrationWorkspace,
        backend: Arc<FakeRegistration>,
        dialogs: Arc<ScriptedDialogs>,
        events: UnboundedReceiver<AppEvent>,
    }

    fn harness(backend: FakeRegistration, dialogs: ScriptedDialogs) -> Harness {
        let personnel = vec![
            eletricista(1, "Silva", "M-100", "Centro", "EQ-01"),
            eletricista(2, "Silvana", "M-200", "Norte", "EQ-02"),
        ];
        let backend = Arc::new(backend);
        let dialogs = Arc::new(dialogs);
        let (tx, rx) = event_channel();
        let search = Arc::new(FakeSearch::with_personnel(personnel.clone()));

        let services = RegistrationServices {
            search,
            registration: backend.clone(),
            dialogs: dialogs.clone(),
            events: tx,
            search_config: SearchConfig::default(),
        };
        Harness {
            workspace: RegistrationWorkspace::new(personnel, services),
            backend,
            dialogs,
            events: rx,
        }
    }

    fn queue_both(workspace: &RegistrationWorkspace) {
        workspace.check(1);
        workspace.prefix_field().set_value("EQ-12");
        assert_eq!(workspace.associate(), ActionOutcome::Completed);
        workspace.check(2);
        workspace.prefix_field().set_value("EQ-07");
        assert_eq!(workspace.associate(), ActionOutcome::Completed);
    }

    #[tokio::test]
    async fn test_save_all_sends_one_batch() {
        let mut h = harness(FakeRegistration::default(), ScriptedDialogs::accepting());
        queue_both(&h.workspace);

        assert_eq!(h.workspace.save_all().await, ActionOutcome::Completed);

        let batches = h.backend.saved_batches();
        assert_eq!(batches.len(), 1);
        let prefixes: Vec<_> = batches[0].iter().map(|a| a.prefixo.as_str()).collect();
        assert_eq!(prefixes, vec!["EQ-12", "EQ-07"]);

        assert_eq!(h.dialogs.confirms(), vec!["Salvar 2 associação(ões)?"]);
        assert_eq!(
            h.dialogs.last_alert().as_deref(),
            Some("2 associação(ões) salva(s) com sucesso!")
        );
        assert_eq!(h.events.recv().await, Some(AppEvent::AttendanceSaved { total: 2 }));
        assert!(h.workspace.pending_rows().is_empty());
        assert!(h.workspace.board().cards().is_empty());
        assert_eq!(h.workspace.save_button().label(), SAVE_LABEL);
    }

    #[tokio::test]
    async fn test_save_all_failure_keeps_queue() {
        let backend = FakeRegistration::default();
        backend.fail_with(AppError::Backend("Prefixo inexistente".to_string()));
        let h = harness(backend, ScriptedDialogs::accepting());
        queue_both(&h.workspace);

        assert_eq!(h.workspace.save_all().await, ActionOutcome::Failed);
        assert_eq!(
            h.dialogs.last_alert().as_deref(),
            Some("Erro: Prefixo inexistente")
        );
        assert_eq!(h.workspace.pending_rows().len(), 2);
        assert_eq!(h.workspace.board().visible_cards().count(), 0);
        assert_eq!(h.workspace.board().cards().len(), 2);
        assert!(!h.workspace.save_button().is_disabled());
    }

    #[tokio::test]
    async fn test_save_all_requires_queue_and_confirmation() {
        let dialogs = ScriptedDialogs::accepting();
        dialogs.answer_confirm(false);
        let h = harness(FakeRegistration::default(), dialogs);

        assert_eq!(h.workspace.save_all().await, ActionOutcome::Blocked);
        assert_eq!(
            h.dialogs.last_alert().as_deref(),
            Some("Não há associações para salvar!")
        );

        queue_both(&h.workspace);
        assert_eq!(h.workspace.save_all().await, ActionOutcome::Cancelled);
        assert!(h.backend.saved_batches().is_empty());
    }

    #[tokio::test]
    async fn test_associate_blocks_on_missing_prefix() {
        let h = harness(FakeRegistration::default(), ScriptedDialogs::accepting());
        assert_eq!(h.workspace.associate(), ActionOutcome::Blocked);
        assert!(h.dialogs.alerts().is_empty());

        h.workspace.check(1);
        assert_eq!(h.workspace.prefix_field().value(), "EQ-01");
        assert!(!h.workspace.associate_button().is_disabled());

        h.workspace.prefix_field().set_value("  ");
        assert_eq!(h.workspace.associate(), ActionOutcome::Blocked);
        assert_eq!(
            h.dialogs.last_alert().as_deref(),
            Some("Informe o prefixo da equipe!")
        );
        assert!(h.workspace.prefix_field().is_focused());
    }

    #[tokio::test]
    async fn test_uncheck_other_card_keeps_selection() {
        let h = harness(FakeRegistration::default(), ScriptedDialogs::accepting());
        h.workspace.check(2);
        assert_eq!(h.workspace.prefix_field().value(), "EQ-02");

        h.workspace.uncheck(1);
        assert_eq!(h.workspace.prefix_field().value(), "EQ-02");
        assert!(!h.workspace.associate_button().is_disabled());

        h.workspace.uncheck(2);
        assert!(h.workspace.prefix_field().is_empty());
        assert!(h.workspace.associate_button().is_disabled());
        assert_eq!(h.workspace.info(), InfoPanel::Empty);
    }

    #[tokio::test]
    async fn test_clear_all_needs_confirmation() {
        let dialogs = ScriptedDialogs::accepting();
        dialogs.answer_confirm(false);
        let h = harness(FakeRegistration::default(), dialogs);
        queue_both(&h.workspace);

        assert_eq!(h.workspace.clear_all(), ActionOutcome::Cancelled);
        assert_eq!(h.workspace.pending_rows().len(), 2);

        assert_eq!(h.workspace.clear_all(), ActionOutcome::Completed);
        assert!(h.workspace.pending_rows().is_empty());
        assert_eq!(h.workspace.board().visible_cards().count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reassign_from_search_results() {
        let mut h = harness(FakeRegistration::default(), ScriptedDialogs::accepting());
        let search = h.workspace.reassign_search();
        search.type_text("Silvana");
        settle(Duration::from_millis(350)).await;

        assert_eq!(h.workspace.reassign_result(0).await, ActionOutcome::Completed);
        assert_eq!(h.backend.reassigned(), vec![2]);
        assert_eq!(
            h.dialogs.confirms(),
            vec!["Remanejar Silvana (Base: Norte) para sua supervisão?"]
        );
        assert_eq!(
            h.events.recv().await,
            Some(AppEvent::PersonnelReassigned { personnel_id: 2 })
        );
    }

    #[tokio::test]
    async fn test_reassign_transport_failure() {
        let backend = FakeRegistration::default();
        backend.fail_with(AppError::Transport("connection refused".to_string()));
        let h = harness(backend, ScriptedDialogs::accepting());

        let person = eletricista(7, "Souza", "M-700", "Sul", "");
        assert_eq!(h.workspace.reassign(&person).await, ActionOutcome::Failed);
        assert_eq!(
            h.dialogs.last_alert().as_deref(),
            Some("Erro ao remanejar: Transport error: connection refused")
        );
    }

    #[test]
    fn test_switching_mode_keeps_queue() {
        let h = harness(FakeRegistration::default(), ScriptedDialogs::accepting());
        h.workspace.check(1);
        h.workspace.associate();

        h.workspace.switch_mode(WorkspaceMode::Unavailability);
        h.workspace.switch_mode(WorkspaceMode::Attendance);
        assert_eq!(h.workspace.active_mode(), WorkspaceMode::Attendance);
        assert_eq!(h.workspace.pending_rows().len(), 1);
    }
}
