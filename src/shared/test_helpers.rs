#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::features::admin::clients::AdminBackend;
use crate::features::admin::dtos::{ResetPasswordRequest, ToggleStatusRequest};
use crate::features::registration::clients::RegistrationBackend;
use crate::features::registration::dtos::{
    PendingAssociation, SaveAttendanceResponse, UnavailabilityRequest,
};
use crate::features::reports::clients::ReportBackend;
use crate::features::reports::dtos::{OverallReport, PrefixReport, SupervisorReport};
use crate::features::reports::models::ReportKind;
use crate::features::search::clients::SearchBackend;
use crate::features::search::dtos::{Eletricista, PrefixoSugestao};
use crate::shared::types::{DateRange, MutationResponse};
use crate::shared::ui::{lock, Dialogs};

/// Sleep on the (paused) test clock, then let spawned tasks finish
pub async fn settle(duration: Duration) {
    tokio::time::sleep(duration).await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

pub fn eletricista(id: i64, nome: &str, matricula: &str, base: &str, prefixo: &str) -> Eletricista {
    Eletricista {
        id,
        nome: nome.to_string(),
        matricula: matricula.to_string(),
        base: base.to_string(),
        prefixo: prefixo.to_string(),
        polo: None,
        regional: None,
    }
}

// =============================================================================
// SEARCH BACKEND
// =============================================================================

/// In-memory search backend: filters by case-insensitive substring and
/// records every term it was asked for.
#[derive(Default)]
pub struct FakeSearch {
    personnel: Vec<Eletricista>,
    prefixes: Vec<PrefixoSugestao>,
    terms: Mutex<Vec<String>>,
    delays: Mutex<HashMap<String, Duration>>,
    fail_next: AtomicBool,
}

impl FakeSearch {
    pub fn with_personnel(personnel: Vec<Eletricista>) -> Self {
        Self {
            personnel,
            ..Default::default()
        }
    }

    pub fn with_prefixes(prefixes: Vec<PrefixoSugestao>) -> Self {
        Self {
            prefixes,
            ..Default::default()
        }
    }

    pub fn and_prefixes(mut self, prefixes: Vec<PrefixoSugestao>) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn terms(&self) -> Vec<String> {
        lock(&self.terms).clone()
    }

    pub fn delay_term(&self, term: &str, delay: Duration) {
        lock(&self.delays).insert(term.to_string(), delay);
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    async fn record(&self, term: &str) -> Result<()> {
        lock(&self.terms).push(term.to_string());
        let delay = lock(&self.delays).get(term).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(AppError::Transport("connection reset".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SearchBackend for FakeSearch {
    async fn search_personnel(&self, term: &str) -> Result<Vec<Eletricista>> {
        self.record(term).await?;
        let needle = term.to_lowercase();
        Ok(self
            .personnel
            .iter()
            .filter(|e| e.nome.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn search_prefixes(&self, term: &str) -> Result<Vec<PrefixoSugestao>> {
        self.record(term).await?;
        let needle = term.to_lowercase();
        Ok(self
            .prefixes
            .iter()
            .filter(|p| p.prefixo.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

// =============================================================================
// REGISTRATION BACKEND
// =============================================================================

/// Records every mutation; the next call fails once `fail_with` is armed
#[derive(Default)]
pub struct FakeRegistration {
    batches: Mutex<Vec<Vec<PendingAssociation>>>,
    reassigned: Mutex<Vec<i64>>,
    unavailability: Mutex<Vec<UnavailabilityRequest>>,
    failure: Mutex<Option<AppError>>,
}

impl FakeRegistration {
    pub fn fail_with(&self, err: AppError) {
        *lock(&self.failure) = Some(err);
    }

    pub fn saved_batches(&self) -> Vec<Vec<PendingAssociation>> {
        lock(&self.batches).clone()
    }

    pub fn reassigned(&self) -> Vec<i64> {
        lock(&self.reassigned).clone()
    }

    pub fn unavailability_requests(&self) -> Vec<UnavailabilityRequest> {
        lock(&self.unavailability).clone()
    }

    fn check_failure(&self) -> Result<()> {
        match lock(&self.failure).take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RegistrationBackend for FakeRegistration {
    async fn save_attendance(
        &self,
        associations: &[PendingAssociation],
    ) -> Result<SaveAttendanceResponse> {
        self.check_failure()?;
        lock(&self.batches).push(associations.to_vec());
        Ok(SaveAttendanceResponse {
            total: associations.len() as i64,
            mensagem: None,
        })
    }

    async fn reassign(&self, personnel_id: i64) -> Result<MutationResponse> {
        self.check_failure()?;
        lock(&self.reassigned).push(personnel_id);
        Ok(MutationResponse::default())
    }

    async fn save_unavailability(
        &self,
        request: &UnavailabilityRequest,
    ) -> Result<MutationResponse> {
        self.check_failure()?;
        lock(&self.unavailability).push(request.clone());
        Ok(MutationResponse::default())
    }
}

// =============================================================================
// REPORT BACKEND
// =============================================================================

/// Serves canned reports (empty by default) and records each request
#[derive(Default)]
pub struct FakeReports {
    overall: Mutex<OverallReport>,
    supervisor: Mutex<SupervisorReport>,
    prefix: Mutex<PrefixReport>,
    requested: Mutex<Vec<(ReportKind, DateRange)>>,
    failure: Mutex<Option<AppError>>,
}

impl FakeReports {
    pub fn set_overall(&self, report: OverallReport) {
        *lock(&self.overall) = report;
    }

    pub fn set_supervisor(&self, report: SupervisorReport) {
        *lock(&self.supervisor) = report;
    }

    pub fn set_prefix(&self, report: PrefixReport) {
        *lock(&self.prefix) = report;
    }

    pub fn fail_with(&self, err: AppError) {
        *lock(&self.failure) = Some(err);
    }

    pub fn requested(&self) -> Vec<(ReportKind, DateRange)> {
        lock(&self.requested).clone()
    }

    fn record(&self, kind: ReportKind, range: &DateRange) -> Result<()> {
        lock(&self.requested).push((kind, *range));
        match lock(&self.failure).take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ReportBackend for FakeReports {
    async fn overall(&self, range: &DateRange) -> Result<OverallReport> {
        self.record(ReportKind::Geral, range)?;
        Ok(lock(&self.overall).clone())
    }

    async fn by_supervisor(&self, range: &DateRange) -> Result<SupervisorReport> {
        self.record(ReportKind::PorSupervisor, range)?;
        Ok(lock(&self.supervisor).clone())
    }

    async fn by_prefix(&self, range: &DateRange) -> Result<PrefixReport> {
        self.record(ReportKind::PorPrefixo, range)?;
        Ok(lock(&self.prefix).clone())
    }
}

// =============================================================================
// ADMIN BACKEND
// =============================================================================

#[derive(Default)]
pub struct FakeAdmin {
    mensagem: Option<String>,
    toggles: Mutex<Vec<(i64, bool)>>,
    resets: Mutex<Vec<(i64, String)>>,
    failure: Mutex<Option<AppError>>,
}

impl FakeAdmin {
    /// Successful calls answer with `mensagem`
    pub fn answering(mensagem: &str) -> Self {
        Self {
            mensagem: Some(mensagem.to_string()),
            ..Default::default()
        }
    }

    pub fn fail_with(&self, err: AppError) {
        *lock(&self.failure) = Some(err);
    }

    pub fn toggles(&self) -> Vec<(i64, bool)> {
        lock(&self.toggles).clone()
    }

    pub fn resets(&self) -> Vec<(i64, String)> {
        lock(&self.resets).clone()
    }

    fn respond(&self) -> Result<MutationResponse> {
        if let Some(err) = lock(&self.failure).take() {
            return Err(err);
        }
        Ok(MutationResponse {
            mensagem: self.mensagem.clone(),
        })
    }
}

#[async_trait]
impl AdminBackend for FakeAdmin {
    async fn toggle_status(&self, request: &ToggleStatusRequest) -> Result<MutationResponse> {
        lock(&self.toggles).push((request.user_id, request.ativo));
        self.respond()
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<MutationResponse> {
        lock(&self.resets).push((request.user_id, request.nova_senha.clone()));
        self.respond()
    }
}

// =============================================================================
// DIALOGS
// =============================================================================

/// Dialogs answering from a script and recording every message shown
#[derive(Default)]
pub struct ScriptedDialogs {
    confirm_answers: Mutex<VecDeque<bool>>,
    prompt_answers: Mutex<VecDeque<Option<String>>>,
    alerts: Mutex<Vec<String>>,
    confirms: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    /// Confirms everything, prompts return `None`
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn answer_confirm(&self, answer: bool) -> &Self {
        lock(&self.confirm_answers).push_back(answer);
        self
    }

    pub fn answer_prompt(&self, answer: Option<&str>) -> &Self {
        lock(&self.prompt_answers).push_back(answer.map(str::to_string));
        self
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }

    pub fn last_alert(&self) -> Option<String> {
        lock(&self.alerts).last().cloned()
    }

    pub fn confirms(&self) -> Vec<String> {
        lock(&self.confirms).clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn alert(&self, message: &str) {
        lock(&self.alerts).push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        lock(&self.confirms).push(message.to_string());
        lock(&self.confirm_answers).pop_front().unwrap_or(true)
    }

    fn prompt(&self, message: &str) -> Option<String> {
        lock(&self.prompts).push(message.to_string());
        lock(&self.prompt_answers).pop_front().flatten()
    }
}
