//! View seams injected into the components.
//!
//! Components never look elements up by id. They receive the handles they
//! read and write ([`TextField`], [`Button`]), a [`Dialogs`] implementation
//! for blocking messages, and an [`EventSink`] that replaces the old
//! reload-on-success behaviour.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc;

/// Lock a mutex, recovering the data if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// =============================================================================
// TEXT FIELDS
// =============================================================================

#[derive(Debug, Default)]
struct FieldState {
    value: String,
    focused: bool,
    text_selected: bool,
}

/// Shared handle to a text input. Clones refer to the same field.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    state: Arc<Mutex<FieldState>>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let field = Self::new();
        field.set_value(value);
        field
    }

    pub fn value(&self) -> String {
        lock(&self.state).value.clone()
    }

    pub fn trimmed(&self) -> String {
        lock(&self.state).value.trim().to_string()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        let mut state = lock(&self.state);
        state.value = value.into();
        state.text_selected = false;
    }

    pub fn clear(&self) {
        self.set_value(String::new());
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.state).value.is_empty()
    }

    pub fn focus(&self) {
        lock(&self.state).focused = true;
    }

    pub fn blur(&self) {
        let mut state = lock(&self.state);
        state.focused = false;
        state.text_selected = false;
    }

    /// Focus and select the whole value, ready to be overtyped
    pub fn focus_and_select(&self) {
        let mut state = lock(&self.state);
        state.focused = true;
        state.text_selected = true;
    }

    pub fn is_focused(&self) -> bool {
        lock(&self.state).focused
    }

    pub fn is_text_selected(&self) -> bool {
        lock(&self.state).text_selected
    }
}

// =============================================================================
// BUTTONS
// =============================================================================

#[derive(Debug)]
struct ButtonState {
    label: String,
    disabled: bool,
}

/// Shared handle to a clickable control
#[derive(Debug, Clone)]
pub struct Button {
    state: Arc<Mutex<ButtonState>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ButtonState {
                label: label.into(),
                disabled: false,
            })),
        }
    }

    pub fn label(&self) -> String {
        lock(&self.state).label.clone()
    }

    pub fn is_disabled(&self) -> bool {
        lock(&self.state).disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        lock(&self.state).disabled = disabled;
    }

    /// Disable the button under `busy_label` until the guard is dropped.
    ///
    /// Returns `None` when the button is already busy, so a second click
    /// during a pending request does nothing.
    pub fn busy(&self, busy_label: &str) -> Option<BusyGuard> {
        let mut state = lock(&self.state);
        if state.disabled {
            return None;
        }
        let restore_label = std::mem::replace(&mut state.label, busy_label.to_string());
        state.disabled = true;
        Some(BusyGuard {
            button: self.clone(),
            restore_label,
        })
    }
}

/// Restores the label and re-enables the button on drop
#[derive(Debug)]
pub struct BusyGuard {
    button: Button,
    restore_label: String,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let mut state = lock(&self.button.state);
        state.label = std::mem::take(&mut self.restore_label);
        state.disabled = false;
    }
}

// =============================================================================
// DIALOGS
// =============================================================================

/// Blocking user dialogs (alert / confirm / prompt)
pub trait Dialogs: Send + Sync {
    fn alert(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;

    /// `None` when the user cancels or enters nothing
    fn prompt(&self, message: &str) -> Option<String>;
}

// =============================================================================
// ACTIONS
// =============================================================================

/// How a user-triggered action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Stopped by a client-side check; nothing was sent
    Blocked,
    /// The operator declined a confirmation or prompt
    Cancelled,
    Completed,
    /// The request was sent and failed
    Failed,
}

// =============================================================================
// EVENTS
// =============================================================================

/// Successful outcomes a consuming application may react to
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    AttendanceSaved { total: i64 },
    PersonnelReassigned { personnel_id: i64 },
    UnavailabilityRecorded { personnel_id: i64 },
    UserStatusChanged { user_id: i64, active: bool },
    PasswordReset { user_id: i64 },
}

pub type EventSink = mpsc::UnboundedSender<AppEvent>;

pub fn event_channel() -> (EventSink, mpsc::UnboundedReceiver<AppEvent>) {
    mpsc::unbounded_channel()
}

pub(crate) fn emit(sink: &EventSink, event: AppEvent) {
    if sink.send(event).is_err() {
        tracing::debug!("Event receiver dropped; event discarded");
    }
}
