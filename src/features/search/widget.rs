use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::core::config::SearchConfig;
use crate::features::search::bindings::SelectionBinding;
use crate::features::search::dtos::SuggestionRow;
use crate::features::search::sources::SuggestionSource;
use crate::shared::ui::{lock, TextField};

/// Where a document click landed, relative to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    Panel,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRow {
    Suggestion(SuggestionRow),
    /// The single "no results" row
    Empty(String),
}

/// Snapshot of the suggestion panel for a rendering adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub visible: bool,
    pub rows: Vec<PanelRow>,
}

struct WidgetState<T> {
    visible: bool,
    /// `None` until the first search answers
    results: Option<Vec<T>>,
    selected: Option<T>,
    /// Bumped on every keystroke; responses from older generations are dropped
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl<T> Default for WidgetState<T> {
    fn default() -> Self {
        Self {
            visible: false,
            results: None,
            selected: None,
            generation: 0,
            timer: None,
        }
    }
}

struct Inner<S: SuggestionSource, B> {
    input: TextField,
    source: S,
    binding: B,
    config: SearchConfig,
    state: Mutex<WidgetState<S::Item>>,
}

/// Debounced type-ahead bound to one text input.
///
/// Keystrokes shorter than `min_chars` (after trimming) close the panel and
/// never reach the backend. Longer ones restart a single trailing-edge timer;
/// when it fires the trimmed term is searched and the panel repainted.
/// Event handlers must be called from inside a Tokio runtime.
pub struct SuggestionWidget<S: SuggestionSource, B> {
    inner: Arc<Inner<S, B>>,
}

impl<S: SuggestionSource, B> Clone for SuggestionWidget<S, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, B> SuggestionWidget<S, B>
where
    S: SuggestionSource,
    B: SelectionBinding<S::Item>,
{
    pub fn attach(input: TextField, source: S, binding: B, config: SearchConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                input,
                source,
                binding,
                config,
                state: Mutex::new(WidgetState::default()),
            }),
        }
    }

    pub fn input(&self) -> &TextField {
        &self.inner.input
    }

    /// Replace the input value and handle it as a keystroke
    pub fn type_text(&self, value: &str) {
        self.inner.input.set_value(value);
        self.on_input();
    }

    pub fn on_input(&self) {
        let term = self.inner.input.trimmed();

        let generation = {
            let mut state = lock(&self.inner.state);
            if let Some(timer) = state.timer.take() {
                timer.abort();
            }
            state.generation += 1;
            state.selected = None;
            state.generation
        };
        self.inner.binding.reset();

        if term.chars().count() < self.inner.config.min_chars {
            lock(&self.inner.state).visible = false;
            return;
        }

        let inner = Arc::clone(&self.inner);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(inner.config.debounce).await;
            // the fetch outlives the timer: a later keystroke must not cancel it
            tokio::spawn(Inner::fetch(inner, term, generation));
        });
        lock(&self.inner.state).timer = Some(timer);
    }

    /// Re-open the last result set without searching again
    pub fn on_focus(&self) {
        let long_enough =
            self.inner.input.value().chars().count() >= self.inner.config.min_chars;
        let mut state = lock(&self.inner.state);
        if long_enough && state.results.is_some() {
            state.visible = true;
        }
    }

    pub fn on_document_click(&self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.close();
        }
    }

    pub fn close(&self) {
        lock(&self.inner.state).visible = false;
    }

    /// Commit the suggestion at `index`; `None` if there is no such row
    pub fn select(&self, index: usize) -> Option<S::Item> {
        let item = lock(&self.inner.state)
            .results
            .as_ref()
            .and_then(|items| items.get(index))
            .cloned()?;

        let row = self.inner.source.row(&item);
        self.inner.input.set_value(row.title);
        self.inner.binding.commit(&item);

        let mut state = lock(&self.inner.state);
        state.selected = Some(item.clone());
        state.visible = false;
        Some(item)
    }

    pub fn selected(&self) -> Option<S::Item> {
        lock(&self.inner.state).selected.clone()
    }

    pub fn item(&self, index: usize) -> Option<S::Item> {
        lock(&self.inner.state)
            .results
            .as_ref()
            .and_then(|items| items.get(index))
            .cloned()
    }

    pub fn is_open(&self) -> bool {
        lock(&self.inner.state).visible
    }

    pub fn panel(&self) -> PanelView {
        let state = lock(&self.inner.state);
        let rows = match &state.results {
            None => Vec::new(),
            Some(items) if items.is_empty() => {
                vec![PanelRow::Empty(self.inner.source.empty_label().to_string())]
            }
            Some(items) => items
                .iter()
                .map(|item| PanelRow::Suggestion(self.inner.source.row(item)))
                .collect(),
        };
        PanelView {
            visible: state.visible,
            rows,
        }
    }

    /// Cancel the pending timer and close the panel
    pub fn detach(&self) {
        let mut state = lock(&self.inner.state);
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.visible = false;
    }
}

impl<S: SuggestionSource, B> Inner<S, B> {
    async fn fetch(self: Arc<Self>, term: String, generation: u64) {
        tracing::debug!("Searching suggestions for '{}'", term);

        match self.source.search(&term).await {
            Ok(items) => {
                let mut state = lock(&self.state);
                if state.generation != generation {
                    tracing::debug!("Discarding stale suggestions for '{}'", term);
                    return;
                }
                state.results = Some(items);
                state.visible = true;
            }
            Err(e) => {
                tracing::warn!("Suggestion search for '{}' failed: {}", term, e);
            }
        }
    }
}
