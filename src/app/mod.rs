//! Central application state for steamsum.
//!
//! `App` is the root view: it owns the search box and the summary request
//! lifecycle. Input arrives as [`Action`]s from the keybinding dispatcher and
//! as fetch results from background tasks; every transition returns the
//! [`Effect`]s the runtime must carry out. No rendering and no I/O happen here.

pub mod search;

use ratatui::layout::{Position, Rect};

use crate::client::ApiError;
use crate::summary::{AppId, Candidate, SummaryResult};
use search::{SearchInput, SuggestRequest};

/// Lifecycle of the summary request. Exactly one state holds at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading { app_id: AppId, name: String },
    Error(String),
    Ready(SummaryResult),
}

/// Which body the main area shows. Derived from [`RequestState`] alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Placeholder,
    Spinner,
    Error,
    Result,
}

/// Side effects requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch suggestions for `query` after the debounce delay, replacing any pending fetch.
    ScheduleSuggestions { generation: u64, query: String },
    /// Drop the pending suggestion fetch.
    CancelSuggestions,
    /// Request the review summary for `app_id`.
    Summarize { seq: u64, app_id: AppId },
    Quit,
}

/// User intents, already decoupled from concrete keys and mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    ClearInput,
    /// Move down in the dropdown, or scroll the result when it is closed.
    Down,
    /// Move up in the dropdown, or scroll the result when it is closed.
    Up,
    PageDown,
    PageUp,
    /// Enter: pick the highlighted suggestion, or submit.
    Confirm,
    /// Esc: close the dropdown.
    Dismiss,
    /// Primary mouse button pressed at (column, row).
    Click { column: u16, row: u16 },
    Quit,
}

/// Screen regions recorded by the last render, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitRegions {
    pub input: Rect,
    pub button: Rect,
    /// Dropdown list including its border. Empty when the dropdown is hidden.
    pub dropdown: Rect,
    /// Index of the first suggestion shown in the dropdown.
    pub dropdown_offset: usize,
}

impl HitRegions {
    fn in_search_region(&self, pos: Position) -> bool {
        self.input.contains(pos) || self.button.contains(pos) || self.dropdown.contains(pos)
    }

    /// Suggestion index under `pos`, if any. Border rows do not count.
    fn dropdown_index(&self, pos: Position) -> Option<usize> {
        if !self.dropdown.contains(pos) {
            return None;
        }
        let top = self.dropdown.y + 1;
        let bottom = self.dropdown.bottom().saturating_sub(1);
        if pos.y < top || pos.y >= bottom {
            return None;
        }
        Some(self.dropdown_offset + usize::from(pos.y - top))
    }
}

pub struct App {
    pub search: SearchInput,
    request: RequestState,
    /// Sequence number of the most recent summary request
    seq: u64,
    /// Vertical scroll of the result panel
    pub result_scroll: u16,
    /// Rows of the result body visible in the last frame
    pub result_viewport_height: u16,
    pub spinner_frame: usize,
    pub regions: HitRegions,
}

impl App {
    pub fn new(min_query_len: usize) -> Self {
        Self {
            search: SearchInput::new(min_query_len),
            request: RequestState::Idle,
            seq: 0,
            result_scroll: 0,
            result_viewport_height: 0,
            spinner_frame: 0,
            regions: HitRegions::default(),
        }
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.request, RequestState::Loading { .. })
    }

    pub fn view(&self) -> ViewKind {
        match self.request {
            RequestState::Idle => ViewKind::Placeholder,
            RequestState::Loading { .. } => ViewKind::Spinner,
            RequestState::Error(_) => ViewKind::Error,
            RequestState::Ready(_) => ViewKind::Result,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.search.can_submit(self.is_loading())
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Quit => vec![Effect::Quit],
            Action::Insert(c) => {
                if self.is_loading() {
                    return Vec::new();
                }
                suggest_effect(self.search.insert_char(c))
            }
            Action::Backspace => self.edit(SearchInput::backspace),
            Action::ClearInput => self.edit(SearchInput::clear),
            Action::Down => {
                if self.search.dropdown_visible() {
                    self.search.highlight_next();
                } else {
                    self.scroll_by(1);
                }
                Vec::new()
            }
            Action::Up => {
                if self.search.dropdown_visible() {
                    self.search.highlight_prev();
                } else {
                    self.scroll_by(-1);
                }
                Vec::new()
            }
            Action::PageDown => {
                self.scroll_by(i32::from(self.page()));
                Vec::new()
            }
            Action::PageUp => {
                self.scroll_by(-i32::from(self.page()));
                Vec::new()
            }
            Action::Confirm => {
                if self.search.dropdown_visible() && self.search.select_highlighted() {
                    return vec![Effect::CancelSuggestions];
                }
                self.submit()
            }
            Action::Dismiss => {
                self.search.dismiss();
                Vec::new()
            }
            Action::Click { column, row } => self.click(Position::new(column, row)),
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut SearchInput) -> Option<SuggestRequest>) -> Vec<Effect> {
        if self.is_loading() {
            return Vec::new();
        }
        f(&mut self.search).map(suggest_effect).unwrap_or_default()
    }

    fn click(&mut self, pos: Position) -> Vec<Effect> {
        if self.search.dropdown_visible() {
            if let Some(index) = self.regions.dropdown_index(pos) {
                if self.search.select(index) {
                    return vec![Effect::CancelSuggestions];
                }
            }
        }
        if self.regions.button.contains(pos) {
            return self.submit();
        }
        if !self.regions.in_search_region(pos) {
            self.search.dismiss();
        }
        Vec::new()
    }

    /// Hand the selected candidate to the summary request, if allowed.
    fn submit(&mut self) -> Vec<Effect> {
        let Some(Candidate { appid, name }) = self.search.submit(self.is_loading()) else {
            return Vec::new();
        };

        self.seq += 1;
        self.result_scroll = 0;
        tracing::info!(app_id = %appid, game = %name, seq = self.seq, "requesting summary");
        self.request = RequestState::Loading {
            app_id: appid.clone(),
            name,
        };
        vec![Effect::Summarize {
            seq: self.seq,
            app_id: appid,
        }]
    }

    pub fn on_suggestions(&mut self, generation: u64, result: Result<Vec<Candidate>, ApiError>) {
        self.search.apply_suggestions(generation, result);
    }

    pub fn on_summary(&mut self, seq: u64, result: Result<SummaryResult, ApiError>) {
        if seq != self.seq || !self.is_loading() {
            tracing::warn!(seq, current = self.seq, "ignoring stale summary response");
            return;
        }

        self.request = match result {
            Ok(summary) => {
                tracing::info!(
                    game = %summary.game,
                    praised = summary.summary.praised.len(),
                    criticized = summary.summary.criticized.len(),
                    "summary ready"
                );
                RequestState::Ready(summary)
            }
            Err(e) => {
                tracing::warn!(error = %e, "summary request failed");
                RequestState::Error(e.user_message())
            }
        };
    }

    /// Advance the loading animation
    pub fn tick(&mut self) {
        if self.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    fn page(&self) -> u16 {
        self.result_viewport_height.max(1)
    }

    fn scroll_by(&mut self, delta: i32) {
        if self.view() != ViewKind::Result {
            return;
        }
        let next = (i32::from(self.result_scroll) + delta).clamp(0, i32::from(u16::MAX));
        self.result_scroll = next as u16;
    }
}

fn suggest_effect(request: SuggestRequest) -> Vec<Effect> {
    match request {
        SuggestRequest::Schedule { generation, query } => {
            vec![Effect::ScheduleSuggestions { generation, query }]
        }
        SuggestRequest::Cancel => vec![Effect::CancelSuggestions],
    }
}
