//! Search box state: query text, autocomplete suggestions, and the selected game.
//!
//! Nothing here touches the network or the clock. Edits return a
//! [`SuggestRequest`] telling the caller whether to (re)arm or cancel the
//! debounced suggestion fetch; results come back through
//! [`SearchInput::apply_suggestions`] tagged with the generation they were
//! issued for.

use crate::client::ApiError;
use crate::summary::Candidate;

/// What the caller should do with the debounced suggestion fetch after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestRequest {
    /// Replace any pending fetch with one for `query`.
    Schedule { generation: u64, query: String },
    /// Drop any pending fetch.
    Cancel,
}

#[derive(Debug, Clone)]
pub struct SearchInput {
    query: String,
    suggestions: Vec<Candidate>,
    dropdown_open: bool,
    highlighted: Option<usize>,
    selected: Option<Candidate>,
    /// Bumped on every edit and selection; results from older generations are stale.
    generation: u64,
    min_query_len: usize,
}

impl SearchInput {
    pub fn new(min_query_len: usize) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            dropdown_open: false,
            highlighted: None,
            selected: None,
            generation: 0,
            min_query_len,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    pub fn selected(&self) -> Option<&Candidate> {
        self.selected.as_ref()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The dropdown shows only with suggestions, no finalized selection, and not dismissed.
    pub fn dropdown_visible(&self) -> bool {
        self.dropdown_open && !self.suggestions.is_empty() && self.selected.is_none()
    }

    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && self.selected.is_some()
    }

    pub fn insert_char(&mut self, c: char) -> SuggestRequest {
        self.query.push(c);
        self.edited()
    }

    /// Returns `None` when there was nothing to delete.
    pub fn backspace(&mut self) -> Option<SuggestRequest> {
        self.query.pop()?;
        Some(self.edited())
    }

    /// Returns `None` when the query was already empty.
    pub fn clear(&mut self) -> Option<SuggestRequest> {
        if self.query.is_empty() {
            return None;
        }
        self.query.clear();
        Some(self.edited())
    }

    fn edited(&mut self) -> SuggestRequest {
        if self.selected.take().is_some() {
            tracing::debug!("selection invalidated by edit");
        }
        self.generation += 1;

        if self.query.chars().count() < self.min_query_len {
            self.clear_suggestions();
            return SuggestRequest::Cancel;
        }

        SuggestRequest::Schedule {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    /// Apply the outcome of a suggestion fetch.
    ///
    /// Returns `false` when the result was stale and ignored. Failures clear the
    /// list without surfacing anything to the user.
    pub fn apply_suggestions(
        &mut self,
        generation: u64,
        result: Result<Vec<Candidate>, ApiError>,
    ) -> bool {
        if generation != self.generation || self.selected.is_some() {
            tracing::trace!(generation, current = self.generation, "dropping stale suggestions");
            return false;
        }

        match result {
            Ok(candidates) => {
                self.dropdown_open = !candidates.is_empty();
                self.highlighted = if candidates.is_empty() { None } else { Some(0) };
                self.suggestions = candidates;
            }
            Err(e) => {
                tracing::debug!(error = %e, "suggestion fetch failed");
                self.clear_suggestions();
            }
        }
        true
    }

    pub fn highlight_next(&mut self) {
        if !self.dropdown_visible() {
            return;
        }
        let len = self.suggestions.len();
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    pub fn highlight_prev(&mut self) {
        if !self.dropdown_visible() {
            return;
        }
        let len = self.suggestions.len();
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    /// Finalize a suggestion: its name becomes the query text and it is the
    /// candidate that submit will send. Returns `false` for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(candidate) = self.suggestions.get(index).cloned() else {
            return false;
        };
        self.query = candidate.name.clone();
        self.selected = Some(candidate);
        self.generation += 1;
        self.clear_suggestions();
        true
    }

    pub fn select_highlighted(&mut self) -> bool {
        match self.highlighted {
            Some(i) if self.dropdown_visible() => self.select(i),
            _ => false,
        }
    }

    /// Closes the dropdown and hands back the selected candidate, if submission is allowed.
    pub fn submit(&mut self, loading: bool) -> Option<Candidate> {
        self.dropdown_open = false;
        if loading {
            return None;
        }
        self.selected.clone()
    }

    /// Close the dropdown, keeping text and selection.
    pub fn dismiss(&mut self) {
        self.dropdown_open = false;
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.dropdown_open = false;
        self.highlighted = None;
    }
}
