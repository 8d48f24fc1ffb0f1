//! TUI application state
//!
//! Single source of truth for everything the browser renders. The search
//! box text is edited immediately; it is applied to the session only once
//! the debounce deadline passes.

use advocates_application::BrowseSession;
use std::time::Duration;
use tokio::time::Instant;

/// Central TUI state — owned by the BrowseApp select! loop
#[derive(Debug)]
pub struct TuiState {
    // -- Directory --
    pub session: BrowseSession,

    // -- Search box --
    pub search_input: String,
    pub search_deadline: Option<Instant>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            session: BrowseSession::new(),
            search_input: String::new(),
            search_deadline: None,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Search editing --

    pub fn insert_char(&mut self, c: char, debounce: Duration) {
        self.search_input.push(c);
        self.schedule_search(debounce);
    }

    pub fn delete_char(&mut self, debounce: Duration) {
        if self.search_input.pop().is_some() {
            self.schedule_search(debounce);
        }
    }

    /// Restart the debounce window
    fn schedule_search(&mut self, debounce: Duration) {
        self.search_deadline = Some(Instant::now() + debounce);
    }

    /// Whether typed text is waiting to be applied
    pub fn search_pending(&self) -> bool {
        self.search_deadline.is_some()
    }

    /// Apply the search box text to the session
    pub fn apply_search(&mut self) {
        self.search_deadline = None;
        self.session.set_search(self.search_input.as_str());
    }

    /// Clear the search box and show the whole page
    pub fn reset_search(&mut self) {
        self.search_input.clear();
        self.search_deadline = None;
        self.session.reset_search();
    }
}
