//! Spinner shown while a page is being fetched

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner on stderr; hidden entirely when disabled
pub struct FetchSpinner {
    bar: ProgressBar,
}

impl FetchSpinner {
    pub fn new(enabled: bool) -> Self {
        let bar = if enabled {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(Self::spinner_style());
        Self { bar }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning with `message`
    pub fn start(&self, message: impl Into<String>) {
        self.bar.set_prefix("advocates");
        self.bar.set_message(message.into());
        self.bar.enable_steady_tick(Duration::from_millis(80));
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

impl Drop for FetchSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
