//! Terminal spinner driven by [`Status`] events.

use indicatif::{ProgressBar, ProgressStyle};

use super::observer::{Status, Subscriber};

const FRAMES: &[&str] = &["⠏", "⠛", "⠹", "⢸", "⣰", "⣤", "⣆", "⡇", "✓"];

/// Spinner labelled with the thing doing the work (e.g. a provider name).
///
/// Renders to stderr and hides itself when stderr is not a terminal.
#[derive(Clone)]
pub struct ProgressIndicator {
    bar: ProgressBar,
    label: String,
}

impl ProgressIndicator {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_bar(ProgressBar::new_spinner(), label)
    }

    /// An indicator that never draws.
    pub fn hidden(label: impl Into<String>) -> Self {
        Self::with_bar(ProgressBar::hidden(), label)
    }

    fn with_bar(bar: ProgressBar, label: impl Into<String>) -> Self {
        let style = ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(FRAMES);
        bar.set_style(style);

        Self {
            bar,
            label: label.into(),
        }
    }

    pub fn handle(&self, status: Status) {
        match status {
            Status::Started => {
                self.bar.set_message(format!("Processing with {}...", self.label));
                self.bar.tick();
            }
            Status::Running => self.bar.tick(),
            Status::Failed => self.bar.abandon_with_message("Failed"),
            Status::Finished => self.bar.finish_with_message("Finished"),
        }
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    /// Wrap this indicator as an observer subscriber.
    pub fn into_subscriber(self) -> Subscriber<Status> {
        Box::new(move |status: &Status| self.handle(*status))
    }
}
