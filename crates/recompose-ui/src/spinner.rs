use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::style::icons;

/// Builder for [`Spinner`]
pub struct SpinnerBuilder {
    message: String,
}

impl SpinnerBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Start the spinner
    pub fn start(self) -> Spinner {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(self.message);
        bar.enable_steady_tick(Duration::from_millis(80));
        Spinner { bar }
    }
}

/// An animated spinner tied to one unit of work.
///
/// Draws to stderr; hidden automatically when stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn builder(message: impl Into<String>) -> SpinnerBuilder {
        SpinnerBuilder::new(message)
    }

    /// Update the message shown next to the spinner
    pub fn set_message(&self, message: impl Into<String>) {
        self.bar.set_message(message.into());
    }

    /// Stop the spinner and clear its line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }

    /// Stop the spinner and print a success line
    pub fn success(self, message: impl Into<String>) {
        self.bar.finish_and_clear();
        eprintln!("{} {}", icons::success(), message.into());
    }

    /// Stop the spinner and print an error line
    pub fn error(self, message: impl Into<String>) {
        self.bar.finish_and_clear();
        eprintln!("{} {}", icons::error(), message.into());
    }
}
