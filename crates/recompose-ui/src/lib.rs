//! # recompose-ui
//!
//! A consistent UI library for recompose tools, providing spinners, styled
//! text, and status icons for terminal output.
//!
//! ## Example
//!
//! ```rust,no_run
//! use recompose_ui::{Spinner, Style};
//!
//! // Create and use a spinner
//! let spinner = Spinner::builder("Processing...").start();
//! // ... do work ...
//! spinner.success("Done!");
//! ```

mod spinner;
mod style;

pub use spinner::{Spinner, SpinnerBuilder};
pub use style::{Style, StyledText, icons};

// Re-export commonly used items from dependencies
pub use colored::Colorize;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Colorize,
        spinner::{Spinner, SpinnerBuilder},
        style::{Style, StyledText},
    };
}
