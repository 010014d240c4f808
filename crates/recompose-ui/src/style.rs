use colored::{ColoredString, Colorize};

/// Terminal text styles used across recompose tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Green,
    Yellow,
    Red,
    Blue,
    Cyan,
}

/// Extension trait for applying a [`Style`] to anything string-like
pub trait StyledText {
    fn with_style(&self, style: Style) -> ColoredString;
}

impl<T: AsRef<str>> StyledText for T {
    fn with_style(&self, style: Style) -> ColoredString {
        let text = self.as_ref();
        match style {
            Style::Green => text.green(),
            Style::Yellow => text.yellow(),
            Style::Red => text.red(),
            Style::Blue => text.blue(),
            Style::Cyan => text.cyan(),
        }
    }
}

/// Status icons shared by CLI output
pub mod icons {
    use colored::{ColoredString, Colorize};

    pub fn success() -> ColoredString {
        "✓".green()
    }

    pub fn warning() -> ColoredString {
        "⚠".yellow()
    }

    pub fn error() -> ColoredString {
        "✗".red()
    }
}
