//! Codemod engine for declarative UI source migrations.
//!
//! Rewrites one file's text in two fixed stages:
//!
//! 1. [`BlockSubstitutions`] — an ordered list of [`SubstitutionRule`]s,
//!    each matched on the token stream (tolerant of whitespace and comment
//!    drift) with a first-only or all-occurrences policy.
//! 2. [`TypographyInjection`] — inserts a `fontFamily = ...,` argument
//!    before recognized `style = <theme>.typography.<category>` arguments of
//!    `Text(...)` invocations that do not already set one.
//!
//! A stage returns `Ok(None)` when it has nothing to do; absence of a match
//! is never an error. Everything the engine declines to rewrite is counted
//! in a [`MigrateReport`] so callers can detect partial migrations. Running
//! the same migration twice leaves the text unchanged on the second pass.

use std::path::Path;

use anyhow::Result;

pub mod edit;
pub mod lexer;
pub mod report;
pub mod ruleset;
pub mod subst;
pub mod typography;

pub use report::MigrateReport;
pub use ruleset::Ruleset;
pub use subst::{OccurrencePolicy, SubstitutionRule};
pub use typography::{FontFamilyGroup, TypographyConfig};

/// A single rewriting pass over one file's text.
pub trait Codemod {
    fn name(&self) -> &'static str;

    /// Returns `Ok(Some(updated))` when the pass changed the text and
    /// `Ok(None)` when it had nothing to do.
    fn apply(
        &self,
        path: &Path,
        content: &str,
        report: &mut MigrateReport,
    ) -> Result<Option<String>>;
}

/// The ordered block substitution pipeline.
pub struct BlockSubstitutions {
    rules: Vec<SubstitutionRule>,
}

impl BlockSubstitutions {
    pub fn new(rules: Vec<SubstitutionRule>) -> Self {
        Self { rules }
    }
}

impl Codemod for BlockSubstitutions {
    fn name(&self) -> &'static str {
        "block-substitutions"
    }

    fn apply(
        &self,
        _path: &Path,
        content: &str,
        report: &mut MigrateReport,
    ) -> Result<Option<String>> {
        Ok(subst::apply_rules(&self.rules, content, report))
    }
}

/// The typography attribute injection pass.
pub struct TypographyInjection {
    typography: TypographyConfig,
}

impl TypographyInjection {
    pub fn new(typography: TypographyConfig) -> Self {
        Self { typography }
    }
}

impl Codemod for TypographyInjection {
    fn name(&self) -> &'static str {
        "typography-injection"
    }

    fn apply(
        &self,
        _path: &Path,
        content: &str,
        report: &mut MigrateReport,
    ) -> Result<Option<String>> {
        Ok(typography::inject(content, &self.typography, report))
    }
}

/// Run `passes` in order, each pass seeing the previous pass's output.
///
/// Returns `Ok(None)` when no pass changed anything.
pub fn run_passes(
    passes: &[Box<dyn Codemod>],
    path: &Path,
    content: &str,
    report: &mut MigrateReport,
) -> Result<Option<String>> {
    let mut current: Option<String> = None;
    for pass in passes {
        let text = current.as_deref().unwrap_or(content);
        if let Some(updated) = pass.apply(path, text, report)? {
            log::debug!("pass '{}' rewrote {}", pass.name(), path.display());
            current = Some(updated);
        }
    }
    Ok(current)
}
