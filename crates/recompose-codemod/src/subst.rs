//! Ordered block substitution rules.

use serde::Deserialize;

use crate::edit::PatchSet;
use crate::lexer::{Span, lex};
use crate::report::MigrateReport;

/// Whether a rule rewrites only the leftmost match or every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccurrencePolicy {
    /// Replace only the first (leftmost) occurrence.
    First,
    /// Replace every occurrence, left to right, non-overlapping.
    #[default]
    All,
}

/// One rewrite: a block of source replaced by another.
///
/// Patterns are matched on the token stream, so the source may differ from
/// the pattern in whitespace, line breaks, and comments and still match.
/// The replacement is inserted verbatim; the replaced span runs from the
/// first to the last matched token, leaving the line's leading indentation
/// in place.
///
/// A `first`-bounded rule targets the leftmost textual match, nothing
/// smarter. When a file contains byte-identical blocks, rule order decides
/// which one a `first` rule lands on.
#[derive(Debug, Clone, Deserialize)]
pub struct SubstitutionRule {
    /// Identifies the rule in reports and logs
    pub name: String,
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub occurrence: OccurrencePolicy,
}

impl SubstitutionRule {
    /// Find the byte spans this rule would rewrite in `content`.
    pub fn matches(&self, content: &str) -> Vec<Span> {
        let pattern_tokens = lex(&self.pattern);
        let needle: Vec<&str> = pattern_tokens.iter().map(|t| t.text).collect();
        if needle.is_empty() {
            return Vec::new();
        }

        let hay = lex(content);
        let mut spans = Vec::new();
        let mut i = 0;
        while i + needle.len() <= hay.len() {
            let window = &hay[i..i + needle.len()];
            if window.iter().map(|t| t.text).eq(needle.iter().copied()) {
                spans.push(Span::new(
                    window[0].span.start,
                    window[needle.len() - 1].span.end,
                ));
                if self.occurrence == OccurrencePolicy::First {
                    break;
                }
                i += needle.len();
            } else {
                i += 1;
            }
        }
        spans
    }

    /// Apply the rule to `content`.
    ///
    /// Returns the rewritten text and the number of occurrences replaced, or
    /// `None` when the pattern is absent (a skip, not an error).
    pub fn apply(&self, content: &str) -> Option<(String, usize)> {
        let spans = self.matches(content);
        if spans.is_empty() {
            return None;
        }
        let mut patches = PatchSet::new();
        for span in &spans {
            patches.replace(*span, self.replacement.clone());
        }
        Some((patches.apply(content), spans.len()))
    }
}

/// Apply `rules` in order, each over the result of the previous one, so
/// later rules see already-patched text.
///
/// Returns `None` when no rule matched. Every rule records an outcome in
/// `report`, applied or skipped.
pub fn apply_rules(
    rules: &[SubstitutionRule],
    content: &str,
    report: &mut MigrateReport,
) -> Option<String> {
    let mut current: Option<String> = None;
    for rule in rules {
        let text = current.as_deref().unwrap_or(content);
        match rule.apply(text) {
            Some((updated, count)) => {
                log::debug!("rule '{}' replaced {count} occurrence(s)", rule.name);
                report.record_rule(&rule.name, count);
                current = Some(updated);
            }
            None => {
                log::debug!("rule '{}' matched nothing, skipping", rule.name);
                report.record_rule(&rule.name, 0);
            }
        }
    }
    current
}
