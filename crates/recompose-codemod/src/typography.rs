//! Typography attribute injection for `Text(...)` leaf invocations.
//!
//! Finds every `Text(...)` invocation whose argument list carries a
//! `style = <theme>.typography.<category>` argument, classifies the category
//! into a font-family group, and inserts a matching `fontFamily = ...,`
//! argument immediately before the `style =` token. Invocations that already
//! set `fontFamily` are left byte-identical, so the pass is idempotent.

use serde::Deserialize;

use crate::edit::PatchSet;
use crate::lexer::{Token, lex};
use crate::report::MigrateReport;

/// Font-family group a typography style category resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamilyGroup {
    Label,
    Body,
    Decorative,
}

/// Recognized style categories and the group each belongs to.
const CATEGORIES: &[(&str, FontFamilyGroup)] = &[
    ("label", FontFamilyGroup::Label),
    ("body", FontFamilyGroup::Body),
    ("title", FontFamilyGroup::Decorative),
    ("headline", FontFamilyGroup::Decorative),
];

impl FontFamilyGroup {
    /// Classify a typography member (`labelMedium`, `bodySmall`, ...) by its
    /// leading category word. Unrecognized categories are never guessed.
    pub fn classify(category: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|(prefix, _)| category.starts_with(prefix))
            .map(|(_, group)| *group)
    }
}

/// Font family emitted for each group.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypographyConfig {
    pub label: String,
    pub body: String,
    pub decorative: String,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            label: "SpaceGroteskFamily".to_string(),
            body: "PoppinsFontFamily".to_string(),
            decorative: "CinzelDecorativeFamily".to_string(),
        }
    }
}

impl TypographyConfig {
    pub fn family(&self, group: FontFamilyGroup) -> &str {
        match group {
            FontFamilyGroup::Label => &self.label,
            FontFamilyGroup::Body => &self.body,
            FontFamilyGroup::Decorative => &self.decorative,
        }
    }
}

/// Insert `fontFamily = <family>,` into every `Text(...)` invocation that
/// declares a recognized style category and no font family of its own.
///
/// Single forward pass: insertion points are collected against the original
/// text and applied together at the end, so every invocation is visited
/// exactly once and already-processed spans are never revisited. An argument
/// list that never closes makes the span ambiguous; it is skipped and
/// counted in `report.ambiguous_spans` rather than guessed at.
///
/// Returns `None` when nothing needed injecting.
pub fn inject(
    content: &str,
    typography: &TypographyConfig,
    report: &mut MigrateReport,
) -> Option<String> {
    let tokens = lex(content);
    let mut patches = PatchSet::new();

    let mut i = 0;
    while i + 1 < tokens.len() {
        if !(tokens[i].text == "Text" && tokens[i + 1].text == "(") {
            i += 1;
            continue;
        }
        let open = i + 1;
        let Some(close) = matching_paren(&tokens, open) else {
            report.ambiguous_spans += 1;
            log::debug!("unterminated Text( argument list at byte {}", tokens[i].span.start);
            break;
        };
        if let Some((at, text)) = plan_injection(content, &tokens[open + 1..close], typography) {
            patches.insert(at, text);
            report.injections += 1;
        }
        i = close + 1;
    }

    if patches.is_empty() {
        None
    } else {
        Some(patches.apply(content))
    }
}

/// Index of the `)` closing the `(` at `open`, or `None` when the list never
/// closes. String literals are single tokens, so their parentheses do not
/// count toward depth.
fn matching_paren(tokens: &[Token<'_>], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        match token.text {
            "(" => depth += 1,
            ")" => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Work out the insertion for one argument list, if it needs one.
fn plan_injection(
    content: &str,
    args: &[Token<'_>],
    typography: &TypographyConfig,
) -> Option<(usize, String)> {
    if args.iter().any(|token| token.text == "fontFamily") {
        return None;
    }

    let style_at = find_style_argument(args)?;
    let category = args[style_at + 6].text;
    let group = FontFamilyGroup::classify(category)?;
    let family = typography.family(group);

    let at = args[style_at].span.start;
    let line_start = content[..at].rfind('\n').map_or(0, |pos| pos + 1);
    let prefix = &content[line_start..at];
    let text = if prefix.chars().all(char::is_whitespace) {
        // `style =` opens its line: give the new argument its own line with
        // the same indentation
        format!("fontFamily = {family},\n{prefix}")
    } else {
        format!("fontFamily = {family}, ")
    };
    Some((at, text))
}

/// Index of the `style` token of a `style = <theme>.typography.<category>`
/// argument, if the list has one.
fn find_style_argument(args: &[Token<'_>]) -> Option<usize> {
    let last = args.len().checked_sub(7)?;
    (0..=last).find(|&j| {
        args[j].text == "style"
            && args[j + 1].text == "="
            && args[j + 2].is_word()
            && args[j + 3].text == "."
            && args[j + 4].text == "typography"
            && args[j + 5].text == "."
            && args[j + 6].is_word()
    })
}
