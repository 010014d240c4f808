//! Byte-span patches over source text.

use crate::lexer::Span;

/// A single patch to apply to source text.
#[derive(Debug, Clone)]
pub struct Patch {
    /// Byte span to replace
    pub span: Span,
    /// New text to insert
    pub new_text: String,
}

/// A collection of patches applied to source text in one pass.
///
/// Patches are sorted by span start and written out front to back, so the
/// spans must reference the original (pre-patch) text and must not overlap.
/// A patch that overlaps an earlier one or falls outside the text is dropped.
#[derive(Debug, Default)]
pub struct PatchSet {
    patches: Vec<Patch>,
}

impl PatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `span` with `new_text`.
    pub fn replace(&mut self, span: Span, new_text: impl Into<String>) {
        self.patches.push(Patch {
            span,
            new_text: new_text.into(),
        });
    }

    /// Insert `new_text` at byte offset `at` without replacing anything.
    pub fn insert(&mut self, at: usize, new_text: impl Into<String>) {
        self.replace(Span::new(at, at), new_text);
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Apply all patches to `source`, returning the patched text.
    pub fn apply(mut self, source: &str) -> String {
        self.patches
            .sort_by_key(|patch| (patch.span.start, patch.span.end));

        let mut out = String::with_capacity(source.len());
        let mut cursor = 0;
        for patch in self.patches {
            if patch.span.start < cursor || patch.span.end > source.len() {
                continue;
            }
            out.push_str(&source[cursor..patch.span.start]);
            out.push_str(&patch.new_text);
            cursor = patch.span.end;
        }
        out.push_str(&source[cursor..]);
        out
    }
}
