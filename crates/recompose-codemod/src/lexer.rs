//! A span-tracking lexer for declarative UI source text.
//!
//! Produces a flat token stream (words, string literals, punctuation) with
//! byte spans into the original source. Whitespace and comments are trivia
//! and never become tokens, which is what makes substitution matching
//! tolerant of formatting drift.

/// Byte span in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A single lexed token: its text as written and where it sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Whether this token is a word (identifier, keyword, or number).
    pub fn is_word(&self) -> bool {
        self.text
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
    }
}

/// Lex `input` into a token stream.
///
/// Three token shapes:
/// - words: runs of `[A-Za-z0-9_]` (identifiers, keywords, numbers)
/// - string literals: `"..."` with backslash escapes, quotes included in the
///   token text
/// - punctuation: any other non-whitespace character, one token per char
///
/// `//` line comments and `/* */` block comments are skipped along with
/// whitespace. An unterminated string or block comment runs to end of input;
/// the lexer itself never fails.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Comments are trivia
        if b == b'/' && i + 1 < bytes.len() {
            if bytes[i + 1] == b'/' {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
                continue;
            }
            if bytes[i + 1] == b'*' {
                let mut j = i + 2;
                while j + 1 < bytes.len() && !(bytes[j] == b'*' && bytes[j + 1] == b'/') {
                    j += 1;
                }
                i = if j + 1 < bytes.len() { j + 2 } else { bytes.len() };
                continue;
            }
        }

        if b == b'"' {
            let start = i;
            i += 1;
            while i < bytes.len() {
                match bytes[i] {
                    b'\\' => i = (i + 2).min(bytes.len()),
                    b'"' => {
                        i += 1;
                        break;
                    }
                    _ => i += 1,
                }
            }
            tokens.push(Token {
                text: &input[start..i],
                span: Span::new(start, i),
            });
            continue;
        }

        if b.is_ascii_alphanumeric() || b == b'_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            tokens.push(Token {
                text: &input[start..i],
                span: Span::new(start, i),
            });
            continue;
        }

        // Single punctuation character (multi-byte chars stay one token)
        let len = input[i..].chars().next().map_or(1, |c| c.len_utf8());
        tokens.push(Token {
            text: &input[i..i + len],
            span: Span::new(i, i + len),
        });
        i += len;
    }

    tokens
}
