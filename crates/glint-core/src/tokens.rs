//! Classified token spans.
//!
//! Tokens exist purely for presentation (syntax coloring). They come in two forms:
//!
//! - [`Token`]: a borrowed slice of the source line plus a class. Ephemeral; produced fresh
//!   per tokenizer call and owned by the caller.
//! - [`TokenSpan`]: the owned, storable form - a half-open character-offset interval within
//!   its line plus a class. Whole-file analyses store these so they can outlive the borrow
//!   of the original content.
//!
//! A token sequence for a line is ordered left to right, non-overlapping, and gap-free:
//! concatenating the `text` of every token reproduces the line exactly.

/// Presentation class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Line or block comment.
    Comment,
    /// Reserved keyword.
    Keyword,
    /// Well-known framework identifier, or a JSON object key.
    TypeName,
    /// Literal constant (`true`, `null`, `undefined`, ...).
    Constant,
    /// String, char, or template literal.
    StringLit,
    /// Numeric literal.
    Number,
    /// Angle-bracket tag whose name starts uppercase.
    JsxComponentTag,
    /// Angle-bracket tag whose name starts lowercase.
    HtmlTag,
    /// Identifier immediately followed by `(`.
    FunctionName,
    /// Single punctuation/operator character.
    Punctuation,
    /// Anything not claimed by a higher-priority pattern.
    Plain,
}

/// A classified, borrowed span of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The exact text of the span.
    pub text: &'a str,
    /// Presentation class.
    pub class: TokenClass,
}

impl<'a> Token<'a> {
    /// Create a new token.
    pub fn new(text: &'a str, class: TokenClass) -> Self {
        Self { text, class }
    }

    /// Length of the token in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A classified half-open character-offset interval (`start..end`) within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    /// Start column (inclusive), in characters from the start of the line.
    pub start: usize,
    /// End column (exclusive).
    pub end: usize,
    /// Presentation class.
    pub class: TokenClass,
}

impl TokenSpan {
    /// Create a new span with `[start, end)` columns and a class.
    pub fn new(start: usize, end: usize, class: TokenClass) -> Self {
        Self { start, end, class }
    }

    /// Length of the span in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if the span contains a specific column.
    pub fn contains(&self, col: usize) -> bool {
        self.start <= col && col < self.end
    }

    /// Check if two spans overlap.
    pub fn overlaps(&self, other: &TokenSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Convert a gap-free token sequence into its span table.
///
/// Columns are assigned by accumulating character lengths left to right, so the result is
/// faithful exactly when the input covers its line without gaps (which the tokenizer
/// guarantees).
pub fn spans_from_tokens(tokens: &[Token<'_>]) -> Vec<TokenSpan> {
    let mut spans = Vec::with_capacity(tokens.len());
    let mut col = 0;
    for token in tokens {
        let len = token.char_len();
        spans.push(TokenSpan::new(col, col + len, token.class));
        col += len;
    }
    spans
}

/// Materialize borrowed tokens from a line and its span table.
///
/// The spans must be the gap-free, ordered coverage produced by [`spans_from_tokens`] (or by
/// the tokenizer); out-of-range spans are clamped to the end of the line.
pub fn tokens_from_spans<'a>(line: &'a str, spans: &[TokenSpan]) -> Vec<Token<'a>> {
    let mut tokens = Vec::with_capacity(spans.len());
    let mut byte = 0;
    let mut chars = line.char_indices();
    let mut col = 0;

    let mut advance_to = |target_col: usize, byte: &mut usize| {
        while col < target_col {
            match chars.next() {
                Some((idx, ch)) => {
                    *byte = idx + ch.len_utf8();
                    col += 1;
                }
                None => break,
            }
        }
    };

    for span in spans {
        let start_byte = byte;
        advance_to(span.end, &mut byte);
        tokens.push(Token::new(&line[start_byte..byte], span.class));
    }
    tokens
}
