//! Whole-file analysis.
//!
//! [`Analyzer`] drives the per-line tokenizer and scanner over a [`LineIndex`] and returns
//! an owned [`FileAnalysis`]: per-line token span tables, the flat diagnostics list in
//! detection order, and the by-line [`DiagnosticIndex`]. The analysis owns everything it
//! exposes, so it can be cached and outlive the content string it was computed from.

use crate::index::DiagnosticIndex;
use glint_core::{
    Diagnostic, LineEnding, LineIndex, Token, TokenClass, TokenSpan, spans_from_tokens,
    tokens_from_spans,
};
use glint_diagnostics::LineLinter;
use glint_highlight::Tokenizer;
use glint_lang::LanguageTag;
use thiserror::Error;

/// Errors produced when constructing an [`Analyzer`].
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("engine pattern failed to compile: {0}")]
    /// A fixed engine pattern failed to compile.
    Pattern(#[from] regex::Error),
}

/// The composed engine: one tokenizer, one scanner, compiled once and reused across files.
#[derive(Debug, Clone)]
pub struct Analyzer {
    tokenizer: Tokenizer,
    linter: LineLinter,
}

impl Analyzer {
    /// Compile the engine's fixed pattern tables.
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
            linter: LineLinter::new()?,
        })
    }

    /// Analyze a whole file.
    ///
    /// `language = None` represents an unrecognized tag: every line becomes a single
    /// `Plain` token and no diagnostics are emitted. The call is total and deterministic;
    /// re-running on unchanged input yields an equal analysis.
    pub fn analyze(&self, content: &str, language: Option<LanguageTag>) -> FileAnalysis {
        let line_ending = LineEnding::detect_in_text(content);
        let index = LineIndex::from_text(content);

        let mut lines = Vec::with_capacity(index.line_count());
        let mut diagnostics = Vec::new();

        for i in 0..index.line_count() {
            let Some(text) = index.get_line_text(i) else {
                continue;
            };
            let number = (i + 1) as u32;

            let spans = match language {
                Some(tag) => spans_from_tokens(&self.tokenizer.tokenize(&text, tag)),
                None => plain_line_spans(&text),
            };
            if let Some(tag) = language {
                diagnostics.extend(self.linter.scan_line(&text, number, tag));
            }

            lines.push(LineAnalysis {
                number,
                text,
                spans,
            });
        }

        let diagnostic_index = DiagnosticIndex::from_diagnostics(diagnostics.iter().cloned());

        FileAnalysis {
            language,
            line_ending,
            index,
            lines,
            diagnostics,
            diagnostic_index,
        }
    }

    /// Analyze with a raw tag string (e.g. `"tsx"`), degrading unknown tags.
    pub fn analyze_with_tag(&self, content: &str, tag: &str) -> FileAnalysis {
        self.analyze(content, LanguageTag::from_tag(tag))
    }

    /// The underlying tokenizer (for callers that highlight single lines).
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The underlying line scanner (for callers that scan single lines).
    pub fn linter(&self) -> &LineLinter {
        &self.linter
    }
}

/// An unrecognized-language line: the whole line as one `Plain` span, or no spans at all
/// for the empty line.
fn plain_line_spans(text: &str) -> Vec<TokenSpan> {
    let len = text.chars().count();
    if len == 0 {
        return Vec::new();
    }
    vec![TokenSpan::new(0, len, TokenClass::Plain)]
}

/// One analyzed line: its text, 1-based number, and token span table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAnalysis {
    number: u32,
    text: String,
    spans: Vec<TokenSpan>,
}

impl LineAnalysis {
    /// 1-based line number, matching editor gutters and [`Diagnostic::line`].
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The line's text, without its terminator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The line's token span table (character columns, gap-free coverage).
    pub fn spans(&self) -> &[TokenSpan] {
        &self.spans
    }

    /// Materialize borrowed tokens from the span table.
    pub fn tokens(&self) -> Vec<Token<'_>> {
        tokens_from_spans(&self.text, &self.spans)
    }
}

/// The owned result of analyzing one file.
#[derive(Debug, Clone)]
pub struct FileAnalysis {
    language: Option<LanguageTag>,
    line_ending: LineEnding,
    index: LineIndex,
    lines: Vec<LineAnalysis>,
    diagnostics: Vec<Diagnostic>,
    diagnostic_index: DiagnosticIndex,
}

impl FileAnalysis {
    /// The language the analysis ran under (`None` = unrecognized tag).
    pub fn language(&self) -> Option<LanguageTag> {
        self.language
    }

    /// The dominant line ending detected in the input.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Total line count (rope semantics: an empty file has one empty line).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All analyzed lines, in order.
    pub fn lines(&self) -> impl Iterator<Item = &LineAnalysis> {
        self.lines.iter()
    }

    /// One analyzed line by 1-based number.
    pub fn line(&self, number: u32) -> Option<&LineAnalysis> {
        if number == 0 {
            return None;
        }
        self.lines.get(number as usize - 1)
    }

    /// A line's text by 1-based number.
    pub fn line_text(&self, number: u32) -> Option<&str> {
        self.line(number).map(LineAnalysis::text)
    }

    /// A line's token span table by 1-based number.
    pub fn line_spans(&self, number: u32) -> Option<&[TokenSpan]> {
        self.line(number).map(LineAnalysis::spans)
    }

    /// A line's materialized tokens by 1-based number.
    pub fn line_tokens(&self, number: u32) -> Option<Vec<Token<'_>>> {
        self.line(number).map(LineAnalysis::tokens)
    }

    /// Every diagnostic, in detection order (line order, then heuristic order).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics on a 1-based line, in detection order.
    pub fn diagnostics_on_line(&self, number: u32) -> &[Diagnostic] {
        self.diagnostic_index.get(number)
    }

    /// The by-line diagnostic index.
    pub fn diagnostic_index(&self) -> &DiagnosticIndex {
        &self.diagnostic_index
    }

    /// A diagnostic's half-open document character-offset range, for interval-style
    /// renderers that anchor underlines into the whole document rather than per line.
    pub fn diagnostic_doc_range(&self, diagnostic: &Diagnostic) -> (usize, usize) {
        let line = diagnostic.line.saturating_sub(1) as usize;
        (
            self.index.position_to_char_offset(line, diagnostic.start_col),
            self.index.position_to_char_offset(line, diagnostic.end_col),
        )
    }
}
