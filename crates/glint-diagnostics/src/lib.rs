//! `glint-diagnostics` - heuristic line diagnostics for the glint analysis engine.
//!
//! A fixed battery of pattern heuristics is evaluated independently against each line of a
//! code-language document; every applicable heuristic fires, in a fixed order, with a fixed
//! severity. These are presentation squiggles, not grammar-validated errors: false positives
//! and false negatives are accepted imprecision, but the exact firing conditions are part of
//! the contract.
//!
//! Several heuristics inspect the *trimmed* line while columns are reported against the
//! *raw* line; the trim offset is added back before a diagnostic is emitted.

use glint_core::text::{byte_to_char_col, trim_start_offset};
use glint_core::{Diagnostic, Severity};
use glint_lang::LanguageTag;
use regex::Regex;

const MSG_MISSING_SEMICOLON: &str = "missing semicolon";
const MSG_UNTERMINATED_STRING: &str = "unterminated string literal";
const MSG_CONSOLE_STATEMENT: &str = "unexpected console statement";
const MSG_MISMATCHED_PARENS: &str = "mismatched parentheses";
const MSG_EXPLICIT_ANY: &str = "unexpected explicit any";

const CONSOLE_CALL: &str = "console.log";

/// Prefixes that exempt a line from the missing-semicolon heuristic.
const SEMICOLON_EXEMPT_PREFIXES: &[&str] = &[
    "import", "export", "<", "return", "if", "else", "case", "default",
];

/// Trailing tokens that already terminate or continue a statement.
const SEMICOLON_EXEMPT_SUFFIXES: &[&str] = &["{", "}", ",", ";", "(", ")", ">", ":", "=>"];

/// The line scanner, with its patterns compiled once.
#[derive(Debug, Clone)]
pub struct LineLinter {
    /// A `const`/`let`/`var` declaration whose trimmed text ends in a non-terminator.
    declaration_tail: Regex,
    /// An explicit `any` type annotation.
    any_annotation: Regex,
}

impl LineLinter {
    /// Compile the scanner's patterns.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            declaration_tail: Regex::new(r"^(?:const|let|var)\s+\w+\s*=\s*.+[^;,{(>:\s]$")?,
            any_annotation: Regex::new(r":\s*any\b")?,
        })
    }

    /// Scan one raw line (without its terminator) and return every diagnostic that fires.
    ///
    /// Only code languages get the battery; all other languages yield an empty list. The
    /// returned diagnostics follow the fixed evaluation order of the heuristics, regardless
    /// of column position. `line_number` is 1-based.
    pub fn scan_line(
        &self,
        raw_line: &str,
        line_number: u32,
        language: LanguageTag,
    ) -> Vec<Diagnostic> {
        if !language.is_code() {
            return Vec::new();
        }

        let (trim_offset, start_trimmed) = trim_start_offset(raw_line);
        let trimmed = start_trimmed.trim_end();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let comments = language.comment_config();
        let is_comment = comments.is_comment_line(trimmed);
        let raw_len = raw_line.chars().count();

        let mut out = Vec::new();

        if let Some(d) =
            self.check_missing_semicolon(trimmed, trim_offset, raw_len, line_number, is_comment)
        {
            out.push(d);
        }
        if let Some(d) = check_unterminated_string(raw_line, trimmed, raw_len, line_number, is_comment)
        {
            out.push(d);
        }
        if let Some(d) = check_console_call(raw_line, trimmed, line_number) {
            out.push(d);
        }
        if let Some(d) = check_mismatched_parens(raw_line, raw_len, line_number, is_comment) {
            out.push(d);
        }
        if let Some(d) = self.check_explicit_any(raw_line, line_number, language) {
            out.push(d);
        }

        out
    }

    fn check_missing_semicolon(
        &self,
        trimmed: &str,
        trim_offset: usize,
        raw_len: usize,
        line_number: u32,
        is_comment: bool,
    ) -> Option<Diagnostic> {
        if is_comment || !self.declaration_tail.is_match(trimmed) {
            return None;
        }
        if SEMICOLON_EXEMPT_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            return None;
        }
        if SEMICOLON_EXEMPT_SUFFIXES.iter().any(|s| trimmed.ends_with(s)) {
            return None;
        }

        Some(Diagnostic::new(
            line_number,
            trim_offset,
            raw_len,
            MSG_MISSING_SEMICOLON,
            Severity::Warning,
        ))
    }

    fn check_explicit_any(
        &self,
        raw_line: &str,
        line_number: u32,
        language: LanguageTag,
    ) -> Option<Diagnostic> {
        // TypeScript flavors only: an `any` annotation cannot appear in JS/JSX.
        if !language.is_typescript() {
            return None;
        }
        let m = self.any_annotation.find(raw_line)?;

        Some(Diagnostic::new(
            line_number,
            byte_to_char_col(raw_line, m.start()),
            byte_to_char_col(raw_line, m.end()),
            MSG_EXPLICIT_ANY,
            Severity::Warning,
        ))
    }
}

fn check_unterminated_string(
    raw_line: &str,
    trimmed: &str,
    raw_len: usize,
    line_number: u32,
    is_comment: bool,
) -> Option<Diagnostic> {
    let quote_count = trimmed.matches('\'').count();
    if quote_count % 2 == 0 || is_comment {
        return None;
    }
    // `'s` is almost always a possessive or contraction, not an open quote.
    if trimmed.contains("'s") {
        return None;
    }

    let first_quote = raw_line.find('\'')?;
    Some(Diagnostic::new(
        line_number,
        byte_to_char_col(raw_line, first_quote),
        raw_len,
        MSG_UNTERMINATED_STRING,
        Severity::Error,
    ))
}

fn check_console_call(raw_line: &str, trimmed: &str, line_number: u32) -> Option<Diagnostic> {
    if !trimmed.contains(CONSOLE_CALL) {
        return None;
    }

    let at = raw_line.find(CONSOLE_CALL)?;
    let start = byte_to_char_col(raw_line, at);
    Some(Diagnostic::new(
        line_number,
        start,
        start + CONSOLE_CALL.len(),
        MSG_CONSOLE_STATEMENT,
        Severity::Warning,
    ))
}

fn check_mismatched_parens(
    raw_line: &str,
    raw_len: usize,
    line_number: u32,
    is_comment: bool,
) -> Option<Diagnostic> {
    let opens = raw_line.matches('(').count();
    let closes = raw_line.matches(')').count();
    // A side with zero parens usually means a multi-line expression; only differing
    // non-zero counts fire.
    if opens == 0 || closes == 0 || opens == closes || is_comment {
        return None;
    }

    Some(Diagnostic::new(
        line_number,
        0,
        raw_len,
        MSG_MISMATCHED_PARENS,
        Severity::Error,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linter() -> LineLinter {
        LineLinter::new().unwrap()
    }

    fn scan(line: &str, language: LanguageTag) -> Vec<Diagnostic> {
        linter().scan_line(line, 1, language)
    }

    #[test]
    fn test_missing_semicolon_fires_on_declaration() {
        let ds = scan("const x = 5", LanguageTag::Ts);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds[0].message, MSG_MISSING_SEMICOLON);
        assert_eq!(ds[0].severity, Severity::Warning);
        assert_eq!((ds[0].start_col, ds[0].end_col), (0, 11));
        assert_eq!(ds[0].line, 1);
    }

    #[test]
    fn test_missing_semicolon_reanchors_leading_whitespace() {
        let ds = scan("    let total = a + b", LanguageTag::Ts);
        assert_eq!(ds.len(), 1);
        assert_eq!((ds[0].start_col, ds[0].end_col), (4, 21));

        let ds = scan("\tvar n = 42", LanguageTag::Ts);
        assert_eq!((ds[0].start_col, ds[0].end_col), (1, 11));
    }

    #[test]
    fn test_missing_semicolon_silent_when_terminated_or_continuing() {
        for line in [
            "const x = 5;",
            "const x = {",
            "const f = () =>",
            "const xs = [1, 2,",
            "const y = (",
            "let done = true;",
        ] {
            assert!(
                scan(line, LanguageTag::Ts).is_empty(),
                "unexpected diagnostic for {line:?}"
            );
        }
    }

    #[test]
    fn test_missing_semicolon_silent_on_comments_and_exempt_prefixes() {
        assert!(scan("// const x = 5", LanguageTag::Ts).is_empty());
        assert!(scan("/* const x = 5 */", LanguageTag::Ts).is_empty());
        // The declaration shape can't start with these anyway, but the guard is explicit.
        assert!(scan("return x", LanguageTag::Ts).is_empty());
        assert!(scan("export default App", LanguageTag::Ts).is_empty());
    }

    #[test]
    fn test_missing_semicolon_skips_typed_declarations() {
        // A type annotation between the identifier and `=` falls outside the declaration
        // shape, so only the `any` heuristic fires here.
        let ds = scan("const n: any = 5", LanguageTag::Ts);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds[0].message, MSG_EXPLICIT_ANY);
    }

    #[test]
    fn test_unterminated_string() {
        let ds = scan("const s = 'hello", LanguageTag::Ts);
        assert_eq!(ds.len(), 2);
        // Fixed evaluation order: semicolon heuristic first, then the string error.
        assert_eq!(ds[0].message, MSG_MISSING_SEMICOLON);
        assert_eq!(ds[1].message, MSG_UNTERMINATED_STRING);
        assert_eq!(ds[1].severity, Severity::Error);
        assert_eq!((ds[1].start_col, ds[1].end_col), (10, 16));
    }

    #[test]
    fn test_unterminated_string_reanchors_leading_whitespace() {
        let ds = scan("  const s = 'hello", LanguageTag::Ts);
        let string_error = ds
            .iter()
            .find(|d| d.message == MSG_UNTERMINATED_STRING)
            .unwrap();
        assert_eq!((string_error.start_col, string_error.end_col), (12, 18));
    }

    #[test]
    fn test_unterminated_string_possessive_guard() {
        assert!(
            scan("doc.title = it's", LanguageTag::Ts)
                .iter()
                .all(|d| d.message != MSG_UNTERMINATED_STRING)
        );
    }

    #[test]
    fn test_unterminated_string_even_quotes_silent() {
        assert!(scan("const s = 'hello';", LanguageTag::Ts).is_empty());
    }

    #[test]
    fn test_console_call_offsets() {
        let ds = scan("  console.log(x);", LanguageTag::Ts);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds[0].message, MSG_CONSOLE_STATEMENT);
        assert_eq!(ds[0].severity, Severity::Warning);
        assert_eq!((ds[0].start_col, ds[0].end_col), (2, 13));
        assert_eq!(ds[0].len(), CONSOLE_CALL.len());
    }

    #[test]
    fn test_console_call_deep_indent() {
        let ds = scan("        console.log(count);", LanguageTag::Tsx);
        assert_eq!((ds[0].start_col, ds[0].end_col), (8, 19));
    }

    #[test]
    fn test_mismatched_parens_requires_both_sides() {
        // One side at zero: explicitly not flagged.
        assert!(scan("foo(a, b", LanguageTag::Ts).is_empty());
        assert!(scan("), bar", LanguageTag::Ts).is_empty());

        let ds = scan("foo(a, b))", LanguageTag::Ts);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds[0].message, MSG_MISMATCHED_PARENS);
        assert_eq!(ds[0].severity, Severity::Error);
        assert_eq!((ds[0].start_col, ds[0].end_col), (0, 10));
    }

    #[test]
    fn test_mismatched_parens_balanced_silent() {
        assert!(scan("foo(bar(x), y)", LanguageTag::Ts).is_empty());
    }

    #[test]
    fn test_mismatched_parens_comment_guard() {
        assert!(scan("// foo(a))", LanguageTag::Ts).is_empty());
    }

    #[test]
    fn test_explicit_any_typescript_only() {
        let ds = scan("function f(x: any) { }", LanguageTag::Ts);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds[0].message, MSG_EXPLICIT_ANY);
        // The match covers `: any` starting at the colon.
        assert_eq!((ds[0].start_col, ds[0].end_col), (12, 17));

        assert_eq!(scan("function f(x: any) { }", LanguageTag::Tsx).len(), 1);

        // The other side of the boundary: JS flavors never fire it.
        assert!(scan("function f(x: any) { }", LanguageTag::Js).is_empty());
        assert!(scan("function f(x: any) { }", LanguageTag::Jsx).is_empty());
    }

    #[test]
    fn test_explicit_any_word_boundary() {
        assert!(scan("const x: anything = load()", LanguageTag::Ts).is_empty());
    }

    #[test]
    fn test_fixed_order_with_multiple_hits() {
        let ds = scan("  const n: any = console.log(5)", LanguageTag::Tsx);
        let messages: Vec<&str> = ds.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec![MSG_CONSOLE_STATEMENT, MSG_EXPLICIT_ANY]);
    }

    #[test]
    fn test_non_code_languages_yield_nothing() {
        for language in [LanguageTag::Json, LanguageTag::Css, LanguageTag::Md, LanguageTag::Text] {
            assert!(scan("const x = 5", language).is_empty());
            assert!(scan("console.log('x')", language).is_empty());
        }
    }

    #[test]
    fn test_blank_and_whitespace_lines() {
        assert!(scan("", LanguageTag::Ts).is_empty());
        assert!(scan("     ", LanguageTag::Ts).is_empty());
        assert!(scan("\t\t", LanguageTag::Ts).is_empty());
    }

    #[test]
    fn test_multibyte_columns() {
        let ds = scan("  const s = '你好", LanguageTag::Ts);
        let string_error = ds
            .iter()
            .find(|d| d.message == MSG_UNTERMINATED_STRING)
            .unwrap();
        // Columns count characters, not bytes.
        assert_eq!((string_error.start_col, string_error.end_col), (12, 15));
    }

    #[test]
    fn test_long_line_totality() {
        let line = format!("const x = {}", "y + ".repeat(3_000));
        let ds = scan(&line, LanguageTag::Ts);
        // Never panics. The trimmed line ends in `+`, which is not a terminator, so the
        // declaration heuristic fires and spans the whole raw line.
        assert_eq!(ds.len(), 1);
        assert_eq!(ds[0].message, MSG_MISSING_SEMICOLON);
        assert_eq!(ds[0].end_col, line.chars().count());
    }
}
