//! Token rule tables.
//!
//! A [`TokenRule`] pairs a compiled regex with the [`TokenClass`] its matches receive.
//! Rule tables are fixed: the closed pattern set *is* the language model, there is no
//! grammar loading.

use glint_core::TokenClass;
use regex::Regex;

/// A single tokenization rule.
#[derive(Debug, Clone)]
pub struct TokenRule {
    regex: Regex,
    class: TokenClass,
    capture_group: Option<usize>,
}

impl TokenRule {
    /// Compile a rule from a pattern and the class its matches receive.
    pub fn new(pattern: &str, class: TokenClass) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            class,
            capture_group: None,
        })
    }

    /// Claim only a capture group of each match.
    ///
    /// The scan still ranks rules by full-match start, but the emitted token (and the
    /// consumed text) is the group alone. This stands in for lookahead, e.g. matching an
    /// identifier followed by `(` while claiming only the identifier.
    pub fn with_capture_group(mut self, group: usize) -> Self {
        self.capture_group = Some(group);
        self
    }

    /// The class this rule's matches receive.
    pub fn class(&self) -> TokenClass {
        self.class
    }

    /// The compiled pattern.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The claimed capture group, if any.
    pub fn capture_group(&self) -> Option<usize> {
        self.capture_group
    }
}

/// The ordered rule table for code languages (TS/TSX/JS/JSX and the default mode).
///
/// Order matters only as a tie-breaker: the scan picks the earliest-starting match, and
/// among equal starts the first-listed rule wins.
pub fn code_rules() -> Result<Vec<TokenRule>, regex::Error> {
    Ok(vec![
        // Line comment, to end of line.
        TokenRule::new(r"//.*", TokenClass::Comment)?,
        // Block comment, non-greedy, same-line only.
        TokenRule::new(r"/\*.*?\*/", TokenClass::Comment)?,
        // Reserved keywords: control flow, declarations, module/type/async syntax.
        TokenRule::new(
            r"\b(?:import|from|export|default|const|let|var|function|return|if|else|switch|case|break|continue|for|while|do|try|catch|finally|throw|new|typeof|instanceof|in|of|as|type|interface|enum|class|extends|implements|async|await|yield)\b",
            TokenClass::Keyword,
        )?,
        // Well-known framework identifiers.
        TokenRule::new(
            r"\b(?:React|useState|useEffect|useCallback|useMemo|useRef|useContext)\b",
            TokenClass::TypeName,
        )?,
        // Literal constants.
        TokenRule::new(
            r"\b(?:true|false|null|undefined|void|never)\b",
            TokenClass::Constant,
        )?,
        // String / char / template literal, each allowing escaped delimiters.
        TokenRule::new(
            r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`"#,
            TokenClass::StringLit,
        )?,
        // Numeric literal (integer or decimal).
        TokenRule::new(r"\b\d+\.?\d*\b", TokenClass::Number)?,
        // Opening/closing angle-bracket tag, uppercase tag name.
        TokenRule::new(r"</?[A-Z]\w*", TokenClass::JsxComponentTag)?,
        // Opening/closing angle-bracket tag, lowercase tag name.
        TokenRule::new(r"</?[a-z]\w*", TokenClass::HtmlTag)?,
        // Identifier immediately followed by `(`; the `(` is left for the punctuation rule.
        TokenRule::new(r"\b(\w+)\(", TokenClass::FunctionName)?.with_capture_group(1),
        // Single punctuation/operator character.
        TokenRule::new(r"[{}()\[\];,.:?!<>=+\-*/&|^~%@#]", TokenClass::Punctuation)?,
    ])
}

/// The three independent JSON passes: quoted keys, quoted values, bare numeric values.
///
/// Each pass claims capture group 1; matches from all passes are collected and sorted by
/// start offset before the line is reconstructed.
pub fn json_rules() -> Result<Vec<TokenRule>, regex::Error> {
    Ok(vec![
        // Quoted key immediately followed by `:` (the "variable" role).
        TokenRule::new(r#"("(?:[^"\\]|\\.)*")\s*:"#, TokenClass::TypeName)?.with_capture_group(1),
        // Quoted value immediately preceded by `:`.
        TokenRule::new(r#":\s*("(?:[^"\\]|\\.)*")"#, TokenClass::StringLit)?.with_capture_group(1),
        // Bare numeric value preceded by `:`.
        TokenRule::new(r":\s*(\d+)", TokenClass::Number)?.with_capture_group(1),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile() {
        assert_eq!(code_rules().unwrap().len(), 11);
        assert_eq!(json_rules().unwrap().len(), 3);
    }

    #[test]
    fn test_keyword_rule_respects_word_boundaries() {
        let rules = code_rules().unwrap();
        let keyword = &rules[2];
        assert!(keyword.regex().is_match("const x"));
        assert!(!keyword.regex().is_match("constant"));
        assert!(!keyword.regex().is_match("unconst"));
    }

    #[test]
    fn test_function_rule_claims_identifier_only() {
        let rules = code_rules().unwrap();
        let function = &rules[9];
        let caps = function.regex().captures("foo(x)").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "foo");
        assert_eq!(function.capture_group(), Some(1));
    }
}
