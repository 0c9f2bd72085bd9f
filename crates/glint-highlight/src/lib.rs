//! `glint-highlight` - the line tokenizer for the glint analysis engine.
//!
//! Partitions a single line into an ordered, non-overlapping, gap-free sequence of
//! classified spans. Two modes share one rule vocabulary:
//!
//! - **Code mode** (TS/TSX/JS/JSX and every recognized non-JSON language): leftmost-match
//!   scanning over a fixed, priority-ordered rule table applied to the unconsumed remainder
//!   of the line.
//! - **JSON mode**: three independent passes (keys, string values, numeric values) whose
//!   matches are collected, sorted by start offset, and stitched together with plain-text
//!   gap fillers.
//!
//! Tokenization is total and deterministic: it never fails, never loops, and in the worst
//! case returns the whole line as one [`TokenClass::Plain`] token.

pub mod rules;

use glint_core::{Token, TokenClass};
use glint_lang::LanguageTag;
use rules::{TokenRule, code_rules, json_rules};

/// A line tokenizer with pre-compiled rule tables.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    code: Vec<TokenRule>,
    json: Vec<TokenRule>,
}

impl Tokenizer {
    /// Compile both rule tables.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            code: code_rules()?,
            json: json_rules()?,
        })
    }

    /// Tokenize one line (without its terminator) for the given language.
    ///
    /// Concatenating the returned tokens' `text` reproduces `line` exactly. An empty line
    /// yields no tokens in code mode and a single empty `Plain` token in JSON mode; both
    /// satisfy the invariant.
    pub fn tokenize<'a>(&self, line: &'a str, language: LanguageTag) -> Vec<Token<'a>> {
        match language {
            LanguageTag::Json => self.tokenize_json(line),
            _ => self.tokenize_code(line),
        }
    }

    /// Code mode: repeatedly pick the earliest-starting rule match in the unconsumed
    /// suffix, ties broken by rule order; text before the match is `Plain`, and an
    /// unmatched suffix ends the scan as one final `Plain` token.
    fn tokenize_code<'a>(&self, line: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut remaining = line;

        while !remaining.is_empty() {
            let mut best: Option<(usize, usize, usize, TokenClass)> = None;

            for rule in &self.code {
                let candidate = match rule.capture_group() {
                    Some(group) => {
                        let Some(caps) = rule.regex().captures(remaining) else {
                            continue;
                        };
                        let (Some(full), Some(claimed)) = (caps.get(0), caps.get(group)) else {
                            continue;
                        };
                        (full.start(), claimed.start(), claimed.end(), rule.class())
                    }
                    None => {
                        let Some(m) = rule.regex().find(remaining) else {
                            continue;
                        };
                        (m.start(), m.start(), m.end(), rule.class())
                    }
                };

                if best.is_none_or(|(start, ..)| candidate.0 < start) {
                    best = Some(candidate);
                }
            }

            match best {
                Some((_, start, end, class)) => {
                    if start > 0 {
                        tokens.push(Token::new(&remaining[..start], TokenClass::Plain));
                    }
                    tokens.push(Token::new(&remaining[start..end], class));
                    remaining = &remaining[end..];
                }
                None => {
                    tokens.push(Token::new(remaining, TokenClass::Plain));
                    break;
                }
            }
        }

        tokens
    }

    /// JSON mode: collect spans from all three passes, sort by start offset, and rebuild
    /// the line left to right with `Plain` gap fillers.
    ///
    /// Overlapping spans are outside this mode's contract (they cannot arise from
    /// well-formed JSON); a span starting before the previous span's end is dropped so the
    /// coverage invariant holds for arbitrary input.
    fn tokenize_json<'a>(&self, line: &'a str) -> Vec<Token<'a>> {
        let mut parts: Vec<(usize, usize, TokenClass)> = Vec::new();

        for rule in &self.json {
            let group = rule.capture_group().unwrap_or(0);
            for caps in rule.regex().captures_iter(line) {
                let Some(m) = caps.get(group) else {
                    continue;
                };
                parts.push((m.start(), m.end(), rule.class()));
            }
        }

        if parts.is_empty() {
            return vec![Token::new(line, TokenClass::Plain)];
        }

        parts.sort_by_key(|&(start, ..)| start);

        let mut tokens = Vec::new();
        let mut cursor = 0;
        for (start, end, class) in parts {
            if start < cursor {
                continue;
            }
            if start > cursor {
                tokens.push(Token::new(&line[cursor..start], TokenClass::Plain));
            }
            tokens.push(Token::new(&line[start..end], class));
            cursor = end;
        }
        if cursor < line.len() {
            tokens.push(Token::new(&line[cursor..], TokenClass::Plain));
        }

        tokens
    }
}
