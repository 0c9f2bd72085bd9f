#![warn(missing_docs)]
//! `glint-lang` - language tags and data-driven language configuration for `glint`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any parsing or
//! highlighting systems. It provides the closed language-tag enumeration that selects which
//! pattern table and diagnostic battery apply to a line, plus small structs the engine uses
//! to answer language-aware questions (comment tokens, etc.).

/// The closed set of languages the engine recognizes.
///
/// The tag determines which tokenizer mode and which diagnostic battery apply. Tags outside
/// this set degrade to "whole line is plain text, no diagnostics" at the engine boundary;
/// they are represented as `None` there, never as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageTag {
    /// TypeScript (`.ts`).
    Ts,
    /// TypeScript React (`.tsx`).
    Tsx,
    /// JavaScript (`.js`).
    Js,
    /// JavaScript React (`.jsx`).
    Jsx,
    /// JSON (`.json`).
    Json,
    /// CSS (`.css`).
    Css,
    /// Markdown (`.md`).
    Md,
    /// Plain text (`.txt`).
    Text,
}

impl LanguageTag {
    /// Parse a short language tag (`"ts"`, `"tsx"`, `"json"`, ...).
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ts" => Some(Self::Ts),
            "tsx" => Some(Self::Tsx),
            "js" => Some(Self::Js),
            "jsx" => Some(Self::Jsx),
            "json" => Some(Self::Json),
            "css" => Some(Self::Css),
            "md" => Some(Self::Md),
            "text" | "txt" => Some(Self::Text),
            _ => None,
        }
    }

    /// Derive a language tag from a file name's extension.
    ///
    /// Returns `None` for unknown or missing extensions.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        Self::from_tag(ext)
    }

    /// The short tag string (inverse of [`LanguageTag::from_tag`]).
    pub fn short_tag(self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Tsx => "tsx",
            Self::Js => "js",
            Self::Jsx => "jsx",
            Self::Json => "json",
            Self::Css => "css",
            Self::Md => "md",
            Self::Text => "text",
        }
    }

    /// Human-readable language name, suitable for a status bar.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Ts => "TypeScript",
            Self::Tsx => "TypeScript React",
            Self::Js => "JavaScript",
            Self::Jsx => "JavaScript React",
            Self::Json => "JSON",
            Self::Css => "CSS",
            Self::Md => "Markdown",
            Self::Text => "Plain Text",
        }
    }

    /// Returns `true` for the code languages whose lines get the diagnostic battery.
    pub fn is_code(self) -> bool {
        matches!(self, Self::Ts | Self::Tsx | Self::Js | Self::Jsx)
    }

    /// Returns `true` for TypeScript flavors (gates TypeScript-only heuristics).
    pub fn is_typescript(self) -> bool {
        matches!(self, Self::Ts | Self::Tsx)
    }

    /// Comment tokens for this language.
    pub fn comment_config(self) -> CommentConfig {
        match self {
            Self::Ts | Self::Tsx | Self::Js | Self::Jsx => {
                CommentConfig::line_and_block("//", "/*", "*/")
            }
            Self::Css => CommentConfig::block("/*", "*/"),
            Self::Json | Self::Md | Self::Text => CommentConfig::default(),
        }
    }
}

/// Comment tokens/config for a given language.
///
/// The engine uses this to answer "is this trimmed line a comment?" in a language-aware way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// Create a config that supports only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// Create a config that supports only block comments.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: None,
            block_start: Some(start.into()),
            block_end: Some(end.into()),
        }
    }

    /// Create a config that supports both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// Returns `true` if a line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if both block comment tokens are configured.
    pub fn has_block(&self) -> bool {
        self.block_start.as_deref().is_some_and(|s| !s.is_empty())
            && self.block_end.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if `trimmed` (a start-trimmed line) begins with one of the configured
    /// comment openers.
    pub fn is_comment_line(&self, trimmed: &str) -> bool {
        let starts = |token: &Option<String>| {
            token
                .as_deref()
                .is_some_and(|t| !t.is_empty() && trimmed.starts_with(t))
        };
        starts(&self.line) || starts(&self.block_start)
    }
}
