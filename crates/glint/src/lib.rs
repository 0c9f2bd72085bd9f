#![warn(missing_docs)]
//! glint - Headless Highlight + Diagnostics Engine
//!
//! # Overview
//!
//! `glint` composes the per-line tokenizer (`glint-highlight`) and the heuristic line
//! scanner (`glint-diagnostics`) into a whole-file analysis a text-surface renderer can
//! consume directly: per-line classified token spans plus line/column diagnostics, grouped
//! for O(1) per-line lookup.
//!
//! The engine is synchronous, stateless per call, and pure: the same `(content, language)`
//! input always produces the same [`FileAnalysis`], so callers may memoize freely. The
//! intended execution model is "recompute on every content change"; [`AnalysisCache`] is
//! the explicit, caller-held form of that memoization.
//!
//! # Quick Start
//!
//! ```rust
//! use glint::{Analyzer, LanguageTag, Severity};
//!
//! let analyzer = Analyzer::new().unwrap();
//! let analysis = analyzer.analyze("const x = 5\n", Some(LanguageTag::Ts));
//!
//! // Tokens cover every line exactly.
//! let tokens = analysis.line_tokens(1).unwrap();
//! let rebuilt: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(rebuilt, "const x = 5");
//!
//! // The declaration is missing its semicolon.
//! let diagnostics = analysis.diagnostics_on_line(1);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, Severity::Warning);
//! ```
//!
//! # Module Description
//!
//! - [`analysis`] - the [`Analyzer`] and the owned [`FileAnalysis`] it produces
//! - [`index`] - [`DiagnosticIndex`], grouping diagnostics by line
//! - [`cache`] - [`AnalysisCache`], content-keyed memoization

pub mod analysis;
pub mod cache;
pub mod index;

pub use analysis::{Analyzer, AnalyzerError, FileAnalysis, LineAnalysis};
pub use cache::AnalysisCache;
pub use index::DiagnosticIndex;

pub use glint_core::measure;
pub use glint_core::{
    Diagnostic, LineEnding, LineIndex, Severity, Token, TokenClass, TokenSpan,
};
pub use glint_diagnostics::LineLinter;
pub use glint_highlight::Tokenizer;
pub use glint_lang::{CommentConfig, LanguageTag};
