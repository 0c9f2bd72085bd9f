#![warn(missing_docs)]
//! glint-core - Shared Data Model for the glint Analysis Engine
//!
//! # Overview
//!
//! `glint-core` holds the types every other glint crate speaks: classified token spans,
//! line-scoped diagnostics, a rope-backed line index, and Unicode-aware display measurement.
//! It contains no tokenization or scanning logic of its own; the engine crates
//! (`glint-highlight`, `glint-diagnostics`) produce these values and the `glint` facade
//! composes them into whole-file analyses.
//!
//! # Coordinate conventions
//!
//! - **Columns** are character offsets (Unicode scalar values), not bytes, measured against
//!   the raw (untrimmed) line. Ranges are half-open (`start..end`).
//! - **Lines** are 1-based in diagnostics (matching editor gutters) and 0-based in
//!   [`LineIndex`] queries (matching rope semantics).
//! - Text is split on LF boundaries; a trailing `'\r'` is stripped from each line, so CRLF
//!   documents analyze identically to their LF form. N newlines produce N+1 lines.
//!
//! # Module Description
//!
//! - [`tokens`] - classified token spans ([`Token`], [`TokenSpan`], [`TokenClass`])
//! - [`diagnostics`] - line diagnostics ([`Diagnostic`], [`Severity`])
//! - [`line_index`] - rope-backed line access and offset conversion
//! - [`line_ending`] - CRLF detection and round-trip helpers
//! - [`measure`] - UAX #11 display-cell measurement for fixed-grid renderers
//! - [`text`] - small text helpers shared by the engine crates

pub mod diagnostics;
pub mod line_ending;
pub mod line_index;
pub mod measure;
pub mod text;
pub mod tokens;

pub use diagnostics::{Diagnostic, Severity};
pub use line_ending::LineEnding;
pub use line_index::LineIndex;
pub use tokens::{Token, TokenClass, TokenSpan, spans_from_tokens, tokens_from_spans};
