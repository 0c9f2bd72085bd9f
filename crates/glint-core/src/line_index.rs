//! Rope-backed line index.
//!
//! Provides O(log N) line access over a document plus conversions between (line, column)
//! positions and document character offsets. The analysis engine iterates lines through this
//! index, and interval-style renderers use the conversions to anchor line/column diagnostics
//! into document offsets.

use ropey::Rope;

/// Line index over an immutable snapshot of document text.
///
/// Lines follow LF boundaries with rope semantics: an empty document has one (empty) line,
/// and N newlines produce N+1 lines. A trailing `'\r'` is stripped from every line text, so
/// CRLF documents expose the same per-line view as their LF-normalized form.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total line count.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total byte count.
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Text of the specified 0-based line, without its line terminator.
    ///
    /// Returns `None` past the last line.
    pub fn get_line_text(&self, line_number: usize) -> Option<String> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_number).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }

        Some(text)
    }

    /// Character offset of a (0-based line, column) position.
    ///
    /// The column is clamped to the line's length (excluding the terminator); lines past the
    /// end map to the end of the document.
    pub fn position_to_char_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start_char = self.rope.line_to_char(line);
        let line_len = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - line_start_char - 1 // -1 for newline
        } else {
            self.rope.len_chars() - line_start_char
        };

        line_start_char + column.min(line_len)
    }

    /// (0-based line, column) position of a document character offset.
    pub fn char_offset_to_position(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());

        let line_idx = self.rope.char_to_line(char_offset);
        let line_start_char = self.rope.line_to_char(line_idx);

        (line_idx, char_offset - line_start_char)
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
