//! Line ending helpers.
//!
//! The engine analyzes text using LF (`'\n'`) line boundaries; a CRLF (`"\r\n"`) document
//! produces the same per-line analysis as its LF form. The dominant ending is still worth
//! tracking so a host can save a round-tripped document with its original endings.

use std::borrow::Cow;

/// The newline sequence a document prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending from a source text.
    ///
    /// Policy: if the input contains any CRLF (`"\r\n"`), returns [`LineEnding::Crlf`],
    /// otherwise [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Convert an LF-normalized text to this line ending for saving.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }

    /// Normalize a text to LF endings, borrowing when no CRLF is present.
    pub fn normalize(text: &str) -> Cow<'_, str> {
        if text.contains("\r\n") {
            Cow::Owned(text.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(text)
        }
    }
}
