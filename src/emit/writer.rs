// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Indentation-tracking text buffer.

use tracing::warn;

use super::{compound::CompoundStatement, format::Formatter};
use crate::error::FormatError;

/// Spaces per indentation level.
const INDENT: &str = "    ";

/// Line-oriented source writer.
///
/// Knows nothing about what it writes beyond lines and `{ }` blocks. Blocks
/// are opened with [`SourceEmitter::block`]; the returned
/// [`CompoundStatement`] borrows the emitter until it is closed or dropped.
///
/// # Example
///
/// ```
/// use sqlgen::emit::SourceEmitter;
///
/// let mut out = SourceEmitter::new();
/// out.line("use std::fmt;");
/// out.block("fn main()").line("let x = 1;");
/// assert_eq!(out.as_str(), "use std::fmt;\nfn main() {\n    let x = 1;\n}\n");
/// ```
#[derive(Debug, Default)]
pub struct SourceEmitter {
    buf:   String,
    depth: usize
}

impl SourceEmitter {
    /// Create an empty emitter at depth 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one newline-terminated line at the current depth.
    ///
    /// An empty line is written without indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            self.indent();
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Write `header {` and enter the block.
    pub fn block(&mut self, header: impl AsRef<str>) -> CompoundStatement<'_> {
        self.indent();
        self.open(header.as_ref());
        CompoundStatement::new(self)
    }

    /// Current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the emitter, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Run `formatter` over the buffer.
    ///
    /// On success the buffer is replaced by the formatted text. On failure
    /// the raw text is kept unchanged, a warning is logged and the error is
    /// returned so the caller knows the output is unformatted.
    ///
    /// # Errors
    ///
    /// Whatever the formatter reports.
    pub fn format(&mut self, formatter: &dyn Formatter) -> Result<(), FormatError> {
        match formatter.format(&self.buf) {
            Ok(formatted) => {
                self.buf = formatted;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "formatter failed, keeping unformatted output");
                Err(err)
            }
        }
    }

    /// Write the block header and opening delimiter, then descend.
    ///
    /// The caller has already written any indentation.
    pub(super) fn open(&mut self, header: &str) {
        if !header.is_empty() {
            self.buf.push_str(header);
            self.buf.push(' ');
        }
        self.buf.push_str("{\n");
        self.depth += 1;
    }

    /// Ascend one level and write the closing delimiter without a newline.
    pub(super) fn close_delimiter(&mut self) {
        debug_assert!(self.depth > 0, "closing a block at depth 0");
        self.depth = self.depth.saturating_sub(1);
        self.indent();
        self.buf.push('}');
    }

    /// Append raw text to the current line.
    pub(super) fn push_str(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
    }
}
