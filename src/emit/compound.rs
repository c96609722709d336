// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Open block handle.

use super::writer::SourceEmitter;

/// One open `{ ... }` scope of a [`SourceEmitter`].
///
/// The handle holds the emitter by exclusive borrow, so while it is alive
/// neither the emitter nor an enclosing handle can be written to. Nested
/// handles therefore close in strict LIFO order, and because dropping a
/// handle closes its block, every opened block is closed exactly once.
///
/// | Operation | Output |
/// |-----------|--------|
/// | [`line`](Self::line) | indented line inside the block |
/// | [`block`](Self::block) | nested `header {` |
/// | [`close_and_reopen`](Self::close_and_reopen) | `} header {` at the same depth |
/// | [`close`](Self::close) / drop | `}` |
/// | [`close_with`](Self::close_with) | `}` followed by a suffix such as `);` |
#[derive(Debug)]
#[must_use = "the block closes as soon as the handle is dropped"]
pub struct CompoundStatement<'e> {
    emitter: &'e mut SourceEmitter,
    suffix:  &'static str
}

impl<'e> CompoundStatement<'e> {
    pub(super) const fn new(emitter: &'e mut SourceEmitter) -> Self {
        Self { emitter, suffix: "" }
    }

    /// Write a line inside the block.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.emitter.line(text);
        self
    }

    /// Write an empty line inside the block.
    pub fn blank(&mut self) -> &mut Self {
        self.emitter.blank();
        self
    }

    /// Open a nested block.
    pub fn block(&mut self, header: impl AsRef<str>) -> CompoundStatement<'_> {
        self.emitter.block(header)
    }

    /// Close this block and continue the same statement with another one.
    ///
    /// Writes `} header {` on a single line, as in `} else {`.
    pub fn close_and_reopen(&mut self, header: impl AsRef<str>) -> &mut Self {
        self.emitter.close_delimiter();
        self.emitter.push_str(" ");
        self.emitter.open(header.as_ref());
        self
    }

    /// Close the block.
    pub fn close(self) {}

    /// Close the block, appending `suffix` after the closing delimiter.
    pub fn close_with(mut self, suffix: &'static str) {
        self.suffix = suffix;
    }

    /// Depth of the lines written inside this block.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.emitter.depth()
    }
}

impl Drop for CompoundStatement<'_> {
    fn drop(&mut self) {
        self.emitter.close_delimiter();
        self.emitter.push_str(self.suffix);
        self.emitter.push_str("\n");
    }
}
