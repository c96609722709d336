// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Formatter collaborator.

use crate::error::FormatError;

/// Canonicalizes emitted source text.
pub trait Formatter {
    /// Return the canonical form of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when `source` cannot be understood.
    fn format(&self, source: &str) -> Result<String, FormatError>;
}

/// Parses the text with `syn` and prints it back with `prettyplease`.
///
/// Only doc comments survive the round trip; plain `//` comments are
/// dropped by the parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyPlease;

impl Formatter for PrettyPlease {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let file = syn::parse_file(source)?;
        Ok(prettyplease::unparse(&file))
    }
}
