// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for schema extraction, source resolution and formatting.
//!
//! # Taxonomy
//!
//! | Type | Raised by | Fatal |
//! |------|-----------|-------|
//! | [`SchemaError`] | extraction, generation | yes, no output is produced |
//! | [`SourceError`] | source loading and type lookup | yes |
//! | [`FormatError`] | the formatter collaborator | no, raw text is kept |
//!
//! Skipped fields (unrecognised types, multi-name declarations,
//! `sqlgen(skip)`) are not errors at all. They are logged at `warn` level
//! and extraction continues.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Schema invariant violations.
///
/// Any of these aborts generation for the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields were inferred as primary keys.
    #[error(
        "type `{type_name}` declares more than one primary key (`{first}` and `{second}`); composite keys are not supported"
    )]
    MultiplePrimaryKeys {
        /// Record type name.
        type_name: String,
        /// First primary key field seen.
        first:     String,
        /// Offending second field.
        second:    String
    },

    /// No field survived extraction.
    #[error("no persistable fields found for type `{type_name}`")]
    NoFields {
        /// Record type name.
        type_name: String
    },

    /// Two fields map to the same column or lookup method.
    #[error("type `{type_name}`: fields `{first}` and `{second}` both map to `{name}`")]
    NameCollision {
        /// Record type name.
        type_name: String,
        /// Shared column or lookup name.
        name:      String,
        /// Field declared first.
        first:     String,
        /// Field declared later.
        second:    String
    },

    /// Update, delete and the primary key lookup need a key column.
    #[error("type `{type_name}` has no primary key field (a field named `id`)")]
    MissingPrimaryKey {
        /// Record type name.
        type_name: String
    }
}

/// Failures of the symbol-resolution collaborator.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A file or directory could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Offending path.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    },

    /// A source file is not valid Rust.
    #[error("parsing {}: {source}", path.display())]
    Parse {
        /// Offending file.
        path:   PathBuf,
        /// Parser diagnostic.
        #[source]
        source: syn::Error
    },

    /// No `.rs` file was found in the given inputs.
    #[error("{}: no Rust source files", path.display())]
    NoSourceFiles {
        /// Directory or first path given.
        path: PathBuf
    },

    /// The requested type is not declared in the package.
    #[error("type `{type_name}` is not declared in package `{package}`")]
    TypeNotFound {
        /// Requested type.
        type_name: String,
        /// Package that was searched.
        package:   String
    },

    /// The requested type is not a struct with named fields.
    #[error("type `{type_name}` cannot be persisted: {message}")]
    UnsupportedShape {
        /// Requested type.
        type_name: String,
        /// Rendered `darling` diagnostic.
        message:   String
    }
}

/// The formatter rejected the emitted text.
#[derive(Debug, Error)]
#[error("generated source is not valid Rust: {0}")]
pub struct FormatError(#[from] pub syn::Error);

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    /// Schema invariant violation.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Source loading or type lookup failure.
    #[error(transparent)]
    Source(#[from] SourceError)
}

/// Result alias for fallible crate operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
