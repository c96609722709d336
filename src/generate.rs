// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Accessor source generation.
//!
//! Turns one [`RecordSchema`] into the complete source of its data-access
//! module: a Query record of prepared statements and a transaction record
//! carrying the lookups and mutations.
//!
//! # Module Structure
//!
//! ```text
//! generate/
//! ├── context.rs     — Precomputed names and statements
//! ├── header.rs      — Provenance docs and imports
//! ├── decl.rs        — Query/transaction records, scanner, helpers
//! ├── validate.rs    — Statement preparation routine
//! ├── transaction.rs — Transaction factory, commit and rollback
//! ├── accessors.rs   — Per-field lookups
//! └── mutations.rs   — create, update, delete
//! ```
//!
//! # Emission Order
//!
//! | Step | Output |
//! |------|--------|
//! | 1 | header |
//! | 2 | `FooQuery`, `FooQueryTx<'q>` |
//! | 3 | `transaction_finished`, `scan_foo` |
//! | 4 | `impl FooQuery { validate, transaction }` |
//! | 5 | `impl FooQueryTx { by_<field>.. }` |
//! | 6 | `create`, `update`, `delete` |
//! | 7 | `commit`, `rollback` |
//! | 8 | formatter pass |
//!
//! The schema is validated before step 1, so a schema that cannot be
//! expressed produces no text at all.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use sqlgen::{
//!     GenerateOptions,
//!     generate::generate,
//!     schema::{ColumnType, FieldSpec, GenericCategory, RecordSchema}
//! };
//!
//! let schema = RecordSchema::new(
//!     "Foo",
//!     "models",
//!     vec![
//!         FieldSpec::new("id", "i64", GenericCategory::Numeric, ColumnType::BigInt),
//!         FieldSpec::new("bar", "String", GenericCategory::Text, ColumnType::Varchar),
//!     ],
//!     BTreeSet::new()
//! );
//! let out = generate(&schema, &GenerateOptions::default()).unwrap();
//! assert_eq!(out.file_name, "foo_query.rs");
//! assert!(out.source.contains("pub struct FooQuery"));
//! assert!(out.source.contains("UPDATE foo SET (bar)=($2) WHERE id=$1"));
//! ```

mod accessors;
mod context;
mod decl;
mod header;
mod mutations;
mod transaction;
mod validate;

use tracing::{debug, warn};

use self::context::Context;
use crate::{
    config::GenerateOptions,
    emit::{Formatter, PrettyPlease, SourceEmitter},
    error::SchemaError,
    schema::RecordSchema
};

/// Output for one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Record type name.
    pub type_name: String,

    /// Default output file name (`foo_query.rs`).
    pub file_name: String,

    /// Complete source text.
    pub source: String,

    /// Whether the formatter pass succeeded. `false` when formatting was
    /// disabled or the raw text was kept.
    pub formatted: bool
}

/// Schema-to-source generator.
pub struct CrudGenerator<'a> {
    options:   &'a GenerateOptions,
    formatter: &'a dyn Formatter
}

impl<'a> CrudGenerator<'a> {
    /// Generator using the `prettyplease` formatter.
    #[must_use]
    pub fn new(options: &'a GenerateOptions) -> Self {
        Self {
            options,
            formatter: &PrettyPlease
        }
    }

    /// Replace the formatter collaborator.
    #[must_use]
    pub fn with_formatter(mut self, formatter: &'a dyn Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Generate the accessor source for `schema`.
    ///
    /// # Errors
    ///
    /// Any [`SchemaError`] from validation; nothing is emitted in that case.
    pub fn generate(&self, schema: &RecordSchema) -> Result<Generated, SchemaError> {
        let ctx = Context::new(schema, self.options)?;
        let mut out = SourceEmitter::new();

        ctx.header(&mut out);
        ctx.declarations(&mut out);
        ctx.helpers(&mut out);
        {
            let mut imp = out.block(format!("impl {}", ctx.query));
            ctx.validate(&mut imp);
            imp.blank();
            ctx.transaction_factory(&mut imp);
        }
        out.blank();
        {
            let mut imp = out.block(format!("impl<'q> {}<'q>", ctx.tx));
            ctx.accessors(&mut imp);
            ctx.mutations(&mut imp);
            ctx.completion(&mut imp);
        }
        debug_assert_eq!(out.depth(), 0);

        let formatted = self.options.format && out.format(self.formatter).is_ok();
        if !self.options.format {
            debug!(record = %schema.type_name, "formatting disabled");
        } else if !formatted {
            warn!(record = %schema.type_name, "writing unformatted output");
        }

        Ok(Generated {
            type_name: schema.type_name.clone(),
            file_name: self.options.file_name(&schema.type_name),
            source: out.into_string(),
            formatted
        })
    }
}

/// Generate with the default formatter.
///
/// # Errors
///
/// See [`CrudGenerator::generate`].
pub fn generate(schema: &RecordSchema, options: &GenerateOptions) -> Result<Generated, SchemaError> {
    CrudGenerator::new(options).generate(schema)
}
