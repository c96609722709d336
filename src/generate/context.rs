// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation context.
//!
//! Contains the [`Context`] struct that precomputes every name and statement
//! the emission steps need.

use crate::{
    config::GenerateOptions,
    error::SchemaError,
    schema::{FieldSpec, RecordSchema},
    sql::Statements
};

/// Precomputed values for one accessor.
///
/// # Fields
///
/// | Field | Example |
/// |-------|---------|
/// | `record` | `Foo` |
/// | `query` | `FooQuery` |
/// | `tx` | `FooQueryTx` |
/// | `scanner` | `scan_foo` |
/// | `capacity` | `10` |
pub struct Context<'a> {
    /// Schema being generated.
    pub schema: &'a RecordSchema,

    /// The single primary key field.
    pub pk: &'a FieldSpec,

    /// SQL text of every statement.
    pub statements: Statements,

    /// Record type name.
    pub record: &'a str,

    /// Query record name.
    pub query: String,

    /// Transaction record name.
    pub tx: String,

    /// Row scanner function name.
    pub scanner: String,

    /// Bound of each channel returned by non-key lookups.
    pub capacity: usize
}

impl<'a> Context<'a> {
    /// Validate `schema` and precompute everything.
    ///
    /// # Errors
    ///
    /// Any [`RecordSchema::validate`] failure.
    pub fn new(schema: &'a RecordSchema, options: &GenerateOptions) -> Result<Self, SchemaError> {
        schema.validate()?;
        let pk = schema.primary_key()?;
        Ok(Self {
            schema,
            pk,
            statements: Statements::build(schema)?,
            record: &schema.type_name,
            query: schema.query_name(),
            tx: schema.transaction_name(),
            scanner: schema.scanner_name(),
            capacity: options.channel_capacity.max(1)
        })
    }

    /// Fields paired with their select statement, in declaration order.
    pub fn lookups(&self) -> impl Iterator<Item = (&'a FieldSpec, &str)> {
        self.schema
            .fields
            .iter()
            .zip(self.statements.selects.iter().map(String::as_str))
    }

    /// Names of the prepared statements in declaration order of the Query
    /// record.
    pub fn statement_names(&self) -> Vec<String> {
        let mut names = vec!["create".to_string()];
        names.extend(self.schema.fields.iter().map(FieldSpec::lookup_name));
        if self.statements.update.is_some() {
            names.push("update".to_string());
        }
        names.push("delete".to_string());
        names
    }
}

/// Render `sql` as a Rust string literal.
pub fn literal(sql: &str) -> String {
    format!("{sql:?}")
}
