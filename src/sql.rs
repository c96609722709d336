// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL statement text.
//!
//! Every statement is built once from a [`RecordSchema`] and embedded in the
//! generated accessor as a string literal. Placeholder `$k` always refers to
//! the k-th field in declaration order, so a statement that binds several
//! fields binds all of them in that order.
//!
//! | Statement | Pattern |
//! |-----------|---------|
//! | insert | `INSERT INTO t(a,b,c) VALUES($1,$2,$3)` |
//! | select by field | `SELECT a,b,c FROM t WHERE b=$1` |
//! | update | `UPDATE t SET (b,c)=($2,$3) WHERE a=$1` |
//! | delete | `DELETE FROM t WHERE a=$1` |

use crate::{
    error::SchemaError,
    schema::{FieldSpec, RecordSchema}
};

/// PostgreSQL positional placeholder for a 1-based index.
#[must_use]
pub fn placeholder(index: usize) -> String {
    format!("${index}")
}

/// `$1,$2,...,$count`.
#[must_use]
pub fn placeholders(count: usize) -> String {
    (1..=count).map(placeholder).collect::<Vec<_>>().join(",")
}

/// All statements of one accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    /// Insert of every column.
    pub insert: String,

    /// One select per field, in declaration order.
    pub selects: Vec<String>,

    /// Update of the non-key columns; `None` when there are none.
    pub update: Option<String>,

    /// Delete by primary key.
    pub delete: String
}

impl Statements {
    /// Build every statement for `schema`.
    ///
    /// # Errors
    ///
    /// Fails when the schema does not have exactly one primary key.
    pub fn build(schema: &RecordSchema) -> Result<Self, SchemaError> {
        let pk = schema.primary_key()?;
        Ok(Self {
            insert:  insert(schema),
            selects: schema
                .fields
                .iter()
                .map(|field| select_by(schema, field))
                .collect(),
            update:  update(schema, pk),
            delete:  delete(schema, pk)
        })
    }
}

fn column_list(schema: &RecordSchema) -> String {
    schema
        .fields
        .iter()
        .map(|f| f.column_name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// `INSERT INTO t(a,b) VALUES($1,$2)`.
#[must_use]
pub fn insert(schema: &RecordSchema) -> String {
    format!(
        "INSERT INTO {}({}) VALUES({})",
        schema.table_name,
        column_list(schema),
        placeholders(schema.fields.len())
    )
}

/// `SELECT a,b FROM t WHERE <field>=$1`.
#[must_use]
pub fn select_by(schema: &RecordSchema, field: &FieldSpec) -> String {
    format!(
        "SELECT {} FROM {} WHERE {}={}",
        column_list(schema),
        schema.table_name,
        field.column_name,
        placeholder(1)
    )
}

/// `UPDATE t SET (b,c)=($2,$3) WHERE a=$1`, or `None` without non-key
/// columns.
#[must_use]
pub fn update(schema: &RecordSchema, pk: &FieldSpec) -> Option<String> {
    let (columns, values): (Vec<&str>, Vec<String>) = schema
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.is_primary_key)
        .map(|(i, f)| (f.column_name.as_str(), placeholder(i + 1)))
        .unzip();
    if columns.is_empty() {
        return None;
    }
    Some(format!(
        "UPDATE {} SET ({})=({}) WHERE {}={}",
        schema.table_name,
        columns.join(","),
        values.join(","),
        pk.column_name,
        placeholder(position(schema, pk))
    ))
}

/// `DELETE FROM t WHERE a=$1`.
#[must_use]
pub fn delete(schema: &RecordSchema, pk: &FieldSpec) -> String {
    format!(
        "DELETE FROM {} WHERE {}={}",
        schema.table_name,
        pk.column_name,
        placeholder(1)
    )
}

/// 1-based declared position of `field`.
fn position(schema: &RecordSchema, field: &FieldSpec) -> usize {
    schema
        .fields
        .iter()
        .position(|f| f == field)
        .map_or(1, |i| i + 1)
}
