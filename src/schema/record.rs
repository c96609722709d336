// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Normalized record description.

use std::collections::{BTreeSet, HashMap};

use convert_case::{Case, Casing};

use super::field::FieldSpec;
use crate::error::SchemaError;

/// One persistent record type, ready for code generation.
///
/// Field order is significant: it fixes placeholder numbering and the order
/// of positional arguments in every generated statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    /// Record type name (e.g. `UserAccount`).
    pub type_name: String,

    /// Table name, the lower-cased type name.
    pub table_name: String,

    /// Module declaring the record; the generated unit becomes its child.
    pub package_name: String,

    /// Persisted fields in declaration order.
    pub fields: Vec<FieldSpec>,

    /// Modules the generated unit must import, deduplicated and sorted.
    pub additional_imports: BTreeSet<String>
}

impl RecordSchema {
    /// Build a schema with the default table name.
    pub fn new(
        type_name: impl Into<String>,
        package_name: impl Into<String>,
        fields: Vec<FieldSpec>,
        additional_imports: BTreeSet<String>
    ) -> Self {
        let type_name = type_name.into();
        Self {
            table_name: type_name.to_lowercase(),
            type_name,
            package_name: package_name.into(),
            fields,
            additional_imports
        }
    }

    /// Check the invariants generation relies on.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::NoFields`] when `fields` is empty
    /// - [`SchemaError::MultiplePrimaryKeys`] when more than one field is a key
    /// - [`SchemaError::MissingPrimaryKey`] when no field is a key
    /// - [`SchemaError::NameCollision`] when two fields share a column or a
    ///   lookup name (`fooBar` and `foo_bar` are both `by_foo_bar`)
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.fields.is_empty() {
            return Err(SchemaError::NoFields {
                type_name: self.type_name.clone()
            });
        }
        self.primary_key()?;
        self.check_unique(|f| f.column_name.clone())?;
        self.check_unique(FieldSpec::lookup_name)
    }

    fn check_unique(&self, name_of: impl Fn(&FieldSpec) -> String) -> Result<(), SchemaError> {
        let mut seen: HashMap<String, &FieldSpec> = HashMap::new();
        for field in &self.fields {
            if let Some(first) = seen.insert(name_of(field), field) {
                return Err(SchemaError::NameCollision {
                    type_name: self.type_name.clone(),
                    name:      name_of(field),
                    first:     first.source_name.clone(),
                    second:    field.source_name.clone()
                });
            }
        }
        Ok(())
    }

    /// The single primary key field.
    ///
    /// # Errors
    ///
    /// Fails when there is no key or more than one.
    pub fn primary_key(&self) -> Result<&FieldSpec, SchemaError> {
        let mut keys = self.fields.iter().filter(|f| f.is_primary_key);
        let first = keys.next().ok_or_else(|| SchemaError::MissingPrimaryKey {
            type_name: self.type_name.clone()
        })?;
        if let Some(second) = keys.next() {
            return Err(SchemaError::MultiplePrimaryKeys {
                type_name: self.type_name.clone(),
                first:     first.source_name.clone(),
                second:    second.source_name.clone()
            });
        }
        Ok(first)
    }

    /// Fields other than the primary key, in declaration order.
    pub fn non_key_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.is_primary_key)
    }

    /// `(column, physical type)` pairs in declaration order.
    #[must_use]
    pub fn columns(&self) -> Vec<(&str, &'static str)> {
        self.fields
            .iter()
            .map(|f| (f.column_name.as_str(), f.column_type.as_sql()))
            .collect()
    }

    /// Name of the generated query type (`UserAccountQuery`).
    #[must_use]
    pub fn query_name(&self) -> String {
        format!("{}Query", self.type_name)
    }

    /// Name of the generated transaction type (`UserAccountQueryTx`).
    #[must_use]
    pub fn transaction_name(&self) -> String {
        format!("{}QueryTx", self.type_name)
    }

    /// Name of the generated row scanner (`scan_user_account`).
    #[must_use]
    pub fn scanner_name(&self) -> String {
        format!("scan_{}", self.type_name.to_case(Case::Snake))
    }
}
