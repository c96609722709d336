// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Normalized field description.

use convert_case::{Case, Casing};

use super::classify::{ColumnType, GenericCategory};

/// One persisted field of a record.
///
/// Created once per accepted field during extraction and never modified
/// afterwards.
///
/// | Field | Derived from |
/// |-------|--------------|
/// | `column_name` | lower-cased source name |
/// | `is_primary_key` | source name equals `id`, ignoring case |
/// | `column_type` | first candidate of `category` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as declared (e.g. `created_at`).
    pub source_name: String,

    /// Column name in the table.
    ///
    /// There is no override hook; the column is always the lower-cased
    /// source name when built through [`FieldSpec::new`].
    pub column_name: String,

    /// Whether this field addresses a row for lookup, update and delete.
    pub is_primary_key: bool,

    /// Declared type, used verbatim in generated signatures.
    pub source_type: String,

    /// Classification of `source_type`. Never [`GenericCategory::Unknown`].
    pub category: GenericCategory,

    /// Default physical type of `category`.
    pub column_type: ColumnType
}

impl FieldSpec {
    /// Build a field, inferring column name and primary key flag.
    pub fn new(
        source_name: impl Into<String>,
        source_type: impl Into<String>,
        category: GenericCategory,
        column_type: ColumnType
    ) -> Self {
        let source_name = source_name.into();
        let bare = unraw(&source_name);
        Self {
            column_name: bare.to_lowercase(),
            is_primary_key: bare.eq_ignore_ascii_case("id"),
            source_name,
            source_type: source_type.into(),
            category,
            column_type
        }
    }

    /// Name of the generated statement handle and lookup method
    /// (`by_created_at`).
    #[must_use]
    pub fn lookup_name(&self) -> String {
        format!("by_{}", unraw(&self.source_name).to_case(Case::Snake))
    }
}

/// Strip the `r#` prefix of a raw identifier.
fn unraw(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}
