// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type classification.
//!
//! Maps a declared field type to a [`GenericCategory`], then to the default
//! physical [`ColumnType`] of that category.
//!
//! # Tables
//!
//! | Source type | Category |
//! |-------------|----------|
//! | `i16`, `i32`, `i64` | [`GenericCategory::Numeric`] |
//! | `String` | [`GenericCategory::Text`] |
//! | `chrono::NaiveDateTime`, `chrono::NaiveDate`, `chrono::DateTime<Utc>` | [`GenericCategory::Timestamp`] |
//! | `time::OffsetDateTime`, `time::PrimitiveDateTime`, `time::Date` | [`GenericCategory::Timestamp`] |
//!
//! | Category | Candidates (first is the default) |
//! |----------|-----------------------------------|
//! | Numeric | `BIGINT`, `INTEGER`, `SMALLINT` |
//! | Text | `VARCHAR`, `TEXT` |
//! | Timestamp | `TIMESTAMP`, `TIMESTAMPTZ`, `DATE` |
//!
//! The candidate lists are ordered so a future selector (size, precision)
//! can pick a non-default entry without changing callers.

use std::{collections::HashMap, fmt};

/// Coarse semantic classification of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenericCategory {
    /// Integer-like values.
    Numeric,
    /// Character data.
    Text,
    /// Dates and date-times.
    Timestamp,
    /// No table entry; such fields are excluded from the schema.
    Unknown
}

/// Physical column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// 64-bit integer.
    BigInt,
    /// 32-bit integer.
    Integer,
    /// 16-bit integer.
    SmallInt,
    /// Variable-length string.
    Varchar,
    /// Unbounded string.
    Text,
    /// Date-time without zone.
    Timestamp,
    /// Date-time with zone.
    TimestampTz,
    /// Calendar date.
    Date
}

impl ColumnType {
    /// SQL spelling of the type.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::BigInt => "BIGINT",
            Self::Integer => "INTEGER",
            Self::SmallInt => "SMALLINT",
            Self::Varchar => "VARCHAR",
            Self::Text => "TEXT",
            Self::Timestamp => "TIMESTAMP",
            Self::TimestampTz => "TIMESTAMPTZ",
            Self::Date => "DATE"
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Built-in source type table.
const SOURCE_TYPES: &[(&str, GenericCategory)] = &[
    ("i16", GenericCategory::Numeric),
    ("i32", GenericCategory::Numeric),
    ("i64", GenericCategory::Numeric),
    ("String", GenericCategory::Text),
    ("chrono::NaiveDateTime", GenericCategory::Timestamp),
    ("chrono::NaiveDate", GenericCategory::Timestamp),
    ("chrono::DateTime<Utc>", GenericCategory::Timestamp),
    ("chrono::DateTime<chrono::Utc>", GenericCategory::Timestamp),
    ("time::OffsetDateTime", GenericCategory::Timestamp),
    ("time::PrimitiveDateTime", GenericCategory::Timestamp),
    ("time::Date", GenericCategory::Timestamp)
];

/// Built-in category to physical type table.
const COLUMN_TYPES: &[(GenericCategory, &[ColumnType])] = &[
    (
        GenericCategory::Numeric,
        &[ColumnType::BigInt, ColumnType::Integer, ColumnType::SmallInt]
    ),
    (GenericCategory::Text, &[ColumnType::Varchar, ColumnType::Text]),
    (
        GenericCategory::Timestamp,
        &[ColumnType::Timestamp, ColumnType::TimestampTz, ColumnType::Date]
    )
];

/// Pure lookup from source type names to categories and column types.
///
/// Construct once and pass by reference; the tables are never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct TypeClassifier {
    categories: HashMap<String, GenericCategory>,
    columns:    HashMap<GenericCategory, Vec<ColumnType>>
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::new(
            SOURCE_TYPES.iter().copied(),
            COLUMN_TYPES
                .iter()
                .map(|&(category, columns)| (category, columns.to_vec()))
        )
    }
}

impl TypeClassifier {
    /// Build a classifier from explicit tables.
    ///
    /// Entries mapping to [`GenericCategory::Unknown`] are dropped, as are
    /// empty candidate lists.
    pub fn new<'a>(
        categories: impl IntoIterator<Item = (&'a str, GenericCategory)>,
        columns: impl IntoIterator<Item = (GenericCategory, Vec<ColumnType>)>
    ) -> Self {
        Self {
            categories: categories
                .into_iter()
                .filter(|(_, category)| *category != GenericCategory::Unknown)
                .map(|(name, category)| (name.to_string(), category))
                .collect(),
            columns:    columns
                .into_iter()
                .filter(|(category, candidates)| {
                    *category != GenericCategory::Unknown && !candidates.is_empty()
                })
                .collect()
        }
    }

    /// Classify a source type name.
    ///
    /// The name is matched exactly, so qualified references must be passed
    /// in their dotted (`module::Type`) form.
    #[must_use]
    pub fn classify(&self, source_type: &str) -> GenericCategory {
        self.categories
            .get(source_type)
            .copied()
            .unwrap_or(GenericCategory::Unknown)
    }

    /// Ordered physical candidates for a category.
    #[must_use]
    pub fn candidates(&self, category: GenericCategory) -> &[ColumnType] {
        self.columns.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Default physical type of a category.
    ///
    /// Returns `None` for [`GenericCategory::Unknown`].
    #[must_use]
    pub fn default_column_type(&self, category: GenericCategory) -> Option<ColumnType> {
        self.candidates(category).first().copied()
    }
}
