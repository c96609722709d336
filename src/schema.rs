// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record schemas and how they are derived.
//!
//! # Data Structures
//!
//! ```text
//! RecordSchema
//! ├── type_name: String           (e.g. "Foo")
//! ├── table_name: String          (lower-cased type name)
//! ├── package_name: String        (module declaring the record)
//! ├── additional_imports: BTreeSet<String>
//! └── fields: Vec<FieldSpec>
//!     └── FieldSpec
//!         ├── source_name: String     (field name)
//!         ├── column_name: String     (lower-cased field name)
//!         ├── is_primary_key: bool    (name is `id`, any case)
//!         ├── source_type: String     (e.g. "chrono::NaiveDateTime")
//!         ├── category: GenericCategory
//!         └── column_type: ColumnType
//! ```
//!
//! # Flow
//!
//! ```text
//! [DeclaredField] ── SchemaExtractor ──► RecordSchema
//!                         │
//!                         └── TypeClassifier (category, column type)
//! ```

mod classify;
mod extract;
mod field;
mod record;

pub use classify::{ColumnType, GenericCategory, TypeClassifier};
pub use extract::{DeclaredField, DeclaredType, SchemaExtractor};
pub use field::FieldSpec;
pub use record::RecordSchema;
