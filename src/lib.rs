// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # sqlgen
//!
//! Generates prepared-statement CRUD accessors for plain record structs.
//!
//! Given a struct with named fields, sqlgen derives a table schema from the
//! fields whose types it recognizes and writes the source of a companion
//! module targeting `sqlx` (PostgreSQL) on `tokio`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! // src/models.rs
//! #[derive(Debug, Default)]
//! pub struct Account {
//!     pub id: i64,
//!     pub email: String,
//!     pub created: chrono::NaiveDateTime,
//! }
//!
//! mod account_query; // written by `sqlgen -t Account src/models.rs`
//! pub use account_query::{AccountQuery, AccountQueryTx};
//! ```
//!
//! ```rust,ignore
//! let query = AccountQuery::validate(pool).await?;
//! let tx = query.transaction().await?;
//! tx.create(&account).await?;
//! let (mut rows, mut errors) = tx.by_email("a@example.com".into()).await;
//! while let Some(row) = rows.recv().await { /* ... */ }
//! tx.commit().await?;
//! ```
//!
//! ## Conventions
//!
//! | Item | Rule |
//! |------|------|
//! | table | lower-cased type name |
//! | column | lower-cased field name |
//! | primary key | the field named `id`, any case; exactly one required |
//! | persisted types | `i16`, `i32`, `i64`, `String`, `chrono`/`time` date-times |
//! | other types | skipped with a warning |
//!
//! ## Pipeline
//!
//! ```text
//! source::Package ──declared_fields──► schema::SchemaExtractor ──► RecordSchema
//!                                              │
//!                                     schema::TypeClassifier
//!
//! RecordSchema ──► generate::CrudGenerator ──► emit::SourceEmitter ──► Formatter ──► Generated
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod schema;
pub mod source;
pub mod sql;

pub use config::GenerateOptions;
pub use error::{Error, FormatError, Result, SchemaError, SourceError};
pub use generate::{CrudGenerator, Generated, generate};
pub use schema::{RecordSchema, SchemaExtractor, TypeClassifier};
pub use source::Package;
