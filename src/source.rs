// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Symbol resolution over Rust source files.
//!
//! Supplies the declared fields of a record type to
//! [`SchemaExtractor`](crate::schema::SchemaExtractor).
//!
//! # Input
//!
//! ```rust,ignore
//! use chrono::NaiveDateTime;
//!
//! #[derive(Debug, Default)]
//! pub struct Account {
//!     pub id: i64,
//!     pub email: String,
//!     pub created: NaiveDateTime,
//!     #[cfg_attr(sqlgen, sqlgen(skip))]
//!     pub session: Option<String>,
//! }
//! ```
//!
//! # Rules
//!
//! | Case | Handling |
//! |------|----------|
//! | struct not declared at the top level of any file | [`SourceError::TypeNotFound`](crate::error::SourceError) |
//! | tuple or unit struct | [`SourceError::UnsupportedShape`](crate::error::SourceError) |
//! | `#[cfg_attr(sqlgen, sqlgen(skip))]` | field omitted |
//! | name imported by `use a::b::Name;` | qualified as `a::b::Name` |
//!
//! The record type must implement `Default`; generated row scanners start
//! from `Default::default()`.

mod package;
mod resolve;

pub use package::Package;
pub use resolve::{UseMap, declared_type};
