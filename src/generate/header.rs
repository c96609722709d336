// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Unit header: provenance docs and imports.
//!
//! ```rust,ignore
//! //! Code generated by sqlgen from `models::Foo`. DO NOT EDIT.
//! #![allow(unused_imports, clippy::single_component_path_imports)]
//!
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use sqlx::postgres::{PgPool, PgRow, PgStatement, Postgres};
//! use sqlx::{Executor, Row, Statement, Transaction};
//! use tokio::sync::{Mutex, mpsc};
//!
//! use super::*;
//! use chrono;
//! ```

use super::context::Context;
use crate::emit::SourceEmitter;

/// Persistence-library imports every accessor needs.
const BASE_IMPORTS: &[&str] = &[
    "std::sync::Arc",
    "futures::StreamExt",
    "sqlx::postgres::{PgPool, PgRow, PgStatement, Postgres}",
    "sqlx::{Executor, Row, Statement, Transaction}",
    "tokio::sync::{Mutex, mpsc}"
];

impl Context<'_> {
    /// Emit the header.
    ///
    /// The unit is a child module of the record's module, so `use super::*`
    /// brings the record type and the parent's imports into scope.
    pub fn header(&self, out: &mut SourceEmitter) {
        out.line(format!(
            "//! Code generated by sqlgen from `{}::{}`. DO NOT EDIT.",
            self.schema.package_name, self.record
        ));
        out.line("//!");
        out.line(format!(
            "//! Include it as a child module of `{}`.",
            self.schema.package_name
        ));
        out.line("#![allow(unused_imports, clippy::single_component_path_imports)]");
        out.blank();
        for import in BASE_IMPORTS {
            out.line(format!("use {import};"));
        }
        out.blank();
        out.line("use super::*;");
        for module in &self.schema.additional_imports {
            out.line(format!("use {module};"));
        }
        out.blank();
    }
}
