// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-field lookup methods.
//!
//! # Primary key
//!
//! Exactly one row is expected; none is `sqlx::Error::RowNotFound`.
//!
//! ```rust,ignore
//! pub async fn by_id(&self, value: i64) -> Result<Foo, sqlx::Error>;
//! ```
//!
//! # Other fields
//!
//! Any number of rows. The method locks the transaction, spawns a producer
//! task that scans rows in cursor order and returns two bounded channels:
//! rows and scan errors. Both close when the cursor is exhausted.
//!
//! ```rust,ignore
//! pub async fn by_bar(&self, value: String)
//!     -> (mpsc::Receiver<Foo>, mpsc::Receiver<sqlx::Error>);
//! ```
//!
//! The producer stops once a receiver it sends to has been dropped. A
//! receiver that is held but not drained blocks the producer, which keeps
//! the cursor open and the transaction locked; later calls on the same
//! transaction, `commit` included, wait until it is drained or dropped.

use super::context::Context;
use crate::{emit::CompoundStatement, schema::FieldSpec};

impl Context<'_> {
    /// Emit one lookup per field, in declaration order.
    pub fn accessors(&self, imp: &mut CompoundStatement<'_>) {
        for field in &self.schema.fields {
            if field.is_primary_key {
                self.key_lookup(imp, field);
            } else {
                self.stream_lookup(imp, field);
            }
            imp.blank();
        }
    }

    fn key_lookup(&self, imp: &mut CompoundStatement<'_>, field: &FieldSpec) {
        imp.line(format!(
            "/// Fetch the [`{}`] whose `{}` equals `value`.",
            self.record, field.column_name
        ));
        imp.line("///");
        imp.line("/// Fails with [`sqlx::Error::RowNotFound`] when there is no such row.");
        let mut body = imp.block(format!(
            "pub async fn {}(&self, value: {}) -> Result<{}, sqlx::Error>",
            field.lookup_name(),
            field.source_type,
            self.record
        ));
        body.line("let mut guard = self.tx.lock().await;");
        body.line("let tx = guard.as_mut().ok_or_else(transaction_finished)?;");
        body.line(format!(
            "let row = self.q.{}.query().bind(value).fetch_one(&mut **tx).await?;",
            field.lookup_name()
        ));
        body.line(format!("{}(&row)", self.scanner));
    }

    fn stream_lookup(&self, imp: &mut CompoundStatement<'_>, field: &FieldSpec) {
        imp.line(format!(
            "/// Stream every [`{}`] whose `{}` equals `value`.",
            self.record, field.column_name
        ));
        imp.line("///");
        imp.line("/// Rows arrive on the first channel in cursor order and scan errors on");
        imp.line(format!(
            "/// the second; each holds at most {} pending values. Both close once the",
            self.capacity
        ));
        imp.line("/// rows are exhausted. The transaction stays locked until then, so a");
        imp.line("/// held but undrained receiver stalls every later call on it.");
        let mut body = imp.block(format!(
            "pub async fn {}(&self, value: {}) -> (mpsc::Receiver<{rec}>, mpsc::Receiver<sqlx::Error>)",
            field.lookup_name(),
            field.source_type,
            rec = self.record
        ));
        body.line(format!("let (obj_tx, obj_rx) = mpsc::channel({});", self.capacity));
        body.line(format!("let (err_tx, err_rx) = mpsc::channel({});", self.capacity));
        body.line("let guard = Arc::clone(&self.tx).lock_owned().await;");
        body.line(format!("let stmt = self.q.{}.clone();", field.lookup_name()));
        {
            let mut task = body.block("tokio::spawn(async move");
            task.line("let mut guard = guard;");
            let mut finished = task.block("let Some(tx) = guard.as_mut() else");
            finished
                .line("let _ = err_tx.send(transaction_finished()).await;")
                .line("return;");
            finished.close_with(";");
            task.line("let mut rows = stmt.query().bind(value).fetch(&mut **tx);");
            let mut cursor = task.block("while let Some(row) = rows.next().await");
            let mut scanned = cursor.block(format!(
                "match row.and_then(|row| {}(&row))",
                self.scanner
            ));
            scanned
                .block("Ok(obj) =>")
                .block("if obj_tx.send(obj).await.is_err()")
                .line("break;");
            scanned
                .block("Err(err) =>")
                .block("if err_tx.send(err).await.is_err()")
                .line("break;");
            scanned.close();
            cursor.close();
            task.close_with(");");
        }
        body.line("(obj_rx, err_rx)");
    }
}
