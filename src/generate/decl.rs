// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type declarations and private helpers.
//!
//! | Item | Shape |
//! |------|-------|
//! | Query record | `FooQuery { db, create, by_<field>.., update, delete }` |
//! | Transaction record | `FooQueryTx<'q> { tx, q: &'q FooQuery }` |
//! | `transaction_finished` | error for calls after commit or rollback |
//! | Row scanner | `scan_foo(&PgRow) -> Result<Foo, sqlx::Error>` |

use super::context::Context;
use crate::emit::SourceEmitter;

impl Context<'_> {
    /// Emit the Query and QueryTransaction records.
    pub fn declarations(&self, out: &mut SourceEmitter) {
        out.line(format!(
            "/// Prepared statements for [`{}`] rows in table `{}`.",
            self.record, self.schema.table_name
        ));
        out.line("///");
        out.line(format!(
            "/// Build with [`{}::validate`]; every unit of work starts with",
            self.query
        ));
        out.line(format!("/// [`{}::transaction`].", self.query));
        {
            let mut decl = out.block(format!("pub struct {}", self.query));
            decl.line("db: PgPool,");
            decl.line(format!("/// `{}`", self.statements.insert));
            decl.line("create: PgStatement<'static>,");
            for (field, sql) in self.lookups() {
                decl.line(format!(
                    "/// `{sql}` (column `{} {}`)",
                    field.column_name, field.column_type
                ));
                decl.line(format!("{}: PgStatement<'static>,", field.lookup_name()));
            }
            if let Some(update) = &self.statements.update {
                decl.line(format!("/// `{update}`"));
                decl.line("update: PgStatement<'static>,");
            }
            decl.line(format!("/// `{}`", self.statements.delete));
            decl.line("delete: PgStatement<'static>,");
        }
        out.blank();

        out.line(format!("/// One transaction over [`{}`].", self.query));
        out.line("///");
        out.line("/// Finished by [`commit`](Self::commit) or [`rollback`](Self::rollback);");
        out.line("/// dropping it unfinished rolls the transaction back.");
        {
            let mut decl = out.block(format!("pub struct {}<'q>", self.tx));
            decl.line("tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,");
            decl.line(format!("q: &'q {},", self.query));
        }
        out.blank();
    }

    /// Emit the private helpers shared by the methods.
    pub fn helpers(&self, out: &mut SourceEmitter) {
        out.block("fn transaction_finished() -> sqlx::Error")
            .line("sqlx::Error::Protocol(\"transaction already finished\".into())");
        out.blank();

        out.line("#[allow(clippy::field_reassign_with_default)]");
        let mut scan = out.block(format!(
            "fn {}(row: &PgRow) -> Result<{}, sqlx::Error>",
            self.scanner, self.record
        ));
        scan.line(format!("let mut obj = {}::default();", self.record));
        for (index, field) in self.schema.fields.iter().enumerate() {
            scan.line(format!("obj.{} = row.try_get({index})?;", field.source_name));
        }
        scan.line("Ok(obj)");
        scan.close();
        out.blank();
    }
}
