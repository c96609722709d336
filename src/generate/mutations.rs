// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mutation methods on the transaction record.
//!
//! | Method | Binds | Returns |
//! |--------|-------|---------|
//! | `create` | every field, declared order | `()` |
//! | `update` | every field, declared order | rows affected |
//! | `delete` | primary key | rows affected |
//!
//! `update` is not generated for a record whose only column is its key.

use super::context::Context;
use crate::{emit::CompoundStatement, schema::FieldSpec};

impl Context<'_> {
    /// Emit `create`, `update` and `delete`.
    pub fn mutations(&self, imp: &mut CompoundStatement<'_>) {
        let all: Vec<&FieldSpec> = self.schema.fields.iter().collect();

        imp.line(format!("/// Insert `obj` as a new row of `{}`.", self.schema.table_name));
        self.mutation(imp, "create", &all, false);
        imp.blank();

        if self.statements.update.is_some() {
            imp.line(format!(
                "/// Overwrite the non-key columns of the row whose `{}` matches `obj`.",
                self.pk.column_name
            ));
            imp.line("///");
            imp.line("/// Returns the number of rows affected.");
            self.mutation(imp, "update", &all, true);
            imp.blank();
        }

        imp.line(format!(
            "/// Delete the row whose `{}` matches `obj`.",
            self.pk.column_name
        ));
        imp.line("///");
        imp.line("/// Returns the number of rows affected.");
        self.mutation(imp, "delete", &[self.pk], true);
        imp.blank();
    }

    fn mutation(
        &self,
        imp: &mut CompoundStatement<'_>,
        name: &str,
        binds: &[&FieldSpec],
        counted: bool
    ) {
        let output = if counted { "u64" } else { "()" };
        let mut body = imp.block(format!(
            "pub async fn {name}(&self, obj: &{}) -> Result<{output}, sqlx::Error>",
            self.record
        ));
        body.line("let mut guard = self.tx.lock().await;");
        body.line("let tx = guard.as_mut().ok_or_else(transaction_finished)?;");
        let bindings: String = binds
            .iter()
            .map(|f| format!(".bind(&obj.{})", f.source_name))
            .collect();
        let execute = format!("self.q.{name}.query(){bindings}.execute(&mut **tx).await?");
        if counted {
            body.line(format!("let done = {execute};"));
            body.line("Ok(done.rows_affected())");
        } else {
            body.line(format!("{execute};"));
            body.line("Ok(())");
        }
    }
}
