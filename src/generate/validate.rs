// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement preparation routine.
//!
//! ```rust,ignore
//! pub async fn validate(db: PgPool) -> Result<Self, sqlx::Error> {
//!     let create = db.prepare("INSERT INTO foo(id,bar) VALUES($1,$2)").await?;
//!     let by_id = db.prepare("SELECT id,bar FROM foo WHERE id=$1").await?;
//!     ...
//!     Ok(Self { db, create, by_id, .. })
//! }
//! ```

use tracing::debug;

use super::context::{Context, literal};
use crate::emit::CompoundStatement;

impl Context<'_> {
    /// Emit `validate` inside the Query `impl` block.
    ///
    /// Statements are prepared in a fixed order (insert, selects in
    /// declaration order, update, delete) and the first failure is returned
    /// with `?`, so no Query value exists unless all of them succeeded.
    pub fn validate(&self, imp: &mut CompoundStatement<'_>) {
        imp.line("/// Prepare every statement against `db`.");
        imp.line("///");
        imp.line("/// The first preparation error is returned unchanged; the accessor is");
        imp.line("/// only usable when this succeeds.");
        if self.schema.non_key_fields().count() == 1
            && let Some(update) = &self.statements.update
        {
            imp.line("///");
            imp.line(format!("/// The update statement `{update}` sets a single column"));
            imp.line("/// through a parenthesized list. PostgreSQL 10 and later reject that");
            imp.line("/// form, so preparation fails there.");
        }
        let mut body = imp.block("pub async fn validate(db: PgPool) -> Result<Self, sqlx::Error>");

        let mut prepared: Vec<(String, &str)> = vec![("create".into(), self.statements.insert.as_str())];
        prepared.extend(self.lookups().map(|(field, sql)| (field.lookup_name(), sql)));
        if let Some(update) = &self.statements.update {
            prepared.push(("update".into(), update.as_str()));
        }
        prepared.push(("delete".into(), self.statements.delete.as_str()));

        for (name, sql) in &prepared {
            debug!(record = self.record, statement = %name, sql = %sql, "emitting statement");
            body.line(format!("let {name} = db.prepare({}).await?;", literal(sql)));
        }
        body.line(format!("Ok(Self {{ db, {} }})", self.statement_names().join(", ")));
    }
}
