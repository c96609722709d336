// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Transaction lifecycle: the factory on the Query record and the
//! completion methods on the transaction record.
//!
//! | Method | Receiver | Result |
//! |--------|----------|--------|
//! | `transaction` | `&FooQuery` | `FooQueryTx<'_>` borrowing the Query |
//! | `commit` | `FooQueryTx` by value | driver error verbatim |
//! | `rollback` | `FooQueryTx` by value | driver error verbatim |

use super::context::Context;
use crate::emit::CompoundStatement;

impl Context<'_> {
    /// Emit `transaction` inside the Query `impl` block.
    pub fn transaction_factory(&self, imp: &mut CompoundStatement<'_>) {
        imp.line("/// Begin a unit of work.");
        imp.line("///");
        imp.line("/// A failure to begin is returned unchanged.");
        let mut body = imp.block(format!(
            "pub async fn transaction(&self) -> Result<{}<'_>, sqlx::Error>",
            self.tx
        ));
        body.line("let tx = self.db.begin().await?;");
        body.line(format!(
            "Ok({} {{ tx: Arc::new(Mutex::new(Some(tx))), q: self }})",
            self.tx
        ));
    }

    /// Emit `commit` and `rollback` inside the transaction `impl` block.
    pub fn completion(&self, imp: &mut CompoundStatement<'_>) {
        for (method, doc) in [
            ("commit", "/// Commit the unit of work."),
            ("rollback", "/// Roll the unit of work back.")
        ] {
            imp.line(doc);
            imp.line("///");
            imp.line("/// Waits for any lookup still streaming rows on this transaction.");
            let mut body = imp.block(format!(
                "pub async fn {method}(self) -> Result<(), sqlx::Error>"
            ));
            body.line("let tx = self.tx.lock().await.take();");
            body.block("if let Some(tx) = tx")
                .line(format!("tx.{method}().await"))
                .close_and_reopen("else")
                .line("Err(transaction_finished())");
            body.close();
            imp.blank();
        }
    }
}
