//! Code generated by sqlgen from `crate::Tag`. DO NOT EDIT.
//!
//! Include it as a child module of `crate`.
#![allow(unused_imports, clippy::single_component_path_imports)]
use std::sync::Arc;
use futures::StreamExt;
use sqlx::postgres::{PgPool, PgRow, PgStatement, Postgres};
use sqlx::{Executor, Row, Statement, Transaction};
use tokio::sync::{Mutex, mpsc};
use super::*;
/// Prepared statements for [`Tag`] rows in table `tag`.
///
/// Build with [`TagQuery::validate`]; every unit of work starts with
/// [`TagQuery::transaction`].
pub struct TagQuery {
    db: PgPool,
    /// `INSERT INTO tag(id) VALUES($1)`
    create: PgStatement<'static>,
    /// `SELECT id FROM tag WHERE id=$1` (column `id BIGINT`)
    by_id: PgStatement<'static>,
    /// `DELETE FROM tag WHERE id=$1`
    delete: PgStatement<'static>,
}
/// One transaction over [`TagQuery`].
///
/// Finished by [`commit`](Self::commit) or [`rollback`](Self::rollback);
/// dropping it unfinished rolls the transaction back.
pub struct TagQueryTx<'q> {
    tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
    q: &'q TagQuery,
}
fn transaction_finished() -> sqlx::Error {
    sqlx::Error::Protocol("transaction already finished".into())
}
#[allow(clippy::field_reassign_with_default)]
fn scan_tag(row: &PgRow) -> Result<Tag, sqlx::Error> {
    let mut obj = Tag::default();
    obj.id = row.try_get(0)?;
    Ok(obj)
}
impl TagQuery {
    /// Prepare every statement against `db`.
    ///
    /// The first preparation error is returned unchanged; the accessor is
    /// only usable when this succeeds.
    pub async fn validate(db: PgPool) -> Result<Self, sqlx::Error> {
        let create = db.prepare("INSERT INTO tag(id) VALUES($1)").await?;
        let by_id = db.prepare("SELECT id FROM tag WHERE id=$1").await?;
        let delete = db.prepare("DELETE FROM tag WHERE id=$1").await?;
        Ok(Self { db, create, by_id, delete })
    }
    /// Begin a unit of work.
    ///
    /// A failure to begin is returned unchanged.
    pub async fn transaction(&self) -> Result<TagQueryTx<'_>, sqlx::Error> {
        let tx = self.db.begin().await?;
        Ok(TagQueryTx {
            tx: Arc::new(Mutex::new(Some(tx))),
            q: self,
        })
    }
}
impl<'q> TagQueryTx<'q> {
    /// Fetch the [`Tag`] whose `id` equals `value`.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] when there is no such row.
    pub async fn by_id(&self, value: i32) -> Result<Tag, sqlx::Error> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(transaction_finished)?;
        let row = self.q.by_id.query().bind(value).fetch_one(&mut **tx).await?;
        scan_tag(&row)
    }
    /// Insert `obj` as a new row of `tag`.
    pub async fn create(&self, obj: &Tag) -> Result<(), sqlx::Error> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(transaction_finished)?;
        self.q.create.query().bind(&obj.id).execute(&mut **tx).await?;
        Ok(())
    }
    /// Delete the row whose `id` matches `obj`.
    ///
    /// Returns the number of rows affected.
    pub async fn delete(&self, obj: &Tag) -> Result<u64, sqlx::Error> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(transaction_finished)?;
        let done = self.q.delete.query().bind(&obj.id).execute(&mut **tx).await?;
        Ok(done.rows_affected())
    }
    /// Commit the unit of work.
    ///
    /// Waits for any lookup still streaming rows on this transaction.
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        let tx = self.tx.lock().await.take();
        if let Some(tx) = tx { tx.commit().await } else { Err(transaction_finished()) }
    }
    /// Roll the unit of work back.
    ///
    /// Waits for any lookup still streaming rows on this transaction.
    pub async fn rollback(self) -> Result<(), sqlx::Error> {
        let tx = self.tx.lock().await.take();
        if let Some(tx) = tx { tx.rollback().await } else { Err(transaction_finished()) }
    }
}
