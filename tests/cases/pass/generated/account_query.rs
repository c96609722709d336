//! Code generated by sqlgen from `crate::Account`. DO NOT EDIT.
//!
//! Include it as a child module of `crate`.
#![allow(unused_imports, clippy::single_component_path_imports)]
use std::sync::Arc;
use futures::StreamExt;
use sqlx::postgres::{PgPool, PgRow, PgStatement, Postgres};
use sqlx::{Executor, Row, Statement, Transaction};
use tokio::sync::{Mutex, mpsc};
use super::*;
use chrono;
/// Prepared statements for [`Account`] rows in table `account`.
///
/// Build with [`AccountQuery::validate`]; every unit of work starts with
/// [`AccountQuery::transaction`].
pub struct AccountQuery {
    db: PgPool,
    /// `INSERT INTO account(id,email,created) VALUES($1,$2,$3)`
    create: PgStatement<'static>,
    /// `SELECT id,email,created FROM account WHERE id=$1` (column `id BIGINT`)
    by_id: PgStatement<'static>,
    /// `SELECT id,email,created FROM account WHERE email=$1` (column `email VARCHAR`)
    by_email: PgStatement<'static>,
    /// `SELECT id,email,created FROM account WHERE created=$1` (column `created TIMESTAMP`)
    by_created: PgStatement<'static>,
    /// `UPDATE account SET (email,created)=($2,$3) WHERE id=$1`
    update: PgStatement<'static>,
    /// `DELETE FROM account WHERE id=$1`
    delete: PgStatement<'static>,
}
/// One transaction over [`AccountQuery`].
///
/// Finished by [`commit`](Self::commit) or [`rollback`](Self::rollback);
/// dropping it unfinished rolls the transaction back.
pub struct AccountQueryTx<'q> {
    tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
    q: &'q AccountQuery,
}
fn transaction_finished() -> sqlx::Error {
    sqlx::Error::Protocol("transaction already finished".into())
}
#[allow(clippy::field_reassign_with_default)]
fn scan_account(row: &PgRow) -> Result<Account, sqlx::Error> {
    let mut obj = Account::default();
    obj.id = row.try_get(0)?;
    obj.email = row.try_get(1)?;
    obj.created = row.try_get(2)?;
    Ok(obj)
}
impl AccountQuery {
    /// Prepare every statement against `db`.
    ///
    /// The first preparation error is returned unchanged; the accessor is
    /// only usable when this succeeds.
    pub async fn validate(db: PgPool) -> Result<Self, sqlx::Error> {
        let create = db
            .prepare("INSERT INTO account(id,email,created) VALUES($1,$2,$3)")
            .await?;
        let by_id = db
            .prepare("SELECT id,email,created FROM account WHERE id=$1")
            .await?;
        let by_email = db
            .prepare("SELECT id,email,created FROM account WHERE email=$1")
            .await?;
        let by_created = db
            .prepare("SELECT id,email,created FROM account WHERE created=$1")
            .await?;
        let update = db
            .prepare("UPDATE account SET (email,created)=($2,$3) WHERE id=$1")
            .await?;
        let delete = db.prepare("DELETE FROM account WHERE id=$1").await?;
        Ok(Self {
            db,
            create,
            by_id,
            by_email,
            by_created,
            update,
            delete,
        })
    }
    /// Begin a unit of work.
    ///
    /// A failure to begin is returned unchanged.
    pub async fn transaction(&self) -> Result<AccountQueryTx<'_>, sqlx::Error> {
        let tx = self.db.begin().await?;
        Ok(AccountQueryTx {
            tx: Arc::new(Mutex::new(Some(tx))),
            q: self,
        })
    }
}
impl<'q> AccountQueryTx<'q> {
    /// Fetch the [`Account`] whose `id` equals `value`.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] when there is no such row.
    pub async fn by_id(&self, value: i64) -> Result<Account, sqlx::Error> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(transaction_finished)?;
        let row = self.q.by_id.query().bind(value).fetch_one(&mut **tx).await?;
        scan_account(&row)
    }
    /// Stream every [`Account`] whose `email` equals `value`.
    ///
    /// Rows arrive on the first channel in cursor order and scan errors on
    /// the second; each holds at most 10 pending values. Both close once the
    /// rows are exhausted. The transaction stays locked until then, so a
    /// held but undrained receiver stalls every later call on it.
    pub async fn by_email(
        &self,
        value: String,
    ) -> (mpsc::Receiver<Account>, mpsc::Receiver<sqlx::Error>) {
        let (obj_tx, obj_rx) = mpsc::channel(10);
        let (err_tx, err_rx) = mpsc::channel(10);
        let guard = Arc::clone(&self.tx).lock_owned().await;
        let stmt = self.q.by_email.clone();
        tokio::spawn(async move {
            let mut guard = guard;
            let Some(tx) = guard.as_mut() else {
                let _ = err_tx.send(transaction_finished()).await;
                return;
            };
            let mut rows = stmt.query().bind(value).fetch(&mut **tx);
            while let Some(row) = rows.next().await {
                match row.and_then(|row| scan_account(&row)) {
                    Ok(obj) => {
                        if obj_tx.send(obj).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        if err_tx.send(err).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });
        (obj_rx, err_rx)
    }
    /// Stream every [`Account`] whose `created` equals `value`.
    ///
    /// Rows arrive on the first channel in cursor order and scan errors on
    /// the second; each holds at most 10 pending values. Both close once the
    /// rows are exhausted. The transaction stays locked until then, so a
    /// held but undrained receiver stalls every later call on it.
    pub async fn by_created(
        &self,
        value: chrono::NaiveDateTime,
    ) -> (mpsc::Receiver<Account>, mpsc::Receiver<sqlx::Error>) {
        let (obj_tx, obj_rx) = mpsc::channel(10);
        let (err_tx, err_rx) = mpsc::channel(10);
        let guard = Arc::clone(&self.tx).lock_owned().await;
        let stmt = self.q.by_created.clone();
        tokio::spawn(async move {
            let mut guard = guard;
            let Some(tx) = guard.as_mut() else {
                let _ = err_tx.send(transaction_finished()).await;
                return;
            };
            let mut rows = stmt.query().bind(value).fetch(&mut **tx);
            while let Some(row) = rows.next().await {
                match row.and_then(|row| scan_account(&row)) {
                    Ok(obj) => {
                        if obj_tx.send(obj).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        if err_tx.send(err).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });
        (obj_rx, err_rx)
    }
    /// Insert `obj` as a new row of `account`.
    pub async fn create(&self, obj: &Account) -> Result<(), sqlx::Error> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(transaction_finished)?;
        self.q
            .create
            .query()
            .bind(&obj.id)
            .bind(&obj.email)
            .bind(&obj.created)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }
    /// Overwrite the non-key columns of the row whose `id` matches `obj`.
    ///
    /// Returns the number of rows affected.
    pub async fn update(&self, obj: &Account) -> Result<u64, sqlx::Error> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(transaction_finished)?;
        let done = self
            .q
            .update
            .query()
            .bind(&obj.id)
            .bind(&obj.email)
            .bind(&obj.created)
            .execute(&mut **tx)
            .await?;
        Ok(done.rows_affected())
    }
    /// Delete the row whose `id` matches `obj`.
    ///
    /// Returns the number of rows affected.
    pub async fn delete(&self, obj: &Account) -> Result<u64, sqlx::Error> {
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
