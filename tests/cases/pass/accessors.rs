// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated accessors compile against sqlx, tokio and futures.
//!
//! `tests/compile.rs` writes `generated/*.rs` from the records below before
//! this file is built.

#![allow(dead_code, unexpected_cfgs)]

use chrono::NaiveDateTime;
use sqlx::PgPool;

#[derive(Debug, Default)]
pub struct Account {
    pub id:            i64,
    pub email:         String,
    pub created:       NaiveDateTime,
    #[cfg_attr(sqlgen, sqlgen(skip))]
    pub password_hash: String,
    pub flags:         u32
}

#[derive(Debug, Default)]
pub struct Tag {
    pub id: i32
}

#[path = "generated/account_query.rs"]
mod account_query;
#[path = "generated/tag_query.rs"]
mod tag_query;

use account_query::{AccountQuery, AccountQueryTx};
use tag_query::TagQuery;

async fn accounts(pool: PgPool, account: Account) -> Result<(), sqlx::Error> {
    let query = AccountQuery::validate(pool).await?;
    let tx: AccountQueryTx<'_> = query.transaction().await?;
    tx.create(&account).await?;
    let found: Account = tx.by_id(account.id).await?;

    let (mut rows, mut errors) = tx.by_email(found.email).await;
    while let Some(row) = rows.recv().await {
        let _: NaiveDateTime = row.created;
    }
    if let Some(err) = errors.recv().await {
        return Err(err);
    }
    let (_rows, _errors) = tx.by_created(account.created).await;

    let updated: u64 = tx.update(&account).await?;
    let deleted: u64 = tx.delete(&account).await?;
    assert!(updated <= 1 && deleted <= 1);
    tx.commit().await
}

async fn tags(pool: PgPool) -> Result<(), sqlx::Error> {
    let query = TagQuery::validate(pool).await?;
    let tx = query.transaction().await?;
    tx.create(&Tag { id: 1 }).await?;
    let tag: Tag = tx.by_id(1).await?;
    tx.delete(&tag).await?;
    tx.rollback().await
}

fn main() {
    fn spawnable<F: std::future::Future + Send + 'static>(_: fn(PgPool) -> F) {}
    spawnable(tags);
    let _ = accounts;
}
