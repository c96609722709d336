// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structured source emission.
//!
//! A small writer for brace-delimited languages. It knows about lines,
//! indentation and `{ }` blocks and nothing else.
//!
//! # Architecture
//!
//! ```text
//! SourceEmitter ──block()──► CompoundStatement<'_>
//!                                 │
//!                                 ├── line() / blank()
//!                                 ├── block() ──► CompoundStatement<'_> (nested)
//!                                 ├── close_and_reopen("else")
//!                                 └── close() / close_with(");") / drop
//!
//! SourceEmitter::format(&dyn Formatter) ──► PrettyPlease (syn + prettyplease)
//! ```
//!
//! Each open block is a handle that mutably borrows its parent, so blocks
//! are closed in LIFO order and never twice. Dropping a handle closes its
//! block.
//!
//! # Example
//!
//! ```
//! use sqlgen::emit::SourceEmitter;
//!
//! let mut out = SourceEmitter::new();
//! {
//!     let mut f = out.block("fn sign(x: i64) -> i64");
//!     f.block("if x < 0").line("-1").close_and_reopen("else").line("1");
//! }
//! assert_eq!(
//!     out.as_str(),
//!     "fn sign(x: i64) -> i64 {\n    if x < 0 {\n        -1\n    } else {\n        1\n    }\n}\n"
//! );
//! ```

mod compound;
mod format;
mod writer;

pub use compound::CompoundStatement;
pub use format::{Formatter, PrettyPlease};
pub use writer::SourceEmitter;
