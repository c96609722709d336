// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field type resolution.
//!
//! A field type is rendered without insignificant whitespace and split into
//! module and type name when it names a type from another module.
//!
//! | Declaration | Result |
//! |-------------|--------|
//! | `i64` | `Simple("i64")` |
//! | `chrono::NaiveDateTime` | `Qualified { module: "chrono", name: "NaiveDateTime" }` |
//! | `NaiveDateTime` with `use chrono::NaiveDateTime;` | same as above |
//! | `Ts` with `use time::OffsetDateTime as Ts;` | `Qualified { module: "time", name: "OffsetDateTime" }` |
//! | `Option<i64>`, `&str`, `[u8; 4]` | `Simple(..)`, classified Unknown later |

use std::collections::HashMap;

use quote::ToTokens;
use syn::{Item, Type, UseTree};

use crate::schema::DeclaredType;

/// Names brought into scope by the `use` items of one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UseMap {
    paths: HashMap<String, String>
}

impl UseMap {
    /// Collect the single-name imports of `items`. Glob imports are ignored.
    #[must_use]
    pub fn from_items(items: &[Item]) -> Self {
        let mut map = Self::default();
        for item in items {
            if let Item::Use(item) = item {
                map.walk(&item.tree, String::new());
            }
        }
        map
    }

    /// Full path imported under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.paths.get(name).map(String::as_str)
    }

    fn walk(&mut self, tree: &UseTree, prefix: String) {
        let join = |segment: &str| {
            if prefix.is_empty() {
                segment.to_string()
            } else {
                format!("{prefix}::{segment}")
            }
        };
        match tree {
            UseTree::Path(path) => self.walk(&path.tree, join(&path.ident.to_string())),
            UseTree::Name(name) => {
                let ident = name.ident.to_string();
                if ident != "self" {
                    self.paths.insert(ident.clone(), join(&ident));
                }
            }
            UseTree::Rename(rename) => {
                if rename.ident != "self" {
                    self.paths
                        .insert(rename.rename.to_string(), join(&rename.ident.to_string()));
                }
            }
            UseTree::Group(group) => {
                for tree in &group.items {
                    self.walk(tree, prefix.clone());
                }
            }
            UseTree::Glob(_) => {}
        }
    }
}

/// Resolve a declared field type against the imports of its file.
#[must_use]
pub fn declared_type(ty: &Type, uses: &UseMap) -> DeclaredType {
    let Type::Path(path) = ty else {
        return DeclaredType::Simple(compact(ty));
    };
    if path.qself.is_some() {
        return DeclaredType::Simple(compact(ty));
    }

    let segments: Vec<String> = path.path.segments.iter().map(compact).collect();
    match segments.as_slice() {
        [] => DeclaredType::Simple(compact(ty)),
        [single] => {
            let last = &path.path.segments[0];
            let ident = last.ident.to_string();
            match uses.get(&ident).and_then(|full| full.rsplit_once("::")) {
                Some((module, imported)) => DeclaredType::Qualified {
                    module: module.to_string(),
                    name:   format!("{imported}{}", &single[ident.len()..])
                },
                None => DeclaredType::Simple(single.clone())
            }
        }
        [module @ .., name] => DeclaredType::Qualified {
            module: module.join("::"),
            name:   name.clone()
        }
    }
}

/// Render tokens, keeping a space only between two word characters.
fn compact(tokens: &impl ToTokens) -> String {
    let rendered = tokens.to_token_stream().to_string();
    let mut out = String::with_capacity(rendered.len());
    let mut pending_space = false;
    for c in rendered.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && is_word(c) && out.chars().next_back().is_some_and(is_word) {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}
