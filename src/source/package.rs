// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source package loading and record lookup.

use std::{
    fs,
    path::{Path, PathBuf}
};

use darling::{FromDeriveInput, FromField, ast::Data};
use syn::{Attribute, DeriveInput, Ident, Item, Meta, Token, Type, punctuated::Punctuated};
use tracing::{debug, info};

use super::resolve::{UseMap, declared_type};
use crate::{
    error::{Error, SourceError},
    schema::{DeclaredField, RecordSchema, SchemaExtractor, TypeClassifier}
};

/// Record-level view used for shape validation.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(sqlgen), supports(struct_named))]
struct RecordInput {
    ident: Ident,
    data:  Data<(), FieldInput>
}

/// One named field and its `sqlgen(..)` options.
#[derive(Debug, FromField)]
#[darling(attributes(sqlgen))]
struct FieldInput {
    ident: Option<Ident>,
    ty:    Type,

    /// `#[cfg_attr(sqlgen, sqlgen(skip))]`: never persist this field.
    #[darling(default)]
    skip: bool
}

/// One parsed source file.
#[derive(Debug)]
struct SourceFile {
    path: PathBuf,
    ast:  syn::File
}

/// The parsed files of one module.
#[derive(Debug)]
pub struct Package {
    name:  String,
    dir:   PathBuf,
    files: Vec<SourceFile>
}

impl Package {
    /// Load a package.
    ///
    /// A single directory loads every `*.rs` file directly inside it, in
    /// file name order. Anything else is taken as a file list; entries
    /// without the `.rs` extension are ignored. An empty list means the
    /// current directory.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Io`] when a path cannot be read
    /// - [`SourceError::NoSourceFiles`] when nothing is left to parse
    /// - [`SourceError::Parse`] naming the first file that is not valid Rust
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, SourceError> {
        let paths: Vec<&Path> = paths.iter().map(AsRef::as_ref).collect();
        let (dir, files, name) = match paths.as_slice() {
            [] => {
                let dir = Path::new(".");
                (dir.to_path_buf(), list_dir(dir)?, dir_package_name(dir))
            }
            [only] if only.is_dir() => (only.to_path_buf(), list_dir(only)?, dir_package_name(only)),
            [first, ..] => {
                let files: Vec<PathBuf> = paths
                    .iter()
                    .filter(|p| p.extension().is_some_and(|ext| ext == "rs"))
                    .map(|p| p.to_path_buf())
                    .collect();
                let dir = match first.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                    _ => PathBuf::from(".")
                };
                let name = files
                    .first()
                    .map_or_else(|| dir_package_name(&dir), |f| file_package_name(f));
                (dir, files, name)
            }
        };

        if files.is_empty() {
            let path = paths.first().map_or_else(|| PathBuf::from("."), |p| p.to_path_buf());
            return Err(SourceError::NoSourceFiles { path });
        }

        let files = files
            .into_iter()
            .map(|path| {
                let text = fs::read_to_string(&path).map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source
                })?;
                let ast = syn::parse_file(&text).map_err(|source| SourceError::Parse {
                    path: path.clone(),
                    source
                })?;
                debug!(file = %path.display(), items = ast.items.len(), "parsed source file");
                Ok(SourceFile { path, ast })
            })
            .collect::<Result<Vec<_>, SourceError>>()?;

        info!(package = %name, dir = %dir.display(), files = files.len(), "loaded package");
        Ok(Self { name, dir, files })
    }

    /// A package made of one in-memory file.
    ///
    /// # Errors
    ///
    /// [`SourceError::Parse`] when `source` is not valid Rust.
    pub fn from_source(
        name: impl Into<String>,
        dir: impl Into<PathBuf>,
        source: &str
    ) -> Result<Self, SourceError> {
        let dir = dir.into();
        let path = dir.join("lib.rs");
        let ast = syn::parse_file(source).map_err(|source| SourceError::Parse {
            path: path.clone(),
            source
        })?;
        Ok(Self {
            name: name.into(),
            dir,
            files: vec![SourceFile { path, ast }]
        })
    }

    /// Module name of the package; `crate` for a crate root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory generated files are written to by default.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Declared fields of the top-level struct `type_name`, in declaration
    /// order, with skipped fields removed.
    ///
    /// Options are read from `#[cfg_attr(sqlgen, sqlgen(..))]`. The `sqlgen`
    /// cfg is never set for rustc, so the record still compiles without a
    /// registered `sqlgen` attribute.
    ///
    /// # Errors
    ///
    /// - [`SourceError::TypeNotFound`] when no file declares the struct
    /// - [`SourceError::UnsupportedShape`] for tuple or unit structs and
    ///   unknown `sqlgen(..)` options
    pub fn declared_fields(&self, type_name: &str) -> Result<Vec<DeclaredField>, SourceError> {
        let (file, item) = self
            .files
            .iter()
            .find_map(|file| {
                file.ast.items.iter().find_map(|item| match item {
                    Item::Struct(s) if s.ident == type_name => Some((file, s)),
                    _ => None
                })
            })
            .ok_or_else(|| SourceError::TypeNotFound {
                type_name: type_name.to_string(),
                package:   self.name.clone()
            })?;
        debug!(record = type_name, file = %file.path.display(), "found record");

        let mut item = item.clone();
        unguard(&mut item.attrs);
        for field in &mut item.fields {
            unguard(&mut field.attrs);
        }
        let input = DeriveInput::from(item);
        let record = RecordInput::from_derive_input(&input).map_err(|err| {
            SourceError::UnsupportedShape {
                type_name: type_name.to_string(),
                message:   err.to_string()
            }
        })?;
        let uses = UseMap::from_items(&file.ast.items);

        let fields = record
            .data
            .take_struct()
            .map(|fields| fields.fields)
            .unwrap_or_default();
        let mut declared = Vec::with_capacity(fields.len());
        for field in fields {
            let Some(ident) = field.ident else {
                continue;
            };
            let name = ident.to_string();
            if field.skip {
                debug!(record = %record.ident, field = %name, "skipping field marked sqlgen(skip)");
                continue;
            }
            declared.push(DeclaredField {
                names: vec![name],
                ty:    declared_type(&field.ty, &uses)
            });
        }
        Ok(declared)
    }

    /// Extract the schema of `type_name`.
    ///
    /// # Errors
    ///
    /// Lookup failures from [`Package::declared_fields`] and schema
    /// violations from [`SchemaExtractor::extract`].
    pub fn schema(&self, type_name: &str, classifier: &TypeClassifier) -> Result<RecordSchema, Error> {
        let declared = self.declared_fields(type_name)?;
        Ok(SchemaExtractor::new(classifier).extract(type_name, &self.name, &declared)?)
    }
}

/// Replace each `#[cfg_attr(sqlgen, a, b)]` with `#[a] #[b]`.
fn unguard(attrs: &mut Vec<Attribute>) {
    let mut out = Vec::with_capacity(attrs.len());
    for attr in attrs.drain(..) {
        match guarded(&attr) {
            Some(metas) => out.extend(metas.into_iter().map(|meta| Attribute {
                pound_token: attr.pound_token,
                style: attr.style,
                bracket_token: attr.bracket_token,
                meta
            })),
            None => out.push(attr)
        }
    }
    *attrs = out;
}

/// Attributes guarded by the bare `sqlgen` predicate.
fn guarded(attr: &Attribute) -> Option<Vec<Meta>> {
    if !attr.path().is_ident("cfg_attr") {
        return None;
    }
    let args = attr
        .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
        .ok()?;
    let mut args = args.into_iter();
    match args.next()? {
        Meta::Path(predicate) if predicate.is_ident("sqlgen") => Some(args.collect()),
        _ => None
    }
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let io = |source| SourceError::Io {
        path: dir.to_path_buf(),
        source
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io)? {
        let path = entry.map_err(io)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Module name of a directory: its own name, or `crate` for `src`.
fn dir_package_name(dir: &Path) -> String {
    let resolved = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    match resolved.file_name().and_then(|n| n.to_str()) {
        Some("src") | None => "crate".to_string(),
        Some(name) => name.to_string()
    }
}

/// Module name of a file: its stem, the directory for `mod.rs`, `crate`
/// for crate roots.
fn file_package_name(file: &Path) -> String {
    match file.file_stem().and_then(|s| s.to_str()) {
        Some("mod") => file
            .parent()
            .map_or_else(|| "crate".to_string(), dir_package_name),
        Some("lib" | "main") | None => "crate".to_string(),
        Some(stem) => stem.to_string()
    }
}
