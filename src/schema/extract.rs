// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema extraction.
//!
//! Turns the declared fields of one record type, as reported by the
//! symbol-resolution collaborator, into a [`RecordSchema`].
//!
//! # Rules
//!
//! | Input | Outcome |
//! |-------|---------|
//! | type classifies as Unknown | skipped, logged |
//! | more than one name bound to the type | skipped, logged |
//! | qualified reference with a known type | accepted, module imported |
//! | second field named `id` (any case) | [`SchemaError::MultiplePrimaryKeys`] |
//! | nothing accepted | [`SchemaError::NoFields`] |

use std::{collections::BTreeSet, fmt};

use tracing::{debug, warn};

use super::{
    classify::{GenericCategory, TypeClassifier},
    field::FieldSpec,
    record::RecordSchema
};
use crate::error::SchemaError;

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// A type named without a module path (`i64`, `String`).
    Simple(String),

    /// A type defined in another module (`chrono::NaiveDateTime`).
    Qualified {
        /// Qualifying module path (`chrono`, `std::time`).
        module: String,
        /// Type name within the module, generic arguments included.
        name:   String
    }
}

impl DeclaredType {
    /// Key used for the classifier lookup and in generated signatures.
    #[must_use]
    pub fn lookup_key(&self) -> String {
        match self {
            Self::Simple(name) => name.clone(),
            Self::Qualified { module, name } => format!("{module}::{name}")
        }
    }

    /// Module that must be imported, if any.
    #[must_use]
    pub fn module(&self) -> Option<&str> {
        match self {
            Self::Simple(_) => None,
            Self::Qualified { module, .. } => Some(module)
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lookup_key())
    }
}

/// One field declaration of the target record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredField {
    /// Names bound by the declaration. Exactly one is supported.
    pub names: Vec<String>,

    /// Declared type.
    pub ty: DeclaredType
}

impl DeclaredField {
    /// A declaration binding one name to a simple type.
    pub fn simple(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            ty:    DeclaredType::Simple(ty.into())
        }
    }

    /// A declaration binding one name to a type from another module.
    pub fn qualified(
        name: impl Into<String>,
        module: impl Into<String>,
        ty: impl Into<String>
    ) -> Self {
        Self {
            names: vec![name.into()],
            ty:    DeclaredType::Qualified {
                module: module.into(),
                name:   ty.into()
            }
        }
    }
}

/// Builds [`RecordSchema`]s from declared fields.
#[derive(Debug, Clone, Copy)]
pub struct SchemaExtractor<'c> {
    classifier: &'c TypeClassifier
}

impl<'c> SchemaExtractor<'c> {
    /// Create an extractor over an injected classifier.
    #[must_use]
    pub const fn new(classifier: &'c TypeClassifier) -> Self {
        Self { classifier }
    }

    /// Extract the schema of `type_name` from its declared fields.
    ///
    /// Declaration order is preserved.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::MultiplePrimaryKeys`] when a second key is accepted
    /// - [`SchemaError::NoFields`] when every field was skipped
    pub fn extract(
        &self,
        type_name: &str,
        package_name: &str,
        declared: &[DeclaredField]
    ) -> Result<RecordSchema, SchemaError> {
        let mut fields: Vec<FieldSpec> = Vec::with_capacity(declared.len());
        let mut imports = BTreeSet::new();

        for decl in declared {
            let key = decl.ty.lookup_key();
            let category = self.classifier.classify(&key);
            let Some(column_type) = self.classifier.default_column_type(category) else {
                warn!(
                    record = type_name,
                    fields = ?decl.names,
                    ty = %key,
                    "skipping field of unrecognized type"
                );
                continue;
            };

            let [name] = decl.names.as_slice() else {
                warn!(
                    record = type_name,
                    fields = ?decl.names,
                    ty = %key,
                    "skipping declaration binding several names to one type"
                );
                continue;
            };

            let field = FieldSpec::new(name.as_str(), key.as_str(), category, column_type);
            if field.is_primary_key
                && let Some(first) = fields.iter().find(|f| f.is_primary_key)
            {
                return Err(SchemaError::MultiplePrimaryKeys {
                    type_name: type_name.to_string(),
                    first:     first.source_name.clone(),
                    second:    field.source_name
                });
            }

            if let Some(module) = decl.ty.module() {
                imports.insert(module.to_string());
            }
            debug!(
                record = type_name,
                field = %field.source_name,
                column = %field.column_name,
                column_type = %field.column_type,
                primary_key = field.is_primary_key,
                "accepted field"
            );
            fields.push(field);
        }

        if fields.is_empty() {
            return Err(SchemaError::NoFields {
                type_name: type_name.to_string()
            });
        }

        debug_assert!(fields.iter().all(|f| f.category != GenericCategory::Unknown));
        Ok(RecordSchema::new(type_name, package_name, fields, imports))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn extract(declared: &[DeclaredField]) -> Result<RecordSchema, SchemaError> {
        let classifier = TypeClassifier::default();
        SchemaExtractor::new(&classifier).extract("Foo", "models", declared)
    }

    #[test]
    fn preserves_declaration_order() {
        let schema = extract(&[
            DeclaredField::simple("Id", "i64"),
            DeclaredField::simple("Bar", "String"),
            DeclaredField::simple("Baz", "String")
        ])
        .unwrap();
        let names: Vec<_> = schema.fields.iter().map(|f| f.column_name.as_str()).collect();
        assert_eq!(names, ["id", "bar", "baz"]);
        assert_eq!(schema.table_name, "foo");
        assert_eq!(schema.package_name, "models");
        assert!(schema.fields[0].is_primary_key);
        assert_eq!(schema.fields[1].column_type, ColumnType::Varchar);
    }

    #[test]
    fn unknown_types_are_skipped() {
        let schema = extract(&[
            DeclaredField::simple("Id", "i64"),
            DeclaredField::simple("Type2Ptr", "Box<Type2>"),
            DeclaredField::simple("Type3Obj", "Type3"),
            DeclaredField::simple("Bar", "String")
        ])
        .unwrap();
        let names: Vec<_> = schema.fields.iter().map(|f| f.source_name.as_str()).collect();
        assert_eq!(names, ["Id", "Bar"]);
    }

    #[test]
    fn qualified_reference_records_import() {
        let schema = extract(&[
            DeclaredField::simple("Id", "i64"),
            DeclaredField::qualified("Created", "chrono", "NaiveDateTime"),
            DeclaredField::qualified("Updated", "chrono", "NaiveDateTime")
        ])
        .unwrap();
        assert_eq!(schema.fields[1].source_type, "chrono::NaiveDateTime");
        assert_eq!(schema.fields[1].column_type, ColumnType::Timestamp);
        assert_eq!(
            schema.additional_imports.iter().collect::<Vec<_>>(),
            ["chrono"]
        );
    }

    #[test]
    fn unknown_qualified_reference_adds_no_import() {
        let schema = extract(&[
            DeclaredField::simple("Id", "i64"),
            DeclaredField::qualified("Owner", "crate::users", "User")
        ])
        .unwrap();
        assert_eq!(schema.fields.len(), 1);
        assert!(schema.additional_imports.is_empty());
    }

    #[test]
    fn multi_name_declarations_are_skipped() {
        let schema = extract(&[
            DeclaredField::simple("Id", "i64"),
            DeclaredField {
                names: vec!["a".into(), "b".into()],
                ty:    DeclaredType::Simple("String".into())
            }
        ])
        .unwrap();
        assert_eq!(schema.fields.len(), 1);
    }

    #[test]
    fn second_primary_key_is_fatal() {
        let err = extract(&[
            DeclaredField::simple("id", "i64"),
            DeclaredField::simple("Name", "String"),
            DeclaredField::simple("ID", "i32")
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::MultiplePrimaryKeys {
                type_name: "Foo".into(),
                first:     "id".into(),
                second:    "ID".into()
            }
        );
    }

    #[test]
    fn nothing_recognized_is_fatal() {
        let err = extract(&[DeclaredField::simple("Flag", "bool")]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::NoFields {
                type_name: "Foo".into()
            }
        );
    }

    #[test]
    fn declared_type_display() {
        let ty = DeclaredType::Qualified {
            module: "time".into(),
            name:   "OffsetDateTime".into()
        };
        assert_eq!(ty.to_string(), "time::OffsetDateTime");
        assert_eq!(ty.module(), Some("time"));
        assert_eq!(DeclaredType::Simple("i64".into()).module(), None);
    }
}
