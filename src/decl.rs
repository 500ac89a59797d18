//! Raw schema declarations (serde-facing).
//!
//! This layer parses schema documents and interprets nothing: constraint
//! annotations stay as raw JSON objects until extraction runs during
//! synthesis. Validation and reference resolution live in `schema`.

use serde::Deserialize;
use serde_json::Value;

/// One raw constraint annotation, exactly as declared. Arbitrary keys are
/// allowed here; the extractor decides what it recognizes.
pub type RawAnnotation = serde_json::Map<String, Value>;

/// A schema document: an ordered list of named schema declarations.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaFile {
    pub schemas: Vec<SchemaDecl>,
}

/// One named schema: either a record with ordered fields, or a root alias
/// wrapping a single type.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaDecl {
    Record {
        name: String,
        fields: Vec<FieldDecl>,
    },
    Root {
        name: String,
        root: TypeDecl,
        #[serde(default)]
        constraints: Vec<RawAnnotation>,
    },
}

impl SchemaDecl {
    pub fn name(&self) -> &str {
        match self {
            SchemaDecl::Record { name, .. } => name,
            SchemaDecl::Root { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDecl,
    #[serde(default)]
    pub constraints: Vec<RawAnnotation>,
}

/// Declared type, internally tagged on `"kind"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDecl {
    Bool,
    Integer,
    Float,
    Text,
    Any,
    Null,
    Optional {
        of: Box<TypeDecl>,
    },
    Enum {
        members: Vec<EnumMemberDecl>,
    },
    Record {
        schema: String,
    },
    List {
        /// Absent `of` means an untyped list.
        #[serde(default)]
        of: Option<Box<TypeDecl>>,
    },
    Map {
        of: Box<TypeDecl>,
    },
    Tuple {
        of: Vec<TypeDecl>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumMemberDecl {
    pub name: String,
    pub value: Value,
}

// ————————————————————————————————————————————————————————————————————————————
// LOADING
// ————————————————————————————————————————————————————————————————————————————

/// Deserialize a schema document with JSON-path context in error messages.
pub fn from_str_with_path(src: &str) -> Result<SchemaFile, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, SchemaFile>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}

/// Same, for a document already parsed into a JSON value (e.g. selected out
/// of a larger file via a JSON Pointer).
pub fn from_value_with_path(value: Value) -> Result<SchemaFile, String> {
    match serde_path_to_error::deserialize::<Value, SchemaFile>(value) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_root_declarations_parse() {
        let src = r#"{
            "schemas": [
                { "name": "Address", "fields": [
                    { "name": "city", "type": { "kind": "text" } },
                    { "name": "zip", "type": { "kind": "integer" },
                      "constraints": [ { "gt": 10000, "lt": 99999 } ] }
                ] },
                { "name": "Addresses",
                  "root": { "kind": "list", "of": { "kind": "record", "schema": "Address" } } }
            ]
        }"#;
        let file = from_str_with_path(src).unwrap();
        assert_eq!(file.schemas.len(), 2);
        assert_eq!(file.schemas[0].name(), "Address");
        assert_eq!(file.schemas[1].name(), "Addresses");
        match &file.schemas[0] {
            SchemaDecl::Record { fields, .. } => {
                assert_eq!(fields.len(), 2);
                assert!(fields[0].constraints.is_empty());
                assert_eq!(fields[1].constraints.len(), 1);
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn bare_list_parses_without_element_type() {
        let src = r#"{
            "schemas": [
                { "name": "Bag", "fields": [
                    { "name": "stuff", "type": { "kind": "list" } }
                ] }
            ]
        }"#;
        let file = from_str_with_path(src).unwrap();
        match &file.schemas[0] {
            SchemaDecl::Record { fields, .. } => {
                assert!(matches!(fields[0].ty, TypeDecl::List { of: None }));
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn parse_errors_carry_a_json_path() {
        // `fields` must be an array; the error should point at it
        let src = r#"{ "schemas": [ { "name": "X", "fields": 7 } ] }"#;
        let err = from_str_with_path(src).unwrap_err();
        assert!(err.contains("at JSON path"), "got: {err}");
    }
}
