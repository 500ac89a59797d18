//! Resolved schema model and registry.
//!
//! Lowers raw `decl` documents into a validated `SchemaSet`:
//! - schema names are unique,
//! - every schema reference resolves inside the set,
//! - enumerations are non-empty.
//!
//! Declaration order is preserved end to end (IndexMap for the registry,
//! Vec for fields) so generated records keep it.

use indexmap::IndexMap;
use serde_json::Value;

use crate::decl::{self, RawAnnotation};

// ------------------------------- Errors ----------------------------------- //

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to parse schema document: {0}")]
    Parse(String),

    #[error("duplicate schema name `{0}`")]
    Duplicate(String),

    #[error("schema `{schema}` references undeclared schema `{reference}`")]
    UnresolvedRef { schema: String, reference: String },

    #[error("schema `{0}` declares an enumeration with no members")]
    EmptyEnum(String),
}

// ------------------------------- Model ------------------------------------ //

#[derive(Debug, Clone)]
pub enum Schema {
    Record(RecordSchema),
    Root(RootSchema),
}

impl Schema {
    pub fn name(&self) -> &str {
        match self {
            Schema::Record(r) => &r.name,
            Schema::Root(r) => &r.name,
        }
    }
}

/// A record: named, ordered fields.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<Field>,
}

/// A root alias: one wrapped type standing for a single value.
#[derive(Debug, Clone)]
pub struct RootSchema {
    pub name: String,
    pub shape: TypeShape,
    pub annotations: Vec<RawAnnotation>,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub shape: TypeShape,
    pub annotations: Vec<RawAnnotation>,
}

/// The kind of a declared type. Shapes nest arbitrarily; `Named` points back
/// into the owning `SchemaSet`.
#[derive(Debug, Clone)]
pub enum TypeShape {
    Optional(Box<TypeShape>),
    Named(String),
    Enum(Vec<EnumMember>),        // non-empty after resolution
    List(Option<Box<TypeShape>>), // None: untyped list
    Map(Box<TypeShape>),          // keys are text
    Tuple(Vec<TypeShape>),
    Bool,
    Integer,
    Float,
    Text,
    Any,
    Null,
}

#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: String,
    pub value: Value,
}

// ------------------------------- Registry --------------------------------- //

/// The resolved, validated registry of named schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    schemas: IndexMap<String, Schema>,
}

impl SchemaSet {
    /// Parse and resolve a schema document in one step.
    pub fn from_str(src: &str) -> Result<Self, SchemaError> {
        let file = decl::from_str_with_path(src).map_err(SchemaError::Parse)?;
        Self::from_file(file)
    }

    pub fn from_file(file: decl::SchemaFile) -> Result<Self, SchemaError> {
        Self::from_decls(file.schemas)
    }

    /// Resolve a batch of declarations (possibly gathered from several
    /// documents; references may cross document boundaries).
    pub fn from_decls(decls: Vec<decl::SchemaDecl>) -> Result<Self, SchemaError> {
        let mut schemas = IndexMap::with_capacity(decls.len());
        for d in decls {
            let schema = lower_schema(d)?;
            let name = schema.name().to_string();
            if schemas.contains_key(&name) {
                return Err(SchemaError::Duplicate(name));
            }
            schemas.insert(name, schema);
        }
        let set = SchemaSet { schemas };
        set.check_references()?;
        Ok(set)
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    /// Last declared schema (the CLI's default sampling target).
    pub fn last(&self) -> Option<&Schema> {
        self.schemas.values().last()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    fn check_references(&self) -> Result<(), SchemaError> {
        for (name, schema) in &self.schemas {
            match schema {
                Schema::Record(rec) => {
                    for field in &rec.fields {
                        self.check_shape(name, &field.shape)?;
                    }
                }
                Schema::Root(root) => self.check_shape(name, &root.shape)?,
            }
        }
        Ok(())
    }

    fn check_shape(&self, owner: &str, shape: &TypeShape) -> Result<(), SchemaError> {
        match shape {
            TypeShape::Named(target) => {
                if self.schemas.contains_key(target) {
                    Ok(())
                } else {
                    Err(SchemaError::UnresolvedRef {
                        schema: owner.to_string(),
                        reference: target.clone(),
                    })
                }
            }
            TypeShape::Optional(inner) | TypeShape::Map(inner) => self.check_shape(owner, inner),
            TypeShape::List(Some(inner)) => self.check_shape(owner, inner),
            TypeShape::Tuple(elems) => {
                for elem in elems {
                    self.check_shape(owner, elem)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

// ---------------------------- decl → model -------------------------------- //

fn lower_schema(d: decl::SchemaDecl) -> Result<Schema, SchemaError> {
    match d {
        decl::SchemaDecl::Record { name, fields } => {
            let mut out = Vec::with_capacity(fields.len());
            for f in fields {
                out.push(Field {
                    shape: lower_type(&name, f.ty)?,
                    name: f.name,
                    annotations: f.constraints,
                });
            }
            Ok(Schema::Record(RecordSchema { name, fields: out }))
        }
        decl::SchemaDecl::Root { name, root, constraints } => {
            let shape = lower_type(&name, root)?;
            Ok(Schema::Root(RootSchema {
                name,
                shape,
                annotations: constraints,
            }))
        }
    }
}

fn lower_type(owner: &str, t: decl::TypeDecl) -> Result<TypeShape, SchemaError> {
    Ok(match t {
        decl::TypeDecl::Bool => TypeShape::Bool,
        decl::TypeDecl::Integer => TypeShape::Integer,
        decl::TypeDecl::Float => TypeShape::Float,
        decl::TypeDecl::Text => TypeShape::Text,
        decl::TypeDecl::Any => TypeShape::Any,
        decl::TypeDecl::Null => TypeShape::Null,
        decl::TypeDecl::Optional { of } => {
            TypeShape::Optional(Box::new(lower_type(owner, *of)?))
        }
        decl::TypeDecl::Enum { members } => {
            if members.is_empty() {
                return Err(SchemaError::EmptyEnum(owner.to_string()));
            }
            TypeShape::Enum(
                members
                    .into_iter()
                    .map(|m| EnumMember { name: m.name, value: m.value })
                    .collect(),
            )
        }
        decl::TypeDecl::Record { schema } => TypeShape::Named(schema),
        decl::TypeDecl::List { of } => TypeShape::List(match of {
            Some(inner) => Some(Box::new(lower_type(owner, *inner)?)),
            None => None,
        }),
        decl::TypeDecl::Map { of } => TypeShape::Map(Box::new(lower_type(owner, *of)?)),
        decl::TypeDecl::Tuple { of } => TypeShape::Tuple(
            of.into_iter()
                .map(|elem| lower_type(owner, elem))
                .collect::<Result<_, _>>()?,
        ),
    })
}

// ------------------------------- Tests ------------------------------------ //
