//! By-name index over a GraphQL schema document.
//!
//! The index is the schema-side collaborator of the operation typing pass:
//! it answers root-type lookups by operation kind, type lookups by name, and
//! exposes each object/input-object type's ordered field signatures with
//! their wrappers already unwrapped into [`TypeRef`]s.

use apollo_compiler::ast;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

mod structure;

pub use structure::{FieldSignature, TypeDef, TypeDefKind, TypeRef, UnsupportedTypeShape};

/// Conventional root type names, used when the schema has no explicit
/// `schema { ... }` definition.
const DEFAULT_ROOT_NAMES: [(OperationKind, &str); 3] = [
    (OperationKind::Query, "Query"),
    (OperationKind::Mutation, "Mutation"),
    (OperationKind::Subscription, "Subscription"),
];

/// The kind of an executable operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl From<ast::OperationType> for OperationKind {
    fn from(op: ast::OperationType) -> Self {
        match op {
            ast::OperationType::Query => Self::Query,
            ast::OperationType::Mutation => Self::Mutation,
            ast::OperationType::Subscription => Self::Subscription,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        };
        f.write_str(kind)
    }
}

#[derive(Debug, Error)]
pub enum SchemaIndexError {
    #[error("failed to parse schema document: {0}")]
    Parse(String),

    #[error(transparent)]
    Shape(#[from] UnsupportedTypeShape),
}

/// Map from type name to type definition.
pub type TypeDefMap = HashMap<Arc<str>, TypeDef>;

/// A schema indexed for typing lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaIndex {
    types: TypeDefMap,
    /// Root type names declared by an explicit `schema { ... }` definition.
    declared_roots: Vec<(OperationKind, Arc<str>)>,
}

impl SchemaIndex {
    /// Build an index from a parsed schema document.
    ///
    /// Type extensions merge their fields (and enum values) into the base
    /// type; extensions without a base type in the same document are
    /// ignored. Executable definitions are skipped.
    pub fn from_document(document: &ast::Document) -> Result<Self, SchemaIndexError> {
        let mut types = TypeDefMap::new();
        let mut declared_roots = Vec::new();

        for definition in &document.definitions {
            let type_def = match definition {
                ast::Definition::ObjectTypeDefinition(obj) => {
                    Some(structure::extract_object_type(obj)?)
                }
                ast::Definition::InterfaceTypeDefinition(iface) => {
                    Some(structure::extract_interface_type(iface)?)
                }
                ast::Definition::UnionTypeDefinition(union_def) => {
                    Some(structure::extract_union_type(union_def))
                }
                ast::Definition::EnumTypeDefinition(enum_def) => {
                    Some(structure::extract_enum_type(enum_def))
                }
                ast::Definition::ScalarTypeDefinition(scalar) => {
                    Some(structure::extract_scalar_type(scalar))
                }
                ast::Definition::InputObjectTypeDefinition(input) => {
                    Some(structure::extract_input_object_type(input)?)
                }
                ast::Definition::SchemaDefinition(schema_def) => {
                    collect_declared_roots(&schema_def.root_operations, &mut declared_roots);
                    None
                }
                ast::Definition::SchemaExtension(ext) => {
                    collect_declared_roots(&ext.root_operations, &mut declared_roots);
                    None
                }
                _ => None,
            };
            if let Some(type_def) = type_def {
                types.insert(type_def.name.clone(), type_def);
            }
        }

        // Second pass so an extension may precede its base definition.
        for definition in &document.definitions {
            match definition {
                ast::Definition::ObjectTypeExtension(ext) => {
                    let fields = structure::extract_field_signatures(&ext.fields)?;
                    merge_extension_fields(&mut types, ext.name.as_str(), fields);
                }
                ast::Definition::InterfaceTypeExtension(ext) => {
                    let fields = structure::extract_field_signatures(&ext.fields)?;
                    merge_extension_fields(&mut types, ext.name.as_str(), fields);
                }
                ast::Definition::InputObjectTypeExtension(ext) => {
                    let fields = structure::extract_input_field_signatures(&ext.fields)?;
                    merge_extension_fields(&mut types, ext.name.as_str(), fields);
                }
                _ => {}
            }
        }

        tracing::debug!(type_count = types.len(), "built schema index");

        Ok(Self {
            types,
            declared_roots,
        })
    }

    /// Build an index from schema SDL text, delegating parsing to
    /// apollo-compiler.
    pub fn from_sdl(sdl: &str) -> Result<Self, SchemaIndexError> {
        let document = ast::Document::parse(sdl.to_owned(), "schema.graphql")
            .map_err(|with_errors| SchemaIndexError::Parse(with_errors.errors.to_string()))?;
        Self::from_document(&document)
    }

    /// Look up a type definition by name.
    #[must_use]
    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Number of indexed types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve the root object type name for an operation kind.
    ///
    /// An explicit `schema { ... }` declaration wins; otherwise the
    /// conventional `Query`/`Mutation`/`Subscription` type is used when the
    /// schema defines it. Returns `None` when the schema has no root for
    /// the kind.
    #[must_use]
    pub fn root_type(&self, kind: OperationKind) -> Option<&Arc<str>> {
        if let Some((_, name)) = self.declared_roots.iter().find(|(k, _)| *k == kind) {
            return Some(name);
        }
        DEFAULT_ROOT_NAMES.iter().find_map(|(k, name)| {
            if *k != kind {
                return None;
            }
            let (key, def) = self.types.get_key_value(*name)?;
            (def.kind == TypeDefKind::Object).then_some(key)
        })
    }
}

fn collect_declared_roots(
    root_operations: &[apollo_compiler::Node<(ast::OperationType, ast::NamedType)>],
    declared_roots: &mut Vec<(OperationKind, Arc<str>)>,
) {
    for root in root_operations {
        let (op_type, name) = &**root;
        declared_roots.push(((*op_type).into(), Arc::from(name.as_str())));
    }
}

fn merge_extension_fields(types: &mut TypeDefMap, name: &str, fields: Vec<FieldSignature>) {
    if let Some(base) = types.get_mut(name) {
        base.fields.extend(fields);
    } else {
        tracing::debug!(type_name = name, "ignoring extension without a base type");
    }
}
