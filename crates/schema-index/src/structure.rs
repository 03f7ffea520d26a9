use apollo_compiler::ast;
use apollo_compiler::Node;
use std::sync::Arc;
use thiserror::Error;

/// Structure of a type definition (no resolvers, no bodies)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    pub name: Arc<str>,
    pub kind: TypeDefKind,
    pub fields: Vec<FieldSignature>,
    pub enum_values: Vec<Arc<str>>,
    pub description: Option<Arc<str>>,
}

impl TypeDef {
    /// Look up a declared field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSignature> {
        self.fields.iter().find(|f| f.name.as_ref() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TypeDefKind {
    Object,
    Interface,
    Union,
    Enum,
    Scalar,
    InputObject,
}

/// Signature of a field: its name and declared type.
///
/// Covers both output object fields and input object fields;
/// `default_value` is only ever set for the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSignature {
    pub name: Arc<str>,
    pub type_ref: TypeRef,
    pub default_value: Option<Arc<str>>,
    pub description: Option<Arc<str>>,
}

/// Reference to a named type with its list/non-null wrappers unwrapped.
///
/// `is_non_null` and `is_list` describe the outer wrapper shape;
/// `inner_non_null` distinguishes `[T!]` from `[T]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: Arc<str>,
    pub is_list: bool,
    pub is_non_null: bool,
    pub inner_non_null: bool,
}

/// A syntactic type annotation that does not reduce to a bare named type
/// within a single list wrapper (e.g. a list of lists).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported type shape: {0}")]
pub struct UnsupportedTypeShape(pub String);

impl TypeRef {
    /// Unwrap a syntactic type annotation into a [`TypeRef`].
    ///
    /// Strips an outer non-null wrapper, then a list wrapper, then a
    /// non-null wrapper on the list element, and requires the result to be
    /// a bare named type. Nested lists cannot be represented by this shape
    /// and are rejected.
    pub fn from_ast(ty: &ast::Type) -> Result<Self, UnsupportedTypeShape> {
        match ty {
            ast::Type::Named(name) => Ok(Self {
                name: Arc::from(name.as_str()),
                is_list: false,
                is_non_null: false,
                inner_non_null: false,
            }),
            ast::Type::NonNullNamed(name) => Ok(Self {
                name: Arc::from(name.as_str()),
                is_list: false,
                is_non_null: true,
                inner_non_null: false,
            }),
            ast::Type::List(inner) | ast::Type::NonNullList(inner) => {
                let is_non_null = matches!(ty, ast::Type::NonNullList(_));
                let (name, inner_non_null) = match inner.as_ref() {
                    ast::Type::Named(name) => (name, false),
                    ast::Type::NonNullNamed(name) => (name, true),
                    ast::Type::List(_) | ast::Type::NonNullList(_) => {
                        return Err(UnsupportedTypeShape(ty.to_string()))
                    }
                };
                Ok(Self {
                    name: Arc::from(name.as_str()),
                    is_list: true,
                    is_non_null,
                    inner_non_null,
                })
            }
        }
    }
}

pub(crate) fn extract_object_type(
    obj: &Node<ast::ObjectTypeDefinition>,
) -> Result<TypeDef, UnsupportedTypeShape> {
    Ok(TypeDef {
        name: Arc::from(obj.name.as_str()),
        kind: TypeDefKind::Object,
        fields: extract_field_signatures(&obj.fields)?,
        enum_values: Vec::new(),
        description: extract_description(obj.description.as_ref()),
    })
}

pub(crate) fn extract_interface_type(
    iface: &Node<ast::InterfaceTypeDefinition>,
) -> Result<TypeDef, UnsupportedTypeShape> {
    Ok(TypeDef {
        name: Arc::from(iface.name.as_str()),
        kind: TypeDefKind::Interface,
        fields: extract_field_signatures(&iface.fields)?,
        enum_values: Vec::new(),
        description: extract_description(iface.description.as_ref()),
    })
}

pub(crate) fn extract_union_type(union_def: &Node<ast::UnionTypeDefinition>) -> TypeDef {
    TypeDef {
        name: Arc::from(union_def.name.as_str()),
        kind: TypeDefKind::Union,
        fields: Vec::new(),
        enum_values: Vec::new(),
        description: extract_description(union_def.description.as_ref()),
    }
}

pub(crate) fn extract_enum_type(enum_def: &Node<ast::EnumTypeDefinition>) -> TypeDef {
    TypeDef {
        name: Arc::from(enum_def.name.as_str()),
        kind: TypeDefKind::Enum,
        fields: Vec::new(),
        enum_values: enum_def
            .values
            .iter()
            .map(|v| Arc::from(v.value.as_str()))
            .collect(),
        description: extract_description(enum_def.description.as_ref()),
    }
}

pub(crate) fn extract_scalar_type(scalar: &Node<ast::ScalarTypeDefinition>) -> TypeDef {
    TypeDef {
        name: Arc::from(scalar.name.as_str()),
        kind: TypeDefKind::Scalar,
        fields: Vec::new(),
        enum_values: Vec::new(),
        description: extract_description(scalar.description.as_ref()),
    }
}

pub(crate) fn extract_input_object_type(
    input: &Node<ast::InputObjectTypeDefinition>,
) -> Result<TypeDef, UnsupportedTypeShape> {
    Ok(TypeDef {
        name: Arc::from(input.name.as_str()),
        kind: TypeDefKind::InputObject,
        fields: extract_input_field_signatures(&input.fields)?,
        enum_values: Vec::new(),
        description: extract_description(input.description.as_ref()),
    })
}

pub(crate) fn extract_field_signatures(
    fields: &[Node<ast::FieldDefinition>],
) -> Result<Vec<FieldSignature>, UnsupportedTypeShape> {
    fields
        .iter()
        .map(|f| {
            Ok(FieldSignature {
                name: Arc::from(f.name.as_str()),
                type_ref: TypeRef::from_ast(&f.ty)?,
                default_value: None,
                description: extract_description(f.description.as_ref()),
            })
        })
        .collect()
}

pub(crate) fn extract_input_field_signatures(
    fields: &[Node<ast::InputValueDefinition>],
) -> Result<Vec<FieldSignature>, UnsupportedTypeShape> {
    fields
        .iter()
        .map(|f| {
            Ok(FieldSignature {
                name: Arc::from(f.name.as_str()),
                type_ref: TypeRef::from_ast(&f.ty)?,
                default_value: f
                    .default_value
                    .as_ref()
                    .map(|v| Arc::from(v.to_string().as_str())),
                description: extract_description(f.description.as_ref()),
            })
        })
        .collect()
}

fn extract_description(description: Option<&Node<str>>) -> Option<Arc<str>> {
    description.map(|d| Arc::from(&**d))
}
