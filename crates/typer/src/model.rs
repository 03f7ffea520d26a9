use graphql_schema_index::{OperationKind, SchemaIndex, TypeDefKind};
use std::sync::Arc;
pub use text_size::{TextRange, TextSize};

/// Classification of an output field's bare named type.
///
/// Exactly one variant applies per field; names that classify as none of
/// scalar/enum/object (unions, interfaces, names missing from the schema)
/// are carried as [`Unresolved`](Self::Unresolved) rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Scalar(Arc<str>),
    Enum(Arc<str>),
    Object(Arc<str>),
    Unresolved(Arc<str>),
}

impl FieldKind {
    pub(crate) fn classify(index: &SchemaIndex, name: &Arc<str>) -> Self {
        match index.type_def(name).map(|def| def.kind) {
            Some(TypeDefKind::Scalar) => Self::Scalar(name.clone()),
            Some(TypeDefKind::Enum) => Self::Enum(name.clone()),
            Some(TypeDefKind::Object) => Self::Object(name.clone()),
            _ => Self::Unresolved(name.clone()),
        }
    }

    /// The bare named type this field resolves to.
    #[must_use]
    pub fn type_name(&self) -> &Arc<str> {
        match self {
            Self::Scalar(name) | Self::Enum(name) | Self::Object(name) | Self::Unresolved(name) => {
                name
            }
        }
    }
}

/// Classification of an input value's bare named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFieldKind {
    Scalar(Arc<str>),
    Enum(Arc<str>),
    InputObject(Arc<str>),
    Unresolved(Arc<str>),
}

impl InputFieldKind {
    pub(crate) fn classify(index: &SchemaIndex, name: &Arc<str>) -> Self {
        match index.type_def(name).map(|def| def.kind) {
            Some(TypeDefKind::Scalar) => Self::Scalar(name.clone()),
            Some(TypeDefKind::Enum) => Self::Enum(name.clone()),
            Some(TypeDefKind::InputObject) => Self::InputObject(name.clone()),
            _ => Self::Unresolved(name.clone()),
        }
    }

    /// The bare named type this value resolves to.
    #[must_use]
    pub fn type_name(&self) -> &Arc<str> {
        match self {
            Self::Scalar(name)
            | Self::Enum(name)
            | Self::InputObject(name)
            | Self::Unresolved(name) => name,
        }
    }
}

/// A selected field annotated with its resolved type shape.
///
/// `fields` is non-empty only when `kind` is [`FieldKind::Object`]; children
/// appear in document order with fragment spreads and inline fragments
/// excluded. `name_range` anchors the record back to the source span of the
/// field name, so the tree can be handed to callers alongside the untouched
/// AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedField {
    pub name: Arc<str>,
    /// Response key override, when the selection is aliased.
    pub alias: Option<Arc<str>>,
    /// Name of the enclosing object type (a back-reference, not an
    /// ownership edge).
    pub parent_type: Arc<str>,
    pub is_non_null: bool,
    pub is_list: bool,
    pub kind: FieldKind,
    pub fields: Vec<TypedField>,
    pub name_range: Option<TextRange>,
}

/// A variable declaration or input-object field annotated with its resolved
/// type shape.
///
/// `fields` is non-empty only when `kind` is
/// [`InputFieldKind::InputObject`]; the list is shared out of the pass's
/// resolver cache, so every reference to one input type within a pass sees
/// the same allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedInputField {
    pub name: Arc<str>,
    /// Name of the enclosing input-object type; `None` for operation
    /// variables, which have no enclosing type.
    pub parent_type: Option<Arc<str>>,
    pub is_non_null: bool,
    pub is_list: bool,
    pub kind: InputFieldKind,
    /// Serialized default value, when one is declared.
    pub default_value: Option<Arc<str>>,
    pub fields: Arc<Vec<TypedInputField>>,
    /// Set for variable declarations; schema-derived input fields have no
    /// document span.
    pub name_range: Option<TextRange>,
}

/// A fully typed operation: the decorated view of one operation definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedOperation {
    pub name: Option<Arc<str>>,
    pub kind: OperationKind,
    /// The root object type the operation's selections resolve against.
    pub root_type: Arc<str>,
    /// Typed variable declarations, in declaration order.
    pub variables: Vec<TypedInputField>,
    /// Typed root field selections, in document order.
    pub fields: Vec<TypedField>,
}
