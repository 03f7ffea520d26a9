use graphql_schema_index::{OperationKind, UnsupportedTypeShape};
use std::sync::Arc;
use thiserror::Error;

/// Fatal failures of a typing pass.
///
/// Any of these aborts annotation of the whole operation; partial results
/// are never returned and the failed pass instance cannot be reused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The schema declares no root type for the operation kind found in
    /// the document.
    #[error("schema does not define a root type for {0} operations")]
    MissingRootType(OperationKind),

    /// A field was resolved with no enclosing type on the stack. Indicates
    /// mismatched enter/leave pairing in the traversal itself.
    #[error("type stack is empty: field resolved outside any enclosing type")]
    EmptyTypeStack,

    /// A variable's type annotation does not reduce to a bare named type.
    #[error(transparent)]
    Shape(#[from] UnsupportedTypeShape),

    /// The document selects a field its parent type does not declare.
    /// Documents are expected to be validated before typing.
    #[error("field '{field_name}' is not declared on type '{type_name}'")]
    UnknownField {
        type_name: Arc<str>,
        field_name: Arc<str>,
    },
}
