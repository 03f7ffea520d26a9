//! Single-pass type annotation for GraphQL operation documents.
//!
//! Given a [`SchemaIndex`] and a parsed operation document, the typer walks
//! each operation depth-first and annotates every variable declaration and
//! every selected field with its fully resolved type shape: list-ness,
//! required-ness, and the concrete named type it resolves to, recursing
//! into nested object fields to build a typed field tree.
//!
//! The AST itself is never mutated. The output is a [`TypedOperation`] tree
//! handed to callers alongside the original document, with each record
//! anchored back to its source span.
//!
//! ```
//! use graphql_schema_index::SchemaIndex;
//! use graphql_typer::{type_document, FieldKind};
//!
//! let index = SchemaIndex::from_sdl(
//!     "type Query { user(id: ID!): User }
//!      type User { id: ID!, name: String }",
//! )?;
//! let document = apollo_compiler::ast::Document::parse(
//!     "query GetUser($id: ID!) { user(id: $id) { id name } }".to_owned(),
//!     "query.graphql",
//! )
//! .map_err(|with_errors| with_errors.errors.to_string())?;
//!
//! let operations = type_document(&index, &document)?;
//! let user = &operations[0].fields[0];
//! assert!(matches!(&user.kind, FieldKind::Object(name) if name.as_ref() == "User"));
//! assert_eq!(user.fields.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Documents are assumed to be pre-validated against the schema; fragment
//! spreads and inline fragments are excluded from typed children (fragment
//! expansion is an upstream concern).

mod error;
mod inputs;
mod model;
mod stack;
mod typer;

pub use error::TypeError;
pub use model::{
    FieldKind, InputFieldKind, TextRange, TextSize, TypedField, TypedInputField, TypedOperation,
};
pub use typer::{type_document, DocumentTyper};

// Re-exported so downstream callers need not depend on the index crate
// directly for the common path.
pub use graphql_schema_index::{OperationKind, SchemaIndex};
