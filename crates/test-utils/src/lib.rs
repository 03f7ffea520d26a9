//! Shared test infrastructure for the GraphQL typer crates.
//!
//! Provides parse helpers that panic on malformed fixtures (keeping test
//! bodies focused on behavior) and a set of common schema/document
//! fixtures.

// Test utilities are less strict than production code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::expect_used)]

use apollo_compiler::ast;
use apollo_compiler::Node;
use graphql_schema_index::SchemaIndex;
use graphql_typer::{DocumentTyper, TypedOperation};

pub mod fixtures;

/// Parse an executable document, panicking on syntax errors.
pub fn parse_document(source: &str) -> ast::Document {
    ast::Document::parse(source.to_owned(), "document.graphql")
        .expect("test document should parse")
}

/// Build a schema index from SDL, panicking on malformed schemas.
pub fn parse_index(sdl: &str) -> SchemaIndex {
    SchemaIndex::from_sdl(sdl).expect("test schema should index")
}

/// The first operation definition in a document.
pub fn first_operation(document: &ast::Document) -> &Node<ast::OperationDefinition> {
    document
        .definitions
        .iter()
        .find_map(|definition| match definition {
            ast::Definition::OperationDefinition(operation) => Some(operation),
            _ => None,
        })
        .expect("test document should contain an operation")
}

/// Type the first operation of `source` against `sdl` with a fresh pass.
pub fn type_first_operation(sdl: &str, source: &str) -> TypedOperation {
    let index = parse_index(sdl);
    let document = parse_document(source);
    DocumentTyper::new(&index)
        .type_operation(first_operation(&document))
        .expect("test operation should type")
}
