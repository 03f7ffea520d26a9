use crate::error::TypeError;
use crate::inputs::InputFieldResolver;
use crate::model::{FieldKind, InputFieldKind, TypedField, TypedInputField, TypedOperation};
use crate::stack::TypeStack;
use apollo_compiler::ast;
use graphql_schema_index::{OperationKind, SchemaIndex, TypeRef};
use std::sync::Arc;
use text_size::{TextRange, TextSize};

/// One-shot typing pass over a single operation definition.
///
/// The typer owns the pass-scoped state (type stack and input resolver
/// cache); [`type_operation`](Self::type_operation) consumes `self`, so an
/// instance cannot be reused for a second operation or after a failure.
/// Construct a fresh one per pass.
#[derive(Debug)]
pub struct DocumentTyper<'a> {
    index: &'a SchemaIndex,
    stack: TypeStack,
    inputs: InputFieldResolver<'a>,
}

impl<'a> DocumentTyper<'a> {
    #[must_use]
    pub fn new(index: &'a SchemaIndex) -> Self {
        Self {
            index,
            stack: TypeStack::new(),
            inputs: InputFieldResolver::new(index),
        }
    }

    /// Type one operation against the schema index.
    ///
    /// Resolves the operation kind's root type, types every variable
    /// declaration, then walks the selection set depth-first, typing each
    /// field on enter and assembling its children on leave. The document is
    /// assumed to have been validated against the schema beforehand.
    pub fn type_operation(
        mut self,
        operation: &ast::OperationDefinition,
    ) -> Result<TypedOperation, TypeError> {
        let kind = OperationKind::from(operation.operation_type);
        let root_type = self
            .index
            .root_type(kind)
            .cloned()
            .ok_or(TypeError::MissingRootType(kind))?;
        tracing::debug!(
            operation = operation.name.as_ref().map(apollo_compiler::Name::as_str),
            %kind,
            root_type = root_type.as_ref(),
            "typing operation"
        );

        let variables = operation
            .variables
            .iter()
            .map(|variable| self.type_variable(variable))
            .collect::<Result<Vec<_>, _>>()?;

        self.stack.push(root_type.clone());
        let fields = self.type_selection_set(&operation.selection_set)?;
        self.stack.pop();
        debug_assert!(self.stack.is_empty());

        Ok(TypedOperation {
            name: operation.name.as_ref().map(|n| Arc::from(n.as_str())),
            kind,
            root_type,
            variables,
            fields,
        })
    }

    /// Variables resolve entirely from their syntactic type annotation plus
    /// a schema lookup; there is no subtree to descend into.
    fn type_variable(
        &mut self,
        variable: &ast::VariableDefinition,
    ) -> Result<TypedInputField, TypeError> {
        let type_ref = TypeRef::from_ast(&variable.ty)?;
        let kind = InputFieldKind::classify(self.index, &type_ref.name);
        let fields = match &kind {
            InputFieldKind::InputObject(name) => self.inputs.resolve(name),
            _ => Arc::new(Vec::new()),
        };
        Ok(TypedInputField {
            name: Arc::from(variable.name.as_str()),
            parent_type: None,
            is_non_null: type_ref.is_non_null,
            is_list: type_ref.is_list,
            kind,
            default_value: variable
                .default_value
                .as_ref()
                .map(|value| Arc::from(value.to_string().as_str())),
            fields,
            name_range: name_range(&variable.name),
        })
    }

    fn type_selection_set(
        &mut self,
        selection_set: &[ast::Selection],
    ) -> Result<Vec<TypedField>, TypeError> {
        let mut fields = Vec::new();
        for selection in selection_set {
            // Fragment spreads and inline fragments belong to an upstream
            // expansion pass; only plain field selections are typed here.
            if let ast::Selection::Field(field) = selection {
                fields.push(self.type_field(field)?);
            }
        }
        Ok(fields)
    }

    fn type_field(&mut self, field: &ast::Field) -> Result<TypedField, TypeError> {
        let parent_type = self.stack.current()?.clone();
        let declared = self
            .index
            .type_def(&parent_type)
            .and_then(|def| def.field(field.name.as_str()))
            .ok_or_else(|| TypeError::UnknownField {
                type_name: parent_type.clone(),
                field_name: Arc::from(field.name.as_str()),
            })?;
        let type_ref = declared.type_ref.clone();

        let kind = FieldKind::classify(self.index, &type_ref.name);
        let children = if let FieldKind::Object(object_type) = &kind {
            self.stack.push(object_type.clone());
            let children = self.type_selection_set(&field.selection_set)?;
            self.stack.pop();
            children
        } else {
            // Non-object fields scope no nested selections; an unresolved
            // parent (union, interface) leaves its subtree untyped.
            Vec::new()
        };

        Ok(TypedField {
            name: Arc::from(field.name.as_str()),
            alias: field.alias.as_ref().map(|a| Arc::from(a.as_str())),
            parent_type,
            is_non_null: type_ref.is_non_null,
            is_list: type_ref.is_list,
            kind,
            fields: children,
            name_range: name_range(&field.name),
        })
    }
}

/// Type every operation in a document, constructing a fresh one-shot pass
/// per operation so no stack or cache state carries across passes.
pub fn type_document(
    index: &SchemaIndex,
    document: &ast::Document,
) -> Result<Vec<TypedOperation>, TypeError> {
    document
        .definitions
        .iter()
        .filter_map(|definition| match definition {
            ast::Definition::OperationDefinition(operation) => Some(operation),
            _ => None,
        })
        .map(|operation| DocumentTyper::new(index).type_operation(operation))
        .collect()
}

/// Source span of an AST name, when the node carries a location.
fn name_range(name: &apollo_compiler::Name) -> Option<TextRange> {
    name.location().map(|loc| {
        TextRange::new(
            TextSize::from(loc.offset() as u32),
            TextSize::from(loc.end_offset() as u32),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_document(source: &str) -> ast::Document {
        ast::Document::parse(source.to_owned(), "operation.graphql")
            .expect("fixture document should parse")
    }

    fn type_first_operation(sdl: &str, source: &str) -> Result<TypedOperation, TypeError> {
        let index = SchemaIndex::from_sdl(sdl).expect("fixture schema should index");
        let document = parse_document(source);
        let operation = document
            .definitions
            .iter()
            .find_map(|definition| match definition {
                ast::Definition::OperationDefinition(operation) => Some(operation),
                _ => None,
            })
            .expect("fixture document contains an operation");
        DocumentTyper::new(&index).type_operation(operation)
    }

    const SCHEMA: &str = r"
        type Query {
            user(id: ID!): User
            role: Role
            node: Node
        }

        type Mutation {
            rename(id: ID!, name: String!): User
        }

        type User {
            id: ID!
            name: String
            role: Role
            posts: [Post!]!
        }

        type Post {
            title: String
        }

        enum Role {
            ADMIN
            MEMBER
        }

        interface Node {
            id: ID!
        }
    ";

    #[test]
    fn leaf_fields_have_no_children() {
        let operation = type_first_operation(SCHEMA, "{ role }").unwrap();
        let role = &operation.fields[0];
        assert!(matches!(&role.kind, FieldKind::Enum(name) if name.as_ref() == "Role"));
        assert!(role.fields.is_empty());
        assert!(!role.is_list);
        assert!(!role.is_non_null);
        assert_eq!(role.parent_type.as_ref(), "Query");
    }

    #[test]
    fn object_fields_type_their_children_bottom_up() {
        let operation =
            type_first_operation(SCHEMA, "query { user(id: \"1\") { id posts { title } } }")
                .unwrap();

        let user = &operation.fields[0];
        assert!(matches!(&user.kind, FieldKind::Object(name) if name.as_ref() == "User"));
        assert_eq!(user.fields.len(), 2);

        let id = &user.fields[0];
        assert!(id.is_non_null);
        assert_eq!(id.parent_type.as_ref(), "User");
        assert!(matches!(&id.kind, FieldKind::Scalar(name) if name.as_ref() == "ID"));

        let posts = &user.fields[1];
        assert!(posts.is_non_null && posts.is_list);
        assert!(matches!(&posts.kind, FieldKind::Object(name) if name.as_ref() == "Post"));
        assert_eq!(posts.fields[0].name.as_ref(), "title");
        assert_eq!(posts.fields[0].parent_type.as_ref(), "Post");
    }

    #[test]
    fn mutation_operations_resolve_against_the_mutation_root() {
        let operation = type_first_operation(
            SCHEMA,
            "mutation Rename($id: ID!, $name: String!) { rename(id: $id, name: $name) { id } }",
        )
        .unwrap();
        assert_eq!(operation.kind, OperationKind::Mutation);
        assert_eq!(operation.root_type.as_ref(), "Mutation");
        assert_eq!(operation.name.as_deref(), Some("Rename"));
        assert_eq!(operation.variables.len(), 2);
        assert_eq!(operation.fields[0].parent_type.as_ref(), "Mutation");
    }

    #[test]
    fn missing_root_type_is_fatal() {
        let err = type_first_operation(SCHEMA, "subscription { user { id } }").unwrap_err();
        assert_eq!(err, TypeError::MissingRootType(OperationKind::Subscription));
    }

    #[test]
    fn unknown_field_is_fatal() {
        let err = type_first_operation(SCHEMA, "{ user(id: \"1\") { nickname } }").unwrap_err();
        assert_eq!(
            err,
            TypeError::UnknownField {
                type_name: Arc::from("User"),
                field_name: Arc::from("nickname"),
            }
        );
    }

    #[test]
    fn nested_list_variable_annotation_is_fatal() {
        let err = type_first_operation(SCHEMA, "query Q($ids: [[ID]]) { role }").unwrap_err();
        assert!(matches!(err, TypeError::Shape(_)));
    }

    #[test]
    fn fragment_selections_are_excluded_from_children() {
        let operation = type_first_operation(
            SCHEMA,
            r#"
            query {
                user(id: "1") {
                    id
                    ...UserParts
                    ... on User {
                        posts {
                            title
                        }
                    }
                    name
                }
            }

            fragment UserParts on User {
                role
            }
            "#,
        )
        .unwrap();

        let user = &operation.fields[0];
        let names: Vec<_> = user.fields.iter().map(|f| f.name.as_ref()).collect();
        assert_eq!(names, ["id", "name"]);
    }

    #[test]
    fn interface_typed_fields_stay_unresolved_with_empty_children() {
        let operation = type_first_operation(SCHEMA, "{ node { id } }").unwrap();
        let node = &operation.fields[0];
        assert!(matches!(&node.kind, FieldKind::Unresolved(name) if name.as_ref() == "Node"));
        assert!(node.fields.is_empty());
    }

    #[test]
    fn aliases_are_recorded_as_response_keys() {
        let operation = type_first_operation(SCHEMA, "{ currentRole: role }").unwrap();
        let role = &operation.fields[0];
        assert_eq!(role.name.as_ref(), "role");
        assert_eq!(role.alias.as_deref(), Some("currentRole"));
    }

    #[test]
    fn variable_defaults_are_carried() {
        let operation =
            type_first_operation(SCHEMA, "query Q($role: Role = ADMIN) { role }").unwrap();
        let variable = &operation.variables[0];
        assert!(matches!(&variable.kind, InputFieldKind::Enum(name) if name.as_ref() == "Role"));
        assert_eq!(variable.default_value.as_deref(), Some("ADMIN"));
        assert_eq!(variable.parent_type, None);
    }

    #[test]
    fn typed_fields_are_anchored_to_source_spans() {
        let source = "{ role }";
        let operation = type_first_operation(SCHEMA, source).unwrap();
        let range = operation.fields[0].name_range.expect("field has a span");
        assert_eq!(&source[range], "role");
    }

    #[test]
    fn type_document_types_every_operation_independently() {
        let index = SchemaIndex::from_sdl(SCHEMA).unwrap();
        let document = parse_document(
            "query A { user(id: \"1\") { id } }\nmutation B { rename(id: \"1\", name: \"n\") { id } }",
        );
        let operations = type_document(&index, &document).unwrap();
        assert_eq!(operations.len(), 2);
        assert_eq!(operations[0].root_type.as_ref(), "Query");
        assert_eq!(operations[1].root_type.as_ref(), "Mutation");
    }
}
