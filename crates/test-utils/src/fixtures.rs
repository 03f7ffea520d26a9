//! Shared schema and document fixtures.
//!
//! Use these for tests that don't need a custom schema. When the schema
//! structure is the point of the test, prefer an inline fixture so the test
//! stays self-documenting.

/// Minimal schema with just Query and a User type.
pub const BASIC_SCHEMA: &str = r"
type Query {
    user(id: ID!): User
    users: [User!]!
}

type User {
    id: ID!
    name: String!
    email: String!
}
";

/// Schema with nested object types for testing recursive field typing.
///
/// Includes a User -> Post -> Comment chain, useful for:
/// - Nested selection set typing
/// - Type stack discipline across several levels
pub const NESTED_SCHEMA: &str = r"
type Query {
    user(id: ID!): User
    post(id: ID!): Post
}

type User {
    id: ID!
    name: String
    posts: [Post!]!
}

type Post {
    id: ID!
    title: String
    comments: [Comment!]
}

type Comment {
    id: ID!
    text: String!
}
";

/// Schema exercising input objects, including a self-referential one.
pub const INPUT_SCHEMA: &str = r"
type Query {
    search(filter: SearchFilter, sort: SortOrder = ASC): [Result!]!
}

type Result {
    score: Float!
}

input SearchFilter {
    term: String
    limit: Int = 25
    within: SearchFilter
}

enum SortOrder {
    ASC
    DESC
}
";

/// The canonical end-to-end document over [`NESTED_SCHEMA`].
pub const GET_USER_OPERATION: &str = r"
query GetUser($id: ID!) {
    user(id: $id) {
        id
        name
        posts {
            title
        }
    }
}
";
