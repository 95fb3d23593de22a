pub mod graphql;
pub mod schema_info;
pub mod store;

pub use graphql::{Context, Query, Schema};
pub use schema_info::SchemaInfo;
pub use store::{StoreError, User, UserStore};

/// The SDL contract that the executable schema has to satisfy.
pub const SCHEMA_SDL: &str = include_str!("../schema.graphqls");

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to parse GraphQL schema: {0}")]
    Parse(#[from] graphql_parser::schema::ParseError),

    #[error("object type `{name}` is defined more than once (first at {first:?}, again at {second:?})")]
    DuplicateObjectType {
        name: String,
        first: graphql_parser::Pos,
        second: graphql_parser::Pos,
    },

    #[error("schema does not define object type `{0}`")]
    MissingType(String),

    #[error("type `{type_name}` has no field `{field}`")]
    MissingField { type_name: String, field: String },

    #[error("field `{type_name}.{field}` has no argument `{argument}`")]
    MissingArgument {
        type_name: String,
        field: String,
        argument: String,
    },

    #[error("`{location}` is declared as `{expected}` but the schema has `{actual}`")]
    TypeMismatch {
        location: String,
        expected: String,
        actual: String,
    },
}
