mod query;
mod user;

use std::sync::Arc;

pub use query::{Query, QueryFieldResolvers};

use crate::schema_info::SchemaInfo;
use crate::store::UserStore;
use crate::{SchemaError, SCHEMA_SDL};

/// Per-request context. Every request shares the same store.
#[derive(Clone)]
pub struct Context {
    store: Arc<UserStore>,
}
impl Context {
    pub fn new(store: Arc<UserStore>) -> Self {
        Context { store }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }
}
impl juniper::Context for Context {}

/// Read-only root: no mutations, no subscriptions.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    juniper::EmptyMutation<Context>,
    juniper::EmptySubscription<Context>,
>;

pub fn schema() -> Schema {
    Schema::new(
        Query,
        juniper::EmptyMutation::new(),
        juniper::EmptySubscription::new(),
    )
}

/// Renders the executable schema as SDL.
pub fn sdl(schema: &Schema) -> String {
    schema.as_schema_language()
}

/**
 * Checks the executable schema against the checked-in `schema.graphqls`.
 *
 * Every type, field and argument the SDL declares has to exist in the
 * juniper schema with exactly the same type; anything missing or typed
 * differently is reported as a `SchemaError`.
 */
pub fn verify_schema(schema: &Schema) -> Result<(), SchemaError> {
    let contract = SchemaInfo::parse(SCHEMA_SDL)?;
    let actual = SchemaInfo::parse(&sdl(schema))?;
    actual.check_implements(&contract)
}
