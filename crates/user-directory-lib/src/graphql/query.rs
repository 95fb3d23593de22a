use async_trait::async_trait;

use super::Context;
use crate::store::User;

/**
 * Data-fetching logic behind the `Query` root fields.
 *
 * The juniper object below only declares the GraphQL surface and delegates
 * every field to one of these methods. Arguments arrive already validated
 * against the schema, so neither resolver has a failure path.
 */
#[async_trait]
pub trait QueryFieldResolvers {
    async fn resolve_get_user(&self, ctx: &Context, id: &str) -> Option<User>;
    async fn resolve_list_users(&self, ctx: &Context, limit: Option<i32>) -> Vec<User>;
}

pub struct Query;

#[async_trait]
impl QueryFieldResolvers for Query {
    async fn resolve_get_user(&self, ctx: &Context, id: &str) -> Option<User> {
        let user = ctx.store().find_by_id(id).cloned();
        tracing::debug!(id, found = user.is_some(), "resolved getUser");
        user
    }

    async fn resolve_list_users(&self, ctx: &Context, limit: Option<i32>) -> Vec<User> {
        let users = ctx.store().take(limit).to_vec();
        tracing::debug!(?limit, returned = users.len(), "resolved listUsers");
        users
    }
}

#[juniper::graphql_object(context = Context)]
impl Query {
    /// Fetches a single user by id. Null when no record has that id.
    async fn get_user(&self, context: &Context, id: juniper::ID) -> Option<User> {
        self.resolve_get_user(context, &id).await
    }

    /// Lists users in store order, truncated to the first `limit` records
    /// when a limit is given. Zero or negative limits return an empty list.
    async fn list_users(&self, context: &Context, limit: Option<i32>) -> Vec<User> {
        self.resolve_list_users(context, limit).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::UserStore;

    fn ctx() -> Context {
        Context::new(Arc::new(UserStore::seeded()))
    }

    #[tokio::test]
    async fn get_user_resolves_known_and_unknown_ids() {
        let ctx = ctx();
        let user = Query.resolve_get_user(&ctx, "2").await.unwrap();
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.age, Some(25));
        assert!(Query.resolve_get_user(&ctx, "999").await.is_none());
    }

    #[tokio::test]
    async fn list_users_honours_limit() {
        let ctx = ctx();
        assert_eq!(Query.resolve_list_users(&ctx, None).await.len(), 2);
        assert_eq!(Query.resolve_list_users(&ctx, Some(1)).await[0].id, "1");
        assert!(Query.resolve_list_users(&ctx, Some(0)).await.is_empty());
        assert!(Query.resolve_list_users(&ctx, Some(-3)).await.is_empty());
        assert_eq!(Query.resolve_list_users(&ctx, Some(50)).await.len(), 2);
    }
}
