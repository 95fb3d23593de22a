use crate::store::User;

#[juniper::graphql_object(description = "A user record served by the directory.")]
impl User {
    fn id(&self) -> juniper::ID {
        juniper::ID::from(self.id.clone())
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Null when the record carries no age.
    fn age(&self) -> Option<i32> {
        self.age
    }
}
