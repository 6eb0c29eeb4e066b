use crate::errors::Result;
use crate::users::users_model::{AuthResponse, LoginRequest, NewUser, RegisterRequest, User};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn exists_by_email(&self, email: &str) -> Result<bool>;
    async fn insert_new_user(&self, new_user: NewUser) -> Result<User>;
}

/// One-way password hashing. Implemented with argon2 by the server.
pub trait PasswordHasherTrait: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String>;
    /// `Ok(false)` for a wrong password; `Err` when the stored hash is unusable.
    fn verify_password(&self, password: &str, password_hash: &str) -> Result<bool>;
}

/// Issues bearer tokens bound to a user's email.
pub trait TokenIssuerTrait: Send + Sync {
    fn issue_token(&self, subject: &str) -> Result<String>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse>;
    fn login(&self, request: LoginRequest) -> Result<AuthResponse>;
    /// Maps the authenticated identity (token subject) to a stored user.
    fn resolve_current_user(&self, identity: Option<&str>) -> Result<User>;
}
