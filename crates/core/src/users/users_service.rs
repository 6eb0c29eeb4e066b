use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

use super::users_model::{AuthResponse, LoginRequest, NewUser, RegisterRequest, User};
use super::users_traits::{
    PasswordHasherTrait, TokenIssuerTrait, UserRepositoryTrait, UserServiceTrait,
};
use crate::constants::DEFAULT_USER_ROLE;
use crate::errors::{DatabaseError, Error, Result};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Service for registration, login and identity resolution
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    hasher: Arc<dyn PasswordHasherTrait>,
    tokens: Arc<dyn TokenIssuerTrait>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        hasher: Arc<dyn PasswordHasherTrait>,
        tokens: Arc<dyn TokenIssuerTrait>,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    fn auth_response(&self, user: &User) -> Result<AuthResponse> {
        let token = self.tokens.issue_token(&user.email)?;
        Ok(AuthResponse {
            token,
            name: user.name.clone(),
            email: user.email.clone(),
        })
    }

    /// Checks the credentials. Every failure mode maps to the same error.
    fn authenticate(&self, request: &LoginRequest) -> Result<User> {
        let user = match self.repository.find_by_email(&request.email)? {
            Some(user) => user,
            None => {
                debug!("Login rejected: unknown email");
                return Err(Error::AuthenticationFailed(INVALID_CREDENTIALS.to_string()));
            }
        };
        match self
            .hasher
            .verify_password(&request.password, &user.password_hash)
        {
            Ok(true) => Ok(user),
            Ok(false) => {
                debug!("Login rejected: password mismatch for user {}", user.id);
                Err(Error::AuthenticationFailed(INVALID_CREDENTIALS.to_string()))
            }
            Err(e) => {
                warn!("Password verification failed for user {}: {}", user.id, e);
                Err(Error::AuthenticationFailed(INVALID_CREDENTIALS.to_string()))
            }
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        request.validate()?;
        if self.repository.exists_by_email(&request.email)? {
            return Err(Error::AlreadyExists(
                "Email is already registered".to_string(),
            ));
        }

        let new_user = NewUser {
            name: request.name,
            email: request.email,
            password_hash: self.hasher.hash_password(&request.password)?,
            role: DEFAULT_USER_ROLE.to_string(),
        };
        let user = match self.repository.insert_new_user(new_user).await {
            Ok(user) => user,
            // Lost a race with a concurrent registration of the same email.
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                return Err(Error::AlreadyExists(
                    "Email is already registered".to_string(),
                ));
            }
            Err(e) => return Err(e),
        };
        info!("Registered user {}", user.id);
        self.auth_response(&user)
    }

    fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        request.validate()?;
        let user = self.authenticate(&request)?;
        self.auth_response(&user)
    }

    fn resolve_current_user(&self, identity: Option<&str>) -> Result<User> {
        let email = identity.ok_or_else(|| Error::not_found("Authenticated user not found"))?;
        self.repository
            .find_by_email(email)?
            .ok_or_else(|| Error::not_found("User not found"))
    }
}
