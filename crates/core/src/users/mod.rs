//! Users module - registration, login and identity resolution.

mod users_model;
mod users_service;
mod users_traits;


pub use users_model::{AuthResponse, LoginRequest, NewUser, RegisterRequest, User};
pub use users_service::UserService;
pub use users_traits::{
    PasswordHasherTrait, TokenIssuerTrait, UserRepositoryTrait, UserServiceTrait,
};
