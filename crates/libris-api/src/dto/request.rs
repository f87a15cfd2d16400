//! Request DTOs with validation rules.

use serde::Deserialize;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address, also the login identifier.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}
