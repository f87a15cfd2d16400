//! Credential store and session issuance.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use libris_auth::jwt::TokenEncoder;
use libris_auth::password::PasswordHasher;
use libris_core::error::AppError;
use libris_database::repositories::user::UserRepository;
use libris_entity::plan::PlanTier;
use libris_entity::user::{CreateUser, User};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Signed bearer token.
    pub access_token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

/// Handles registration, credential verification, and token issuance.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<TokenEncoder>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<TokenEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Registers a new user on the free tier.
    ///
    /// The pre-check gives a clean error for the common case; the unique
    /// constraint on email catches concurrent registrations and maps to
    /// the same conflict.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
                subscription_plan: PlanTier::Free.as_str().to_string(),
            })
            .await?;

        info!(user_id = user.id, "User registered");

        Ok(user)
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// Unknown email and wrong password collapse into the same error so
    /// the response does not reveal which one failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid credentials"));
        }

        let (access_token, expires_at) = self.encoder.issue(&user.email)?;

        info!(user_id = user.id, "User logged in");

        Ok(LoginOutcome {
            user,
            access_token,
            expires_at,
        })
    }
}
