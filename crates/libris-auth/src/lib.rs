//! # libris-auth
//!
//! Credential hashing and stateless session tokens for Libris.
//!
//! Tokens are signed JWTs carrying the subject email and a fixed expiry
//! window. There is no refresh and no revocation: a token stays valid
//! until its expiry passes. This is an accepted limitation of the design,
//! not an oversight.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use password::PasswordHasher;
