//! Credential and token utilities library
//!
//! Provides the security primitives the account service is built on:
//! - Password hashing (Argon2id, salted, PHC strings)
//! - Bearer token issuance and verification (HMAC-signed JWTs)
//!
//! Both are constructed explicitly from configuration; there is no ambient global state.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{TokenService, TokenSettings};
//!
//! let tokens = TokenService::new(&TokenSettings {
//!     secret: "secret_key_at_least_32_bytes_long!".to_string(),
//!     algorithm: "HS256".to_string(),
//!     default_ttl: chrono::Duration::minutes(30),
//! })
//! .unwrap();
//!
//! let token = tokens.issue("alice@example.com").unwrap();
//! assert_eq!(tokens.verify(&token).as_deref(), Some("alice@example.com"));
//! ```

pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenService;
pub use token::TokenSettings;
