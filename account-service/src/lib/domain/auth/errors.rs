use thiserror::Error;

use crate::user::errors::UserError;

/// Errors of the signup / login / bearer-gate flows.
///
/// `InvalidCredentials` and `InvalidToken` carry no detail about which check failed.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    InvalidToken,

    #[error(transparent)]
    User(#[from] UserError),

    #[error("Token generation failed: {0}")]
    Token(#[from] auth::JwtError),
}
