use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::PersonName;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    state
        .auth_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for registering an account (raw JSON).
///
/// Unknown fields such as `avatar_url` are ignored; the avatar is set through the user
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

impl SignupRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, UserError> {
        let first_name = PersonName::new(self.first_name)?;
        let last_name = PersonName::new(self.last_name)?;
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;

        Ok(CreateUserCommand::new(first_name, last_name, email, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            first_name: "Alice".to_string(),
            last_name: "Jones".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_request_is_normalized_into_command() {
        let command = request(" Alice@X.com", "hunter22")
            .try_into_command()
            .unwrap();

        assert_eq!(command.email.as_str(), "alice@x.com");
        assert_eq!(command.first_name.as_str(), "Alice");
        assert!(command.avatar_url.is_none());
    }

    #[test]
    fn test_short_password_is_rejected() {
        assert!(matches!(
            request("alice@x.com", "abc").try_into_command(),
            Err(UserError::InvalidPassword(_))
        ));
    }

    #[test]
    fn test_bad_email_is_rejected() {
        assert!(matches!(
            request("alice", "hunter22").try_into_command(),
            Err(UserError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_avatar_is_not_part_of_signup() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"first_name":"Alice","last_name":"Jones","email":"alice@x.com",
                "password":"hunter22","avatar_url":"https://x.com/a.png"}"#,
        )
        .unwrap();

        let command = request.try_into_command().unwrap();
        assert!(command.avatar_url.is_none());
    }
}
