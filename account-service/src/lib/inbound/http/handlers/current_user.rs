use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::inbound::http::middleware::CurrentUser;
use crate::user::errors::UserError;
use crate::user::errors::UserIdError;

/// Return the account resolved by the bearer gate.
pub async fn current_user(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiSuccess<UserResponseData> {
    ApiSuccess::new(StatusCode::OK, (&user).into())
}

/// `PUT`/`DELETE` on `me` answer as for any other non-integer user id.
pub async fn reject_me_as_user_id() -> ApiError {
    UserError::from(UserIdError::InvalidFormat("me".to_string())).into()
}
