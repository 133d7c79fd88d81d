use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 100;

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsersParams>,
) -> Result<ApiSuccess<Vec<UserResponseData>>, ApiError> {
    state
        .user_service
        .list_users(params.skip, params.limit.min(MAX_LIMIT))
        .await
        .map_err(ApiError::from)
        .map(|users| ApiSuccess::new(StatusCode::OK, users.iter().map(Into::into).collect()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListUsersParams {
    #[serde(default)]
    skip: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
