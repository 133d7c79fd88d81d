use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use super::MessageResponseData;

pub async fn root() -> ApiSuccess<MessageResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Family Task Planner API"),
    )
}

pub async fn health() -> ApiSuccess<HealthResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            status: "healthy".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponseData {
    pub status: String,
}
