use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Extension type carrying the account resolved from the bearer token
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves the bearer token into a user and adds it to request extensions.
///
/// A missing credential answers 403; a credential that does not resolve answers 401.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&req)?.to_string();

    let user = state.auth_service.resolve_bearer(&token).await.map_err(|e| {
        tracing::debug!(error = %e, "Bearer token rejected");
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::Forbidden(NOT_AUTHENTICATED.to_string()))?;

    parse_bearer(value).ok_or_else(|| ApiError::Forbidden(NOT_AUTHENTICATED.to_string()))
}

/// Split `<scheme> <credentials>`; the scheme match is case-insensitive.
fn parse_bearer(value: &str) -> Option<&str> {
    let (scheme, credentials) = value.trim().split_once(' ')?;
    let credentials = credentials.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !credentials.is_empty() {
        Some(credentials)
    } else {
        None
    }
}
