//! Session id extractor for handlers that read or change UI context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// Request header carrying the client's session id.
pub const SESSION_HEADER: &str = "x-session-id";

/// Longest session id accepted.
pub const MAX_SESSION_ID_LENGTH: usize = 128;

/// Session id taken from the `x-session-id` header.
///
/// ```ignore
/// async fn my_handler(session: SessionId) -> AppResult<Json<()>> {
///     tracing::debug!(session = %session.0, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionId(pub String);

impl FromRequestParts<AppState> for SessionId {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::BadRequest(format!("Missing {SESSION_HEADER} header")))?;

        if value.len() > MAX_SESSION_ID_LENGTH {
            return Err(AppError::BadRequest(format!(
                "{SESSION_HEADER} must be at most {MAX_SESSION_ID_LENGTH} characters"
            )));
        }

        Ok(SessionId(value.to_string()))
    }
}
