use axum::routing::get;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at `/session`. All require the `x-session-id` header.
///
/// ```text
/// GET    /                -> get_session
/// PUT    /                -> update_session
/// GET    /review-form     -> review_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(session::get_session).put(session::update_session))
        .route("/review-form", get(session::review_form))
}
