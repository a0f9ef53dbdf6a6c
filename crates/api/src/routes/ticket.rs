//! Route definitions for the `/tickets` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::ticket;
use crate::state::AppState;

/// Routes mounted at `/tickets`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /form                -> form_options
/// GET    /{id}                -> get_by_id
/// GET    /{id}/transitions    -> transitions
/// PUT    /{id}/review         -> review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ticket::list).post(ticket::create))
        .route("/form", get(ticket::form_options))
        .route("/{id}", get(ticket::get_by_id))
        .route("/{id}/transitions", get(ticket::transitions))
        .route("/{id}/review", put(ticket::review))
}
