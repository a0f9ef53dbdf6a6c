pub mod admin;
pub mod dashboard;
pub mod health;
pub mod project;
pub mod session;
pub mod ticket;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                          list, register
/// /projects/{id}                     get
///
/// /tickets                           list (with project names), file
/// /tickets/form                      filing form options
/// /tickets/{id}                      get
/// /tickets/{id}/transitions          statuses allowed for review
/// /tickets/{id}/review               review (PUT)
///
/// /dashboard                         summary counts and listing
///
/// /session                           get, update UI context
/// /session/review-form               review form for the selected ticket
///
/// /admin/data                        wipe all data (DELETE, guarded)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tickets", ticket::router())
        .nest("/dashboard", dashboard::router())
        .nest("/session", session::router())
        .nest("/admin", admin::router())
}
