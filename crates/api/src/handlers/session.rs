//! Handlers for the per-session UI context.

use axum::extract::State;
use axum::Json;
use chamados_core::error::CoreError;
use chamados_core::types::DbId;
use chamados_db::models::ticket::Ticket;
use chamados_db::repositories::{ProjectRepo, TicketRepo};
use serde::{Deserialize, Serialize};

use super::ticket::{ticket_not_found, TicketTransitions};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::session::SessionId;
use crate::response::DataResponse;
use crate::session::{Page, SessionContext};
use crate::state::AppState;

/// Body of `PUT /session`. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateSession {
    pub active_page: Option<Page>,
    pub selected_ticket_id: Option<DbId>,
    #[serde(default)]
    pub clear_selection: bool,
}

/// Everything the review form needs, fetched fresh for this request.
#[derive(Debug, Serialize)]
pub struct ReviewForm {
    pub ticket: Ticket,
    pub project_name: Option<String>,
    pub transitions: TicketTransitions,
}

/// GET /api/v1/session
pub async fn get_session(
    State(state): State<AppState>,
    session: SessionId,
) -> AppResult<Json<SessionContext>> {
    Ok(Json(state.sessions.get(&session.0).await))
}

/// PUT /api/v1/session
///
/// Selecting a ticket that no longer exists clears the selection and
/// returns 404 so the client can ask the user to pick again.
pub async fn update_session(
    State(state): State<AppState>,
    session: SessionId,
    AppJson(input): AppJson<UpdateSession>,
) -> AppResult<Json<SessionContext>> {
    if let Some(ticket_id) = input.selected_ticket_id {
        if TicketRepo::find_by_id(&state.pool, ticket_id).await?.is_none() {
            state.sessions.clear_selection(&session.0).await;
            return Err(ticket_not_found(ticket_id));
        }
    }

    let context = state
        .sessions
        .update(&session.0, |ctx| {
            if input.clear_selection {
                ctx.selected_ticket_id = None;
            }
            if let Some(ticket_id) = input.selected_ticket_id {
                ctx.selected_ticket_id = Some(ticket_id);
                ctx.active_page = Page::Review;
            }
            if let Some(page) = input.active_page {
                ctx.active_page = page;
            }
        })
        .await;
    Ok(Json(context))
}

/// GET /api/v1/session/review-form
pub async fn review_form(
    State(state): State<AppState>,
    session: SessionId,
) -> AppResult<Json<DataResponse<ReviewForm>>> {
    let context = state.sessions.get(&session.0).await;
    let ticket_id = context.selected_ticket_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "No ticket selected for review".into(),
        ))
    })?;

    let Some(ticket) = TicketRepo::find_by_id(&state.pool, ticket_id).await? else {
        tracing::warn!(ticket_id, "Selected ticket no longer exists");
        state.sessions.clear_selection(&session.0).await;
        return Err(ticket_not_found(ticket_id));
    };

    let project_name = ProjectRepo::find_by_id(&state.pool, ticket.project_id)
        .await?
        .map(|p| p.name);
    let transitions = TicketTransitions::for_ticket(&ticket);

    Ok(Json(DataResponse {
        data: ReviewForm {
            ticket,
            project_name,
            transitions,
        },
    }))
}
