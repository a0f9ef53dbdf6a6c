//! Handlers for the `/tickets` resource: filing, listing, and review.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chamados_core::error::CoreError;
use chamados_core::ticket::TicketStatus;
use chamados_core::types::{Date, DbId};
use chamados_core::workflow::allowed_targets;
use chamados_db::models::project::ProjectOption;
use chamados_db::models::ticket::{CreateTicket, ReviewTicket, Ticket, TicketListItem};
use chamados_db::repositories::{ProjectRepo, TicketRepo};
use serde::Serialize;

use super::today;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// Options for rendering the ticket filing form.
#[derive(Debug, Serialize)]
pub struct TicketFormOptions {
    pub projects: Vec<ProjectOption>,
    /// Earliest acceptable desired return date.
    pub min_desired_return_date: Date,
    /// False while no project is registered.
    pub can_submit: bool,
}

/// The statuses a reviewer may pick for a ticket.
#[derive(Debug, Serialize)]
pub struct TicketTransitions {
    pub ticket_id: DbId,
    pub current: TicketStatus,
    pub allowed: Vec<TicketStatus>,
    pub is_terminal: bool,
}

impl TicketTransitions {
    pub fn for_ticket(ticket: &Ticket) -> Self {
        Self {
            ticket_id: ticket.id,
            current: ticket.status,
            allowed: allowed_targets(ticket.status).to_vec(),
            is_terminal: ticket.status.is_terminal(),
        }
    }
}

pub(crate) fn ticket_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Ticket",
        id,
    })
}

/// GET /api/v1/tickets/form
pub async fn form_options(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TicketFormOptions>>> {
    let projects = ProjectRepo::list_options(&state.pool).await?;
    let can_submit = !projects.is_empty();
    Ok(Json(DataResponse {
        data: TicketFormOptions {
            projects,
            min_desired_return_date: today(),
            can_submit,
        },
    }))
}

/// POST /api/v1/tickets
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTicket>,
) -> AppResult<(StatusCode, Json<Ticket>)> {
    let fields = input.validated(today())?;
    let ticket = TicketRepo::create(&state.pool, &fields).await?;
    tracing::info!(ticket_id = ticket.id, project_id = ticket.project_id, "Ticket filed");
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// GET /api/v1/tickets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TicketListItem>>> {
    let tickets = TicketRepo::list_with_projects(&state.pool).await?;
    Ok(Json(tickets))
}

/// GET /api/v1/tickets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Ticket>> {
    let ticket = TicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ticket_not_found(id))?;
    Ok(Json(ticket))
}

/// GET /api/v1/tickets/{id}/transitions
pub async fn transitions(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<TicketTransitions>> {
    let ticket = TicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ticket_not_found(id))?;
    Ok(Json(TicketTransitions::for_ticket(&ticket)))
}

/// PUT /api/v1/tickets/{id}/review
pub async fn review(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ReviewTicket>,
) -> AppResult<Json<Ticket>> {
    let request = input.validated()?;
    let ticket = TicketRepo::review(&state.pool, id, &request)
        .await?
        .ok_or_else(|| ticket_not_found(id))?;
    Ok(Json(ticket))
}
