//! Handler for the dashboard view.
//!
//! Counts and groupings are recomputed from the full ticket and project
//! lists on every request.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use chamados_core::dashboard::{summarize, DashboardSummary, TicketFacts};
use chamados_db::models::ticket::TicketListItem;
use chamados_db::repositories::{ProjectRepo, TicketRepo};
use serde::Serialize;

use super::today;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Dashboard payload: summary cards, chart groupings and the ticket table.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    pub tickets: Vec<TicketListItem>,
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardView>>> {
    let tickets = TicketRepo::list_with_projects(&state.pool).await?;
    let project_names: HashMap<_, _> = ProjectRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    let facts: Vec<TicketFacts> = tickets
        .iter()
        .map(|item| TicketFacts {
            project_id: item.ticket.project_id,
            status: item.ticket.status,
            desired_return_date: item.ticket.desired_return_date,
        })
        .collect();

    let summary = summarize(&facts, &project_names, today());
    tracing::debug!(
        total = summary.counts.total,
        open = summary.counts.open,
        overdue = summary.counts.overdue,
        "Dashboard computed"
    );

    Ok(Json(DataResponse {
        data: DashboardView { summary, tickets },
    }))
}
