//! Ticket (`chamados`) entity model and DTOs.

use chamados_core::error::CoreError;
use chamados_core::ticket::{
    validate_ticket_fields, ReviewOutcome, TicketFields, TicketStatus, MAX_DESCRIPTION_LENGTH,
    MAX_REQUESTER_LENGTH, MAX_TITLE_LENGTH,
};
use chamados_core::types::{Date, DbId, Timestamp};
use chamados_core::workflow::ReviewRequest;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::validation_error;

/// Maximum length of the reviewer's name.
pub const MAX_REVIEWER_LENGTH: u64 = 200;

/// Maximum length of a denial reason.
pub const MAX_DENIAL_REASON_LENGTH: u64 = 2_000;

/// A ticket row from the `chamados` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ticket {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub requester: String,
    pub submitted_at: Timestamp,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: TicketStatus,
    pub desired_return_date: Date,
    pub reviewer: Option<String>,
    pub reviewed_at: Option<Timestamp>,
    #[sqlx(try_from = "Option<String>")]
    pub outcome: ReviewOutcome,
    pub denial_reason: Option<String>,
}

/// A ticket joined with its project's name, for tabular listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TicketListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub ticket: Ticket,
    pub project_name: Option<String>,
}

/// DTO for filing a new ticket.
///
/// Status and timestamps are not part of the form: unknown fields are
/// ignored on deserialization and the server assigns them.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTicket {
    pub project_id: DbId,
    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub title: String,
    #[validate(length(max = MAX_REQUESTER_LENGTH))]
    pub requester: String,
    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,
    pub desired_return_date: Date,
}

impl CreateTicket {
    /// Check length limits, required fields, and the return date against
    /// `today`.
    pub fn validated(&self, today: Date) -> Result<TicketFields, CoreError> {
        self.validate().map_err(validation_error)?;
        validate_ticket_fields(
            self.project_id,
            &self.title,
            &self.requester,
            &self.description,
            self.desired_return_date,
            today,
        )
    }
}

/// DTO for the review form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReviewTicket {
    pub status: Option<TicketStatus>,
    #[validate(length(max = MAX_REVIEWER_LENGTH))]
    pub reviewer: Option<String>,
    pub outcome: Option<ReviewOutcome>,
    #[validate(length(max = MAX_DENIAL_REASON_LENGTH))]
    pub denial_reason: Option<String>,
}

impl ReviewTicket {
    /// Check length limits and borrow the form as a workflow request.
    pub fn validated(&self) -> Result<ReviewRequest<'_>, CoreError> {
        self.validate().map_err(validation_error)?;
        Ok(ReviewRequest {
            status: self.status,
            reviewer: self.reviewer.as_deref(),
            outcome: self.outcome,
            denial_reason: self.denial_reason.as_deref(),
        })
    }
}
