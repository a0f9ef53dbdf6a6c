//! Review state machine for change-request tickets.
//!
//! ```text
//! Na Fila de Espera ──► Aprovado ──► Em Andamento ──► Concluído
//!         │                 └──────────────────────────►┘
//!         └──► Negado (terminal)
//! ```
//!
//! Re-selecting the current status is always allowed except for `Negado`,
//! which accepts no update at all.

use crate::error::CoreError;
use crate::ticket::{ReviewOutcome, TicketStatus};
use crate::validation::normalize_optional;

/// Targets reachable from `from`, including `from` itself where a
/// re-application is allowed.
pub fn allowed_targets(from: TicketStatus) -> &'static [TicketStatus] {
    use crate::ticket::TicketStatus::*;
    match from {
        Pending => &[Pending, Approved, Denied],
        Approved => &[Approved, InProgress, Concluded],
        InProgress => &[InProgress, Concluded],
        Concluded => &[Concluded],
        Denied => &[],
    }
}

/// Whether a review may move a ticket from `from` to `to`.
pub fn can_transition(from: TicketStatus, to: TicketStatus) -> bool {
    allowed_targets(from).contains(&to)
}

/// A reviewer's submission, as received from the review form.
#[derive(Debug, Clone, Default)]
pub struct ReviewRequest<'a> {
    pub status: Option<TicketStatus>,
    pub reviewer: Option<&'a str>,
    pub outcome: Option<ReviewOutcome>,
    pub denial_reason: Option<&'a str>,
}

/// The values to write back once a review has been accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDecision {
    pub status: TicketStatus,
    pub outcome: ReviewOutcome,
    pub reviewer: Option<String>,
    pub denial_reason: Option<String>,
}

/// Decide the outcome of a review against a ticket currently in `current`.
///
/// - A denied ticket is immutable and a target outside
///   [`allowed_targets`] is rejected with [`CoreError::Conflict`].
/// - A target of `Negado` needs a non-blank denial reason.
/// - A supplied outcome must agree with the target status; an unset
///   outcome is treated as not supplied.
/// - The denial reason is dropped for every other target.
pub fn plan_review(
    current: TicketStatus,
    request: &ReviewRequest<'_>,
) -> Result<ReviewDecision, CoreError> {
    if current.is_terminal() {
        return Err(CoreError::Conflict(format!(
            "Ticket is '{current}' and can no longer be changed"
        )));
    }

    let Some(target) = request.status else {
        return Err(CoreError::Validation("Status is required".into()));
    };

    if !can_transition(current, target) {
        return Err(CoreError::Conflict(format!(
            "Cannot move a ticket from '{current}' to '{target}'"
        )));
    }

    let outcome = target.implied_outcome();
    match request.outcome {
        Some(given) if given != ReviewOutcome::Unset && given != outcome => {
            return Err(CoreError::Validation(format!(
                "Outcome '{}' does not match status '{target}'",
                given.label().unwrap_or_default()
            )));
        }
        _ => {}
    }

    let denial_reason = if target == TicketStatus::Denied {
        let reason = normalize_optional(request.denial_reason).ok_or_else(|| {
            CoreError::Validation("A denial reason is required when denying a ticket".into())
        })?;
        Some(reason)
    } else {
        None
    };

    Ok(ReviewDecision {
        status: target,
        outcome,
        reviewer: normalize_optional(request.reviewer),
        denial_reason,
    })
}
