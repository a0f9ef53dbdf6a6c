//! Change-request ticket statuses, review outcomes, and filing rules.
//!
//! Status and outcome values are stored as their Portuguese labels, which
//! form part of the on-disk contract of the `chamados` table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Date, DbId};
use crate::validation::{require_max_length, require_non_blank, require_not_before};

/// Maximum length of a ticket title.
pub const MAX_TITLE_LENGTH: u64 = 200;

/// Maximum length of the requester's name or email.
pub const MAX_REQUESTER_LENGTH: u64 = 200;

/// Maximum length of a ticket description.
pub const MAX_DESCRIPTION_LENGTH: u64 = 10_000;

/// Labels older databases used for the initial pending state.
pub const LEGACY_PENDING_LABELS: &[&str] = &["Novo", "Em Análise"];

/// Workflow stage of a ticket.
///
/// Serialized as its label. Deserialization goes through [`TicketStatus::parse`]
/// so legacy labels are accepted and unknown ones report the valid set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TicketStatus {
    /// Queued, waiting for triage.
    #[serde(rename = "Na Fila de Espera")]
    Pending,
    #[serde(rename = "Aprovado")]
    Approved,
    /// Terminal.
    #[serde(rename = "Negado")]
    Denied,
    #[serde(rename = "Em Andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Concluded,
}

impl TicketStatus {
    /// Every status, in workflow order.
    pub const ALL: [TicketStatus; 5] = [
        TicketStatus::Pending,
        TicketStatus::Approved,
        TicketStatus::Denied,
        TicketStatus::InProgress,
        TicketStatus::Concluded,
    ];

    /// The stored label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Na Fila de Espera",
            Self::Approved => "Aprovado",
            Self::Denied => "Negado",
            Self::InProgress => "Em Andamento",
            Self::Concluded => "Concluído",
        }
    }

    /// Parse a stored or submitted label, accepting legacy pending labels.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let value = value.trim();
        if LEGACY_PENDING_LABELS.contains(&value) {
            return Ok(Self::Pending);
        }
        Self::ALL
            .into_iter()
            .find(|s| s.label() == value)
            .ok_or_else(|| {
                let labels: Vec<&str> = Self::ALL.iter().map(|s| s.label()).collect();
                CoreError::Validation(format!(
                    "Invalid status '{value}'. Must be one of: {}",
                    labels.join(", ")
                ))
            })
    }

    /// A denied ticket accepts no further updates.
    pub fn is_terminal(self) -> bool {
        self == Self::Denied
    }

    /// Anything not concluded counts as open on the dashboard.
    pub fn is_open(self) -> bool {
        self != Self::Concluded
    }

    /// The outcome a ticket in this status must carry.
    pub fn implied_outcome(self) -> ReviewOutcome {
        match self {
            Self::Pending => ReviewOutcome::Unset,
            Self::Approved | Self::InProgress | Self::Concluded => ReviewOutcome::Accepted,
            Self::Denied => ReviewOutcome::Denied,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TicketStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// The reviewer's decision. Stored as NULL while unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "Option<String>")]
pub enum ReviewOutcome {
    #[default]
    Unset,
    Accepted,
    Denied,
}

impl ReviewOutcome {
    /// The stored label, or `None` while unset.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Accepted => Some("Aceito"),
            Self::Denied => Some("Negado"),
        }
    }
}

impl TryFrom<Option<String>> for ReviewOutcome {
    type Error = CoreError;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        match value.as_deref().map(str::trim) {
            None | Some("") => Ok(Self::Unset),
            Some("Aceito") => Ok(Self::Accepted),
            Some("Negado") => Ok(Self::Denied),
            Some(other) => Err(CoreError::Validation(format!(
                "Invalid outcome '{other}'. Must be one of: Aceito, Negado"
            ))),
        }
    }
}

impl From<ReviewOutcome> for Option<String> {
    fn from(value: ReviewOutcome) -> Self {
        value.label().map(str::to_string)
    }
}

/// Trimmed, validated fields for a new ticket. Built only by
/// [`validate_ticket_fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketFields {
    project_id: DbId,
    title: String,
    requester: String,
    description: String,
    desired_return_date: Date,
}

impl TicketFields {
    pub fn project_id(&self) -> DbId {
        self.project_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn desired_return_date(&self) -> Date {
        self.desired_return_date
    }
}

/// Validate the filing form. All text fields are required and the desired
/// return date may not lie in the past relative to `today`.
pub fn validate_ticket_fields(
    project_id: DbId,
    title: &str,
    requester: &str,
    description: &str,
    desired_return_date: Date,
    today: Date,
) -> Result<TicketFields, CoreError> {
    let fields = TicketFields {
        project_id,
        title: require_non_blank("Title", title)?,
        requester: require_non_blank("Requester", requester)?,
        description: require_non_blank("Description", description)?,
        desired_return_date,
    };
    require_max_length("Title", &fields.title, MAX_TITLE_LENGTH)?;
    require_max_length("Requester", &fields.requester, MAX_REQUESTER_LENGTH)?;
    require_max_length("Description", &fields.description, MAX_DESCRIPTION_LENGTH)?;
    require_not_before("Desired return date", desired_return_date, today)?;
    Ok(fields)
}
