//! Project (`obras`) entity model and DTOs.

use chamados_core::error::CoreError;
use chamados_core::project::{
    validate_project_fields, ProjectFields, MAX_ADDRESS_LENGTH, MAX_CITY_LENGTH,
    MAX_NAME_LENGTH, MAX_STATE_LENGTH,
};
use chamados_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::validation_error;

/// A project row from the `obras` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
}

/// DTO for registering a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(max = MAX_NAME_LENGTH))]
    pub name: String,
    #[validate(length(max = MAX_ADDRESS_LENGTH))]
    pub address: Option<String>,
    #[validate(length(max = MAX_CITY_LENGTH))]
    pub city: String,
    #[validate(length(max = MAX_STATE_LENGTH))]
    pub state: String,
}

impl CreateProject {
    /// Check length limits and required fields, returning trimmed values.
    pub fn validated(&self) -> Result<ProjectFields, CoreError> {
        self.validate().map_err(validation_error)?;
        validate_project_fields(
            &self.name,
            self.address.as_deref(),
            &self.city,
            &self.state,
        )
    }
}

/// A project as offered by the ticket form's project selector.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectOption {
    pub id: DbId,
    pub name: String,
}
