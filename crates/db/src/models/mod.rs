//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` DTO for the matching form

use chamados_core::error::CoreError;

pub mod project;
pub mod ticket;

/// Flatten `validator` errors into a single [`CoreError::Validation`].
pub(crate) fn validation_error(errors: validator::ValidationErrors) -> CoreError {
    CoreError::Validation(errors.to_string())
}
