//! Project (work site) registration rules.
//!
//! Projects are append-only: once registered they are never updated or
//! deleted, so the only rules here are the ones applied at registration.

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{normalize_optional, require_max_length, require_non_blank};

/// Maximum length of a project name.
pub const MAX_NAME_LENGTH: u64 = 200;

/// Maximum length of a street address.
pub const MAX_ADDRESS_LENGTH: u64 = 300;

/// Maximum length of a city name.
pub const MAX_CITY_LENGTH: u64 = 120;

/// Maximum length of a state name or abbreviation.
pub const MAX_STATE_LENGTH: u64 = 60;

/// Trimmed, validated registration fields ready to be inserted.
///
/// Only [`validate_project_fields`] builds one, so a value of this type has
/// always passed the registration rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    name: String,
    address: Option<String>,
    city: String,
    state: String,
}

impl ProjectFields {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

/// Validate the registration form. Name, city and state are required;
/// a blank address is stored as absent.
pub fn validate_project_fields(
    name: &str,
    address: Option<&str>,
    city: &str,
    state: &str,
) -> Result<ProjectFields, CoreError> {
    let fields = ProjectFields {
        name: require_non_blank("Project name", name)?,
        address: normalize_optional(address),
        city: require_non_blank("City", city)?,
        state: require_non_blank("State", state)?,
    };
    require_max_length("Project name", &fields.name, MAX_NAME_LENGTH)?;
    if let Some(address) = &fields.address {
        require_max_length("Address", address, MAX_ADDRESS_LENGTH)?;
    }
    require_max_length("City", &fields.city, MAX_CITY_LENGTH)?;
    require_max_length("State", &fields.state, MAX_STATE_LENGTH)?;
    Ok(fields)
}

/// Display name used when a ticket references a project row that cannot be
/// found.
pub fn fallback_project_name(project_id: DbId) -> String {
    format!("Obra #{project_id}")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn valid_fields_are_trimmed() {
        let fields =
            validate_project_fields(" Site A ", Some("  "), "Metropolis ", " NY").unwrap();
        assert_eq!(
            fields,
            ProjectFields {
                name: "Site A".into(),
                address: None,
                city: "Metropolis".into(),
                state: "NY".into(),
            }
        );
    }

    #[test]
    fn overlong_name_rejected() {
        let name = "x".repeat(MAX_NAME_LENGTH as usize + 1);
        let result = validate_project_fields(&name, None, "Metropolis", "NY");
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("Project name"));
    }

    #[test]
    fn accessors_expose_trimmed_values() {
        let fields = validate_project_fields("Site A", Some(" Rua 1 "), "Metropolis", "NY").unwrap();
        assert_eq!(fields.name(), "Site A");
        assert_eq!(fields.address(), Some("Rua 1"));
        assert_eq!(fields.city(), "Metropolis");
        assert_eq!(fields.state(), "NY");
    }

    #[test]
    fn missing_city_rejected() {
        let result = validate_project_fields("Site A", None, "", "NY");
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("City"));
    }

    #[test]
    fn missing_state_rejected() {
        let result = validate_project_fields("Site A", Some("Rua 1"), "Metropolis", " ");
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("State"));
    }

    #[test]
    fn blank_name_rejected() {
        assert!(validate_project_fields("\t", None, "Metropolis", "NY").is_err());
    }

    #[test]
    fn fallback_name_uses_id() {
        assert_eq!(fallback_project_name(7), "Obra #7");
    }
}
