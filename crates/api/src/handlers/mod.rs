pub mod admin;
pub mod dashboard;
pub mod project;
pub mod session;
pub mod ticket;

use chamados_core::types::Date;

/// The current calendar date (UTC) used for return-date checks.
pub(crate) fn today() -> Date {
    chrono::Utc::now().date_naive()
}
