//! Domain logic for the project and change-request ticket service.
//!
//! Everything in this crate is pure: no database, no HTTP. The `db` crate
//! persists what these modules validate, and the `api` crate maps
//! [`error::CoreError`] onto HTTP responses.

pub mod dashboard;
pub mod error;
pub mod project;
pub mod ticket;
pub mod types;
pub mod validation;
pub mod workflow;
