//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument. Writes that span more than
//! one statement run in a single transaction.

pub mod maintenance_repo;
pub mod project_repo;
pub mod ticket_repo;

pub use maintenance_repo::{ClearedCounts, MaintenanceRepo};
pub use project_repo::ProjectRepo;
pub use ticket_repo::TicketRepo;
