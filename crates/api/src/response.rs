//! Shared response envelope types for API handlers.
//!
//! Aggregated views (dashboard, form options) use a `{ "data": ... }`
//! envelope; single entities and plain listings are returned bare.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: summary }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
