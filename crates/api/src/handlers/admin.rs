//! Administrative maintenance handlers.

use axum::extract::State;
use axum::Json;
use chamados_core::error::CoreError;
use chamados_db::repositories::{ClearedCounts, MaintenanceRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// DELETE /api/v1/admin/data
///
/// Wipes every ticket and project. Refused unless `ALLOW_DATA_RESET=true`.
pub async fn clear_data(State(state): State<AppState>) -> AppResult<Json<ClearedCounts>> {
    if !state.config.allow_data_reset {
        return Err(AppError::Core(CoreError::Forbidden(
            "Data reset is disabled on this server".into(),
        )));
    }
    let cleared = MaintenanceRepo::clear_all(&state.pool).await?;
    Ok(Json(cleared))
}
