//! Bulk maintenance over both tables.

use serde::Serialize;
use sqlx::SqlitePool;

/// Rows removed by [`MaintenanceRepo::clear_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClearedCounts {
    pub tickets: u64,
    pub projects: u64,
}

pub struct MaintenanceRepo;

impl MaintenanceRepo {
    /// Delete every ticket and then every project, in one transaction.
    pub async fn clear_all(pool: &SqlitePool) -> Result<ClearedCounts, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let tickets = sqlx::query("DELETE FROM chamados")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let projects = sqlx::query("DELETE FROM obras")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        tracing::warn!(tickets, projects, "All tickets and projects deleted");
        Ok(ClearedCounts { tickets, projects })
    }
}
