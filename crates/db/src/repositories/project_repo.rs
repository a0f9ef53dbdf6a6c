//! Repository for the `obras` table.
//!
//! Projects are append-only: there is no update or delete.

use chamados_core::project::ProjectFields;
use chamados_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project::{Project, ProjectOption};

/// Column list shared across queries, aliased to the model's field names.
const COLUMNS: &str = "id, nome_obra AS name, endereco AS address, cidade AS city, estado AS state";

/// Provides registration and lookup for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &ProjectFields) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO obras (nome_obra, endereco, cidade, estado)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(input.name())
            .bind(input.address())
            .bind(input.city())
            .bind(input.state())
            .fetch_one(pool)
            .await?;
        tracing::debug!(project_id = project.id, name = %project.name, "Project registered");
        Ok(project)
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM obras WHERE id = ?");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by name, then ID.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM obras ORDER BY nome_obra ASC, id ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List `(id, name)` pairs for the ticket form's project selector.
    pub async fn list_options(pool: &SqlitePool) -> Result<Vec<ProjectOption>, sqlx::Error> {
        sqlx::query_as::<_, ProjectOption>(
            "SELECT id, nome_obra AS name FROM obras ORDER BY nome_obra ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Count registered projects.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM obras")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
