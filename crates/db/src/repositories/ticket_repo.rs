//! Repository for the `chamados` table.

use chamados_core::error::CoreError;
use chamados_core::ticket::{ReviewOutcome, TicketFields, TicketStatus};
use chamados_core::types::DbId;
use chamados_core::workflow::{plan_review, ReviewRequest};
use sqlx::SqlitePool;

use crate::error::RepoError;
use crate::models::ticket::{Ticket, TicketListItem};

/// Column list shared across queries, aliased to the model's field names.
const COLUMNS: &str = "id, obra_id AS project_id, titulo AS title, solicitante AS requester, \
     data_solicitacao AS submitted_at, descricao AS description, status, \
     previsao_retorno AS desired_return_date, responsavel_analise AS reviewer, \
     data_analise AS reviewed_at, resultado AS outcome, razao_negativa AS denial_reason";

/// Same columns qualified with the `c` alias, for joins against `obras`.
const JOINED_COLUMNS: &str = "c.id, c.obra_id AS project_id, c.titulo AS title, \
     c.solicitante AS requester, c.data_solicitacao AS submitted_at, \
     c.descricao AS description, c.status, c.previsao_retorno AS desired_return_date, \
     c.responsavel_analise AS reviewer, c.data_analise AS reviewed_at, \
     c.resultado AS outcome, c.razao_negativa AS denial_reason, o.nome_obra AS project_name";

/// Provides filing, listing and review of tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// File a new ticket against an existing project.
    ///
    /// The submission timestamp is taken now and the status is always the
    /// initial pending value. Fails with a validation error when no project
    /// is registered at all, and with not-found when `project_id` is
    /// unknown. Nothing is written on failure.
    pub async fn create(pool: &SqlitePool, input: &TicketFields) -> Result<Ticket, RepoError> {
        let mut tx = pool.begin().await?;

        let (project_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM obras")
            .fetch_one(&mut *tx)
            .await?;
        if project_count == 0 {
            return Err(CoreError::Validation(
                "No projects are registered; register a project before filing a ticket".into(),
            )
            .into());
        }

        let project: Option<(DbId,)> = sqlx::query_as("SELECT id FROM obras WHERE id = ?")
            .bind(input.project_id())
            .fetch_optional(&mut *tx)
            .await?;
        if project.is_none() {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: input.project_id(),
            }
            .into());
        }

        let query = format!(
            "INSERT INTO chamados
                (obra_id, titulo, solicitante, data_solicitacao, descricao, status, previsao_retorno)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let ticket = sqlx::query_as::<_, Ticket>(&query)
            .bind(input.project_id())
            .bind(input.title())
            .bind(input.requester())
            .bind(chrono::Utc::now())
            .bind(input.description())
            .bind(TicketStatus::Pending.label())
            .bind(input.desired_return_date())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(ticket_id = ticket.id, project_id = ticket.project_id, "Ticket filed");
        Ok(ticket)
    }

    /// Find a ticket by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chamados WHERE id = ?");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tickets, most recently submitted first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Ticket>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chamados ORDER BY data_solicitacao DESC, id DESC"
        );
        sqlx::query_as::<_, Ticket>(&query).fetch_all(pool).await
    }

    /// List all tickets with their project names, most recently submitted first.
    pub async fn list_with_projects(pool: &SqlitePool) -> Result<Vec<TicketListItem>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM chamados c
             LEFT JOIN obras o ON o.id = c.obra_id
             ORDER BY c.data_solicitacao DESC, c.id DESC"
        );
        sqlx::query_as::<_, TicketListItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply a review to a ticket.
    ///
    /// The current row is re-read inside the transaction and the request is
    /// checked against the workflow before anything is written. Reviewer,
    /// status, outcome and denial reason are overwritten and the review
    /// timestamp is set to now (last write wins).
    ///
    /// Returns `None` if no ticket with the given `id` exists.
    pub async fn review(
        pool: &SqlitePool,
        id: DbId,
        request: &ReviewRequest<'_>,
    ) -> Result<Option<Ticket>, RepoError> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM chamados WHERE id = ?");
        let Some(current) = sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let decision = plan_review(current.status, request)?;

        let query = format!(
            "UPDATE chamados SET
                status = ?,
                responsavel_analise = ?,
                resultado = ?,
                razao_negativa = ?,
                data_analise = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Ticket>(&query)
            .bind(decision.status.label())
            .bind(&decision.reviewer)
            .bind(decision.outcome.label())
            .bind(&decision.denial_reason)
            .bind(chrono::Utc::now())
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        if let Some(ticket) = &updated {
            tracing::info!(
                ticket_id = ticket.id,
                from = %current.status,
                to = %ticket.status,
                accepted = ticket.outcome == ReviewOutcome::Accepted,
                "Ticket reviewed"
            );
        }
        Ok(updated)
    }
}
