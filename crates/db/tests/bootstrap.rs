//! Schema bootstrap and legacy-file adoption tests.

use chamados_core::ticket::{ReviewOutcome, TicketStatus};
use chamados_db::repositories::TicketRepo;
use sqlx::SqlitePool;

/// Full bootstrap: connect, migrate, verify both tables are queryable.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    chamados_db::health_check(&pool).await.unwrap();

    for table in ["obras", "chamados"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The ticket table must reject rows without a project.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_obra_id_is_not_null(pool: SqlitePool) {
    let result = sqlx::query(
        "INSERT INTO chamados (obra_id, titulo, solicitante, data_solicitacao, descricao, status, previsao_retorno)
         VALUES (NULL, 't', 'r', '2026-10-19T00:00:00+00:00', 'd', 'Na Fila de Espera', '2026-10-20')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}

/// The foreign key on `obra_id` is enforced.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_obra_id_foreign_key_enforced(pool: SqlitePool) {
    let result = sqlx::query(
        "INSERT INTO chamados (obra_id, titulo, solicitante, data_solicitacao, descricao, status, previsao_retorno)
         VALUES (4242, 't', 'r', '2026-10-19T00:00:00+00:00', 'd', 'Na Fila de Espera', '2026-10-20')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}

const LEGACY_SCHEMA: &str = "
    CREATE TABLE obras (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nome_obra TEXT NOT NULL,
        endereco TEXT,
        cidade TEXT NOT NULL,
        estado TEXT NOT NULL
    );
    CREATE TABLE chamados (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        obra_id INTEGER,
        titulo TEXT NOT NULL,
        solicitante TEXT NOT NULL,
        data_solicitacao TEXT NOT NULL,
        descricao TEXT NOT NULL,
        status TEXT NOT NULL,
        previsao_retorno TEXT,
        responsavel_analise TEXT,
        resultado TEXT,
        razao_negativa TEXT,
        FOREIGN KEY (obra_id) REFERENCES obras(id)
    );
";

/// A database written by the first release is adopted: date-only stamps
/// are widened and legacy labels still decode.
#[sqlx::test(migrations = false)]
async fn test_legacy_database_is_migrated(pool: SqlitePool) {
    sqlx::raw_sql(LEGACY_SCHEMA).execute(&pool).await.unwrap();
    sqlx::raw_sql(
        "INSERT INTO obras (nome_obra, cidade, estado) VALUES ('Site A', 'Metropolis', 'NY');
         INSERT INTO chamados (obra_id, titulo, solicitante, data_solicitacao, descricao, status, previsao_retorno, resultado, razao_negativa)
         VALUES (1, 'Leak', 'alice@x.com', '2025-03-01', 'Water', 'Novo', '2025-03-10', '', '');",
    )
    .execute(&pool)
    .await
    .unwrap();

    chamados_db::run_migrations(&pool).await.unwrap();

    let ticket = TicketRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(ticket.status, TicketStatus::Pending);
    assert_eq!(ticket.outcome, ReviewOutcome::Unset);
    assert_eq!(ticket.denial_reason, None);
    assert_eq!(ticket.reviewed_at, None);
    assert_eq!(ticket.submitted_at.date_naive().to_string(), "2025-03-01");
}

/// Legacy tickets without a project abort the migration.
#[sqlx::test(migrations = false)]
async fn test_legacy_ticket_without_project_is_rejected(pool: SqlitePool) {
    sqlx::raw_sql(LEGACY_SCHEMA).execute(&pool).await.unwrap();
    sqlx::raw_sql(
        "INSERT INTO chamados (obra_id, titulo, solicitante, data_solicitacao, descricao, status, previsao_retorno)
         VALUES (NULL, 'Orphan', 'bob', '2025-03-01', 'No site', 'Novo', '2025-03-10');",
    )
    .execute(&pool)
    .await
    .unwrap();

    assert!(chamados_db::run_migrations(&pool).await.is_err());

    // The legacy row is still there, untouched.
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chamados")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}
