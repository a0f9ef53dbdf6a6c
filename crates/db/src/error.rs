use chamados_core::error::CoreError;

/// Error returned by repository operations that enforce domain rules inside
/// their transaction (ticket filing and review).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
