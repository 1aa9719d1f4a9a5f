/// Repository errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No connection string was configured for the storage backend.
    #[error("repository.configuration")]
    Configuration,
    /// Any database-level failure: connectivity, query, or write rejection.
    #[error("repository.database_error")]
    Database,
}
