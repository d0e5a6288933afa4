use sqlx::{Error as SqlxError, error::ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    Connection(#[source] SqlxError),

    #[error("Not connected to the database")]
    NotConnected,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),
}

impl RepositoryError {
    /// Classifies a failure raised while executing a statement.
    pub fn from_statement(err: SqlxError) -> Self {
        let kind = match err.as_database_error() {
            Some(db_err) => db_err.kind(),
            None => return RepositoryError::Sqlx(err),
        };

        let message = err
            .as_database_error()
            .map(|db_err| db_err.message().to_string())
            .unwrap_or_default();

        match kind {
            ErrorKind::UniqueViolation => RepositoryError::AlreadyExists(message),
            ErrorKind::ForeignKeyViolation => RepositoryError::ForeignKey(message),
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                RepositoryError::Constraint(message)
            }
            _ => RepositoryError::Sqlx(err),
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, RepositoryError::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_errors_without_database_detail_stay_sqlx() {
        let err = RepositoryError::from_statement(SqlxError::RowNotFound);

        assert!(matches!(err, RepositoryError::Sqlx(SqlxError::RowNotFound)));
    }

    #[test]
    fn connection_errors_are_reported_as_such() {
        let err = RepositoryError::Connection(SqlxError::PoolTimedOut);

        assert!(err.is_connection());
        assert!(err.to_string().starts_with("Connection error"));
        assert!(!RepositoryError::NotConnected.is_connection());
    }
}
