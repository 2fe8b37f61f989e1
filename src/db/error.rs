//! Database error types.
//!
//! Storage-backend agnostic errors for the data access and service layers.
//! Uses miette for diagnostic output and thiserror for the derives.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("{entity_type} with ID = {id} does not exist.")]
    #[diagnostic(code(projects::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(projects::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(projects::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(projects::db::connection_error),
        help("Check that the database path is writable, or pass --db to choose another file.")
    )]
    Connection { message: String },

    #[error("Integrity violation: {message}")]
    #[diagnostic(code(projects::db::integrity))]
    Integrity { message: String },
}

impl DbError {
    /// Not-found error for a project id.
    pub fn project_not_found(id: i64) -> Self {
        DbError::NotFound {
            entity_type: "Project".to_string(),
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        DbError::Database {
            message: e.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
