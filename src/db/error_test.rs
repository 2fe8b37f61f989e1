//! Tests for database error types.

use crate::db::{DbError, DbResult};

#[test]
fn not_found_error_displays_correctly() {
    let err = DbError::NotFound {
        entity_type: "Project".to_string(),
        id: "42".to_string(),
    };
    assert_eq!(err.to_string(), "Project with ID = 42 does not exist.");
}

#[test]
fn project_not_found_carries_the_id() {
    let err = DbError::project_not_found(999);
    assert!(err.to_string().contains("999"));
    assert!(matches!(err, DbError::NotFound { ref entity_type, .. } if entity_type == "Project"));
}

#[test]
fn database_error_displays_correctly() {
    let err = DbError::Database {
        message: "constraint violation".to_string(),
    };
    assert_eq!(err.to_string(), "Database error: constraint violation");
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "failed to apply migration 0001".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: failed to apply migration 0001"
    );
}

#[test]
fn connection_error_displays_correctly() {
    let err = DbError::Connection {
        message: "unable to open database".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: unable to open database");
}

#[test]
fn integrity_error_displays_correctly() {
    let err = DbError::Integrity {
        message: "2 rows affected".to_string(),
    };
    assert_eq!(err.to_string(), "Integrity violation: 2 rows affected");
}

#[test]
fn sqlx_errors_become_database_errors() {
    let err: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, DbError::Database { .. }));
}

#[test]
fn db_result_err_returns_error() {
    let result: DbResult<i32> = Err(DbError::project_not_found(7));
    assert!(result.is_err());
}
