//! SQLite ProjectRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::db::{DbError, DbResult, Hours, Id, Project, ProjectRepository};

// DECIMAL columns have NUMERIC affinity, so whole values come back as
// INTEGER unless cast.
const SELECT_COLUMNS: &str = "project_id, project_name, \
     CAST(estimated_hours AS REAL) AS estimated_hours, \
     CAST(actual_hours AS REAL) AS actual_hours, \
     difficulty, notes";

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn project_from_row(row: &SqliteRow) -> DbResult<Project> {
    let estimated_hours: Option<f64> = row.try_get("estimated_hours")?;
    let actual_hours: Option<f64> = row.try_get("actual_hours")?;

    Ok(Project {
        id: Some(row.try_get("project_id")?),
        name: row.try_get("project_name")?,
        estimated_hours: estimated_hours.map(Hours::from_f64),
        actual_hours: actual_hours.map(Hours::from_f64),
        difficulty: row.try_get("difficulty")?,
        notes: row.try_get("notes")?,
    })
}

/// Map a by-id statement's row count onto "matched one row or none".
pub(super) fn single_row_affected(rows: u64, id: Id) -> DbResult<bool> {
    match rows {
        0 => Ok(false),
        1 => Ok(true),
        n => Err(DbError::Integrity {
            message: format!("{} rows affected for project ID {}", n, id),
        }),
    }
}

/// Bind value for an hours column; rejects what `DECIMAL(7, 2)` cannot hold.
pub(super) fn hours_column(field: &str, hours: Option<Hours>) -> DbResult<Option<f64>> {
    match hours {
        Some(h) if !h.fits_column() => Err(DbError::Database {
            message: format!("{} {} out of range for DECIMAL(7, 2)", field, h),
        }),
        _ => Ok(hours.map(Hours::to_f64)),
    }
}

impl<'a> ProjectRepository for SqliteProjectRepository<'a> {
    async fn insert(&self, project: &Project) -> DbResult<Project> {
        let estimated_hours = hours_column("estimated_hours", project.estimated_hours)?;
        let actual_hours = hours_column("actual_hours", project.actual_hours)?;

        let id: Id = sqlx::query_scalar(
            "INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes) \
             VALUES (?, ?, ?, ?, ?) RETURNING project_id",
        )
        .bind(&project.name)
        .bind(estimated_hours)
        .bind(actual_hours)
        .bind(project.difficulty)
        .bind(&project.notes)
        .fetch_one(self.pool)
        .await?;

        debug!(id, name = %project.name, "Inserted project");
        Ok(project.clone().with_id(id))
    }

    async fn fetch_all(&self) -> DbResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM project ORDER BY project_id ASC",
            SELECT_COLUMNS
        ))
        .fetch_all(self.pool)
        .await?;

        debug!(count = rows.len(), "Fetched projects");
        rows.iter().map(project_from_row).collect()
    }

    async fn fetch_by_id(&self, id: Id) -> DbResult<Option<Project>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM project WHERE project_id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        debug!(id, found = row.is_some(), "Fetched project by id");
        row.as_ref().map(project_from_row).transpose()
    }

    async fn update(&self, project: &Project) -> DbResult<bool> {
        let Some(id) = project.id else {
            return Ok(false);
        };

        let estimated_hours = hours_column("estimated_hours", project.estimated_hours)?;
        let actual_hours = hours_column("actual_hours", project.actual_hours)?;

        let result = sqlx::query(
            "UPDATE project SET project_name = ?, estimated_hours = ?, actual_hours = ?, \
             difficulty = ?, notes = ? WHERE project_id = ?",
        )
        .bind(&project.name)
        .bind(estimated_hours)
        .bind(actual_hours)
        .bind(project.difficulty)
        .bind(&project.notes)
        .bind(id)
        .execute(self.pool)
        .await?;

        debug!(id, rows = result.rows_affected(), "Updated project");
        single_row_affected(result.rows_affected(), id)
    }

    async fn delete(&self, id: Id) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM project WHERE project_id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        debug!(id, rows = result.rows_affected(), "Deleted project");
        single_row_affected(result.rows_affected(), id)
    }
}
