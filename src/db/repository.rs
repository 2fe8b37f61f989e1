//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing the storage
//! backend to be swapped without changing the service or presentation code.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Id, Project},
};

/// Repository for Project operations.
///
/// Each method issues exactly one statement. A missing row is reported through
/// the return value (`None` / `false`), never as an error.
pub trait ProjectRepository {
    /// Insert a project and return it with the id storage assigned.
    fn insert(&self, project: &Project) -> impl Future<Output = DbResult<Project>> + Send;

    /// Get all projects, ordered by id.
    fn fetch_all(&self) -> impl Future<Output = DbResult<Vec<Project>>> + Send;

    /// Get a project by ID.
    fn fetch_by_id(&self, id: Id) -> impl Future<Output = DbResult<Option<Project>>> + Send;

    /// Overwrite every mutable field of the row matching `project.id`.
    ///
    /// Returns `false` when no such row exists.
    fn update(&self, project: &Project) -> impl Future<Output = DbResult<bool>> + Send;

    /// Delete a project by ID. Returns `false` when no such row exists.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<bool>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Projects<'a>: ProjectRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects<'_>;
}
