//! Project service.
//!
//! A pass-through over [`ProjectRepository`] that turns "no such row" into
//! [`DbError::NotFound`]. No other validation happens here.

use tracing::{instrument, warn};

use crate::db::{Database, DbError, DbResult, Id, Project, ProjectRepository};

pub struct ProjectService<D: Database> {
    db: D,
}

impl<D: Database> ProjectService<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &D {
        &self.db
    }

    #[instrument(skip(self, project), fields(name = %project.name))]
    pub async fn add_project(&self, project: &Project) -> DbResult<Project> {
        self.db.projects().insert(project).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_all_projects(&self) -> DbResult<Vec<Project>> {
        self.db.projects().fetch_all().await
    }

    /// Fetch a project with all details, failing when the id does not exist.
    #[instrument(skip(self))]
    pub async fn fetch_project_by_id(&self, id: Id) -> DbResult<Project> {
        self.db.projects().fetch_by_id(id).await?.ok_or_else(|| {
            warn!(id, "Project not found");
            DbError::project_not_found(id)
        })
    }

    #[instrument(skip(self, project), fields(id = ?project.id))]
    pub async fn modify_project_details(&self, project: &Project) -> DbResult<()> {
        if !self.db.projects().update(project).await? {
            warn!("Project not found for update");
            return Err(match project.id {
                Some(id) => DbError::project_not_found(id),
                None => DbError::NotFound {
                    entity_type: "Project".to_string(),
                    id: "(none)".to_string(),
                },
            });
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_project(&self, id: Id) -> DbResult<()> {
        if !self.db.projects().delete(id).await? {
            warn!(id, "Project not found for delete");
            return Err(DbError::project_not_found(id));
        }
        Ok(())
    }
}
