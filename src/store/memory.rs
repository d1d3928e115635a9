use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{NewProject, Project};
use crate::store::{seed, validate, ProjectStore, StoreError};

/// Process-local catalog. Contents are lost when the process exits.
pub struct MemoryProjectStore {
    projects: Mutex<Vec<Project>>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self {
            projects: Mutex::new(Vec::new()),
        }
    }

    /// A store holding the seed list with ids 1, 2, 3.
    pub fn seeded() -> Self {
        let projects = seed::seed_projects()
            .into_iter()
            .zip(1..)
            .map(|(p, id)| p.with_id(id))
            .collect();

        Self {
            projects: Mutex::new(projects),
        }
    }
}

impl Default for MemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.lock().await.clone())
    }

    async fn append(&self, project: NewProject) -> Result<Project, StoreError> {
        validate(&project)?;

        // Id assignment and push happen under one lock so concurrent appends never collide.
        let mut projects = self.projects.lock().await;
        let id = projects.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        let project = project.with_id(id);
        projects.push(project.clone());

        Ok(project)
    }
}
