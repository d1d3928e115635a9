pub mod memory;
pub mod postgres;
pub mod seed;

use async_trait::async_trait;

use crate::models::{NewProject, Project};

pub use memory::MemoryProjectStore;
pub use postgres::PgProjectStore;

/// Storage for the project catalog. Handlers only ever see this trait.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// All projects in insertion order.
    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    /// Validate and append a project, returning it with its assigned id.
    /// Nothing is written when validation fails.
    async fn append(&self, project: NewProject) -> Result<Project, StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    /// A required field is absent or empty.
    InvalidInput,
    Database(sqlx::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidInput => {
                write!(f, "Invalid input: title, description and image_url are required")
            }
            StoreError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

pub(crate) fn validate(project: &NewProject) -> Result<(), StoreError> {
    if !project.is_complete() {
        return Err(StoreError::InvalidInput);
    }
    Ok(())
}
