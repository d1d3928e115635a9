use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewProject, Project};
use crate::store::{seed, validate, ProjectStore, StoreError};

/// Durable catalog backed by the `projects` table. Ids come from the table's sequence.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the seed list if the table is empty. Returns the number of rows inserted.
    pub async fn seed_if_empty(&self) -> Result<usize, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Serialize concurrent seeders on the table itself.
        sqlx::query("LOCK TABLE projects IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            tx.commit().await?;
            return Ok(0);
        }

        let seeds = seed::seed_projects();
        for project in &seeds {
            sqlx::query("INSERT INTO projects (title, description, image_url) VALUES ($1, $2, $3)")
                .bind(&project.title)
                .bind(&project.description)
                .bind(&project.image_url)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(seeds.len())
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, title, description, image_url FROM projects ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(projects)
    }

    async fn append(&self, project: NewProject) -> Result<Project, StoreError> {
        validate(&project)?;

        let project = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (title, description, image_url) VALUES ($1, $2, $3)
             RETURNING id, title, description, image_url",
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(project)
    }
}
