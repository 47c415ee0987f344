use color_eyre::eyre::eyre;
use sqlx::{postgres::PgRow, PgPool, QueryBuilder, Row};
use uuid::Uuid;

use crate::domain::{
    CompletionFilter, ProjectId, Task, TaskFilter, TaskId, TaskPriority,
    TaskStore, TaskStoreError, UserId,
};

pub struct PostgresTaskStore {
    pool: PgPool,
}

impl PostgresTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn task_from_row(row: &PgRow) -> Result<Task, TaskStoreError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| TaskStoreError::UnexpectedError(e.into()))?;
    let user_id: Uuid = row
        .try_get("user_id")
        .map_err(|e| TaskStoreError::UnexpectedError(e.into()))?;
    let project_id: Option<Uuid> = row
        .try_get("project_id")
        .map_err(|e| TaskStoreError::UnexpectedError(e.into()))?;
    let title: String = row
        .try_get("title")
        .map_err(|e| TaskStoreError::UnexpectedError(e.into()))?;
    let completed: bool = row
        .try_get("completed")
        .map_err(|e| TaskStoreError::UnexpectedError(e.into()))?;
    let priority: String = row
        .try_get("priority")
        .map_err(|e| TaskStoreError::UnexpectedError(e.into()))?;
    let deadline = row
        .try_get("deadline")
        .map_err(|e| TaskStoreError::UnexpectedError(e.into()))?;
    let created_at = row
        .try_get("created_at")
        .map_err(|e| TaskStoreError::UnexpectedError(e.into()))?;

    Ok(Task {
        id: TaskId::new(id),
        user_id: UserId::new(user_id),
        project_id: project_id.map(ProjectId::new),
        title,
        completed,
        priority: TaskPriority::parse(&priority)
            .map_err(|e| TaskStoreError::UnexpectedError(eyre!(e)))?,
        deadline,
        created_at,
    })
}

#[async_trait::async_trait]
impl TaskStore for PostgresTaskStore {
    #[tracing::instrument(name = "Listing tasks from PostgreSQL", skip_all)]
    async fn list_tasks(
        &self,
        user_id: &UserId,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, TaskStoreError> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(
            "SELECT id, user_id, project_id, title, completed, priority, \
             deadline, created_at FROM tasks WHERE user_id = ",
        );
        builder.push_bind(*user_id.as_ref());

        if let Some(search) = &filter.search {
            builder.push(" AND title ILIKE ");
            builder.push_bind(format!("%{search}%"));
        }
        if let Some(status) = &filter.status {
            builder.push(" AND completed = ");
            builder.push_bind(matches!(status, CompletionFilter::Completed));
        }
        builder.push(" ORDER BY created_at DESC");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TaskStoreError::UnexpectedError(e.into()))?;

        rows.iter().map(task_from_row).collect()
    }
}
