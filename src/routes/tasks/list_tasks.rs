use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{APIError, Task, TaskFilter},
    utils::auth::require_principal,
    AppState,
};

#[tracing::instrument(name = "List tasks route handler", skip_all)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar, Json<Vec<TaskBody>>), APIError> {
    let principal =
        require_principal(&jar, &state.session_cache, &state.auth_client)
            .await?;

    let filter = TaskFilter::new(query.search, query.status.as_deref());

    let tasks = state
        .task_store
        .read()
        .await
        .list_tasks(&principal.id, &filter)
        .await
        .map_err(|e| APIError::StorageError(eyre!(e)))?;

    let response = Json(tasks.iter().map(TaskBody::from).collect());

    Ok((StatusCode::OK, jar, response))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct ListTasksQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskBody {
    pub id: uuid::Uuid,
    #[serde(rename = "userId")]
    pub user_id: uuid::Uuid,
    #[serde(rename = "projectId")]
    pub project_id: Option<uuid::Uuid>,
    pub title: String,
    pub completed: bool,
    pub priority: String,
    pub deadline: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<&Task> for TaskBody {
    fn from(task: &Task) -> Self {
        Self {
            id: *task.id.as_ref(),
            user_id: *task.user_id.as_ref(),
            project_id: task.project_id.as_ref().map(|id| *id.as_ref()),
            title: task.title.clone(),
            completed: task.completed,
            priority: task.priority.as_str().to_owned(),
            deadline: task.deadline.map(|d| d.to_rfc3339()),
            created_at: task.created_at.to_rfc3339(),
        }
    }
}
