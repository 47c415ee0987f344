use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ProjectId, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = Uuid::try_parse(id)
            .map_err(|_| ValidationError::new("Invalid task ID".to_owned()))?;
        Ok(Self(parsed))
    }

    pub fn new(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            other => Err(ValidationError::new(format!(
                "Invalid task priority: {other}"
            ))),
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub user_id: UserId,
    pub project_id: Option<ProjectId>,
    pub title: String,
    pub completed: bool,
    pub priority: TaskPriority,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Which side of the `completed` flag a task listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionFilter {
    Completed,
    Pending,
}

impl CompletionFilter {
    /// Maps the `status` query parameter. Unrecognized values mean "no
    /// filter", matching the original endpoint behaviour.
    pub fn from_query(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(CompletionFilter::Completed),
            "pending" => Some(CompletionFilter::Pending),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, CompletionFilter::Completed)
    }
}

/// Conjunctive task listing filters. An empty `search` string is treated as
/// no search filter at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub status: Option<CompletionFilter>,
}

impl TaskFilter {
    pub fn new(search: Option<String>, status: Option<&str>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            status: status.and_then(CompletionFilter::from_query),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(search) = &self.search {
            if !task
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if task.completed != status.as_bool() {
                return false;
            }
        }
        true
    }
}
