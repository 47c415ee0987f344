use crate::domain::{Task, TaskFilter, TaskStore, TaskStoreError, UserId};

#[derive(Default)]
pub struct HashmapTaskStore {
    tasks: Vec<Task>,
}

impl HashmapTaskStore {
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }
}

#[async_trait::async_trait]
impl TaskStore for HashmapTaskStore {
    async fn list_tasks(
        &self,
        user_id: &UserId,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, TaskStoreError> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| &task.user_id == user_id)
            .filter(|task| filter.matches(task))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }
}
