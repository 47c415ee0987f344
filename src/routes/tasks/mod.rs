mod list_tasks;

pub use list_tasks::list_tasks;
