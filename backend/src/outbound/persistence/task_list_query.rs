//! `TasksQuery` adapter built on a task repository.
//!
//! This adapter carries the authenticated principal into the store read and
//! maps persistence failures to domain errors. Connection failures surface
//! as service-unavailable so an outage is never mistaken for "no tasks".

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{TaskPersistenceError, TaskRepository, TasksQuery};
use crate::domain::{Error, Task, UserId};

/// Repository-backed `TasksQuery` implementation.
#[derive(Clone)]
pub struct TaskListQuery {
    task_repository: Arc<dyn TaskRepository>,
}

impl TaskListQuery {
    /// Create a query adapter over any task repository.
    pub fn new(task_repository: Arc<dyn TaskRepository>) -> Self {
        Self { task_repository }
    }
}

fn map_persistence_error(error: TaskPersistenceError) -> Error {
    match error {
        TaskPersistenceError::Connection { message } => Error::service_unavailable(message),
        TaskPersistenceError::Query { message } => Error::internal(message),
    }
}

#[async_trait]
impl TasksQuery for TaskListQuery {
    async fn list_tasks_for_user(&self, authenticated_user: &UserId) -> Result<Vec<Task>, Error> {
        self.task_repository
            .find_by_owner_ordered_by_creation(authenticated_user)
            .await
            .map_err(map_persistence_error)
    }
}
