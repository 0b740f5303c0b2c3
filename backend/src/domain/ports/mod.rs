//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod task_repository;
mod tasks_query;

pub use login_service::{
    FIXTURE_USER_ID, FixtureLoginService, LoginCredentials, LoginService, LoginValidationError,
};
#[cfg(test)]
pub use task_repository::MockTaskRepository;
pub use task_repository::{TaskPersistenceError, TaskRepository};
#[cfg(test)]
pub use tasks_query::MockTasksQuery;
pub use tasks_query::{FixtureTasksQuery, TasksQuery};
