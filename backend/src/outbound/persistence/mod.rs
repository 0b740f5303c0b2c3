//! Persistence adapters implementing the domain's store ports.

mod memory_task_repository;
mod task_list_query;

pub use memory_task_repository::{InMemoryTaskRepository, TaskDraft};
pub use task_list_query::TaskListQuery;
