//! Driven port for task persistence adapters and their errors.
//!
//! The listing use-case only reads; scoping by owner happens inside the
//! adapter's query, never by filtering a full-table read in memory.

use async_trait::async_trait;

use crate::domain::{Task, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by task repository adapters.
    pub enum TaskPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "task repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "task repository query failed: {message}",
    }
}

/// Port abstraction over the task store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch the tasks owned by `owner`, newest first.
    ///
    /// The ordering contract (`created_at` descending) belongs to the store
    /// query so clients receive stable results regardless of their own sort
    /// logic. Zero owned tasks is an empty `Vec`, not an error.
    async fn find_by_owner_ordered_by_creation(
        &self,
        owner: &UserId,
    ) -> Result<Vec<Task>, TaskPersistenceError>;
}
