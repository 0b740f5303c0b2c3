//! Driving port for the authenticated task listing use-case.
//!
//! Inbound adapters call this port with the authenticated principal as an
//! explicit argument; the principal is never read from ambient state, so the
//! authorisation scope is testable with fake identities.

use async_trait::async_trait;

use crate::domain::{Error, Task, UserId};

/// Domain use-case port for listing the caller's tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TasksQuery: Send + Sync {
    /// List the tasks owned by `authenticated_user`, newest first.
    ///
    /// Store failures surface as errors; they are never collapsed into an
    /// empty success, which would hide an outage as "no tasks".
    async fn list_tasks_for_user(&self, authenticated_user: &UserId) -> Result<Vec<Task>, Error>;
}

/// Fixture query implementation for wiring without persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTasksQuery;

#[async_trait]
impl TasksQuery for FixtureTasksQuery {
    async fn list_tasks_for_user(&self, _authenticated_user: &UserId) -> Result<Vec<Task>, Error> {
        Ok(Vec::new())
    }
}
