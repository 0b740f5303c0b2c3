//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LoginService, TasksQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Authentication use-case behind the login endpoint.
    pub login: Arc<dyn LoginService>,
    /// Owner-scoped task listing use-case.
    pub tasks: Arc<dyn TasksQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{FixtureLoginService, FixtureTasksQuery};
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureLoginService), Arc::new(FixtureTasksQuery));
    /// let _tasks = state.tasks.clone();
    /// ```
    #[must_use]
    pub fn new(login: Arc<dyn LoginService>, tasks: Arc<dyn TasksQuery>) -> Self {
        Self { login, tasks }
    }
}
