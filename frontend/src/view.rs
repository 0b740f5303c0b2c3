//! Task list sync view: a state machine over one fetch per mount.
//!
//! The central contract is the trigger discipline: a fetch runs on mount or
//! on an explicit refresh, never because the fetched data changed. Rendering
//! is a pure function of the current state, so no amount of re-rendering can
//! start a request. Each fetch carries a [`FetchTicket`] bound to the fetch
//! generation; a settle whose ticket is stale (the view unmounted, remounted
//! or refreshed while the request was in flight) is discarded instead of
//! being applied to state that no longer exists.

use serde_json::Value;

use crate::api::{FetchError, TasksApi};
use crate::payload::{TaskRow, normalize};

/// Lifecycle of the task list.
///
/// `Idle` (nothing fetched yet) and `Success` with zero rows are distinct:
/// the former renders nothing, the latter renders an explicit empty state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskListState {
    /// Mounted render target with no fetch attempted, or unmounted.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last fetch settled successfully.
    Success(Vec<TaskRow>),
    /// The last fetch settled with a failure; rows are reset so stale data
    /// is never shown alongside an error.
    Failed(String),
}

/// Token tying an in-flight fetch to the mount or refresh that started it.
/// At most one ticket is live at a time; starting a new fetch stales the
/// previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Client-side view over the authenticated task list.
#[derive(Debug, Default)]
pub struct TaskListView {
    state: TaskListState,
    mounted: bool,
    generation: u64,
}

impl TaskListView {
    /// Create an unmounted view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, for callers that render elsewhere.
    #[must_use]
    pub const fn state(&self) -> &TaskListState {
        &self.state
    }

    /// Mount the view and perform its single fetch.
    pub async fn mount(&mut self, api: &dyn TasksApi) {
        let ticket = self.begin_mount();
        let outcome = api.list_tasks().await;
        self.settle(ticket, outcome);
    }

    /// Re-fetch on explicit user action; a no-op when unmounted.
    pub async fn refresh(&mut self, api: &dyn TasksApi) {
        let Some(ticket) = self.begin_refresh() else {
            return;
        };
        let outcome = api.list_tasks().await;
        self.settle(ticket, outcome);
    }

    /// Mount without fetching; the caller drives the request and settles it.
    ///
    /// Remounting invalidates tickets from earlier mounts.
    pub fn begin_mount(&mut self) -> FetchTicket {
        self.mounted = true;
        self.generation += 1;
        self.state = TaskListState::Loading;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Start an explicit refresh, clearing any prior error.
    ///
    /// Returns `None` when the view is not mounted. Starting a refresh
    /// supersedes any fetch still in flight: its ticket goes stale, so a
    /// late settle from it cannot overwrite the refresh's result.
    pub fn begin_refresh(&mut self) -> Option<FetchTicket> {
        if !self.mounted {
            return None;
        }
        self.generation += 1;
        self.state = TaskListState::Loading;
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Unmount the view; in-flight fetches settle into the void.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.state = TaskListState::Idle;
    }

    /// Apply a fetch outcome.
    ///
    /// A stale ticket (unmount or remount happened after the fetch started)
    /// is discarded; applying a late response to state that no longer exists
    /// is the race this guard closes. On every applied path the loading
    /// state ends here, success or failure.
    pub fn settle(&mut self, ticket: FetchTicket, outcome: Result<Value, FetchError>) {
        if !self.mounted || ticket.generation != self.generation {
            tracing::debug!("discarding settle for a stale fetch ticket");
            return;
        }
        self.state = match outcome {
            Ok(body) => TaskListState::Success(normalize(&body)),
            Err(error) => TaskListState::Failed(error.to_string()),
        };
    }

    /// Render the view as display lines; pure, no side effects.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.state {
            TaskListState::Idle => String::new(),
            TaskListState::Loading => "Loading tasks...".to_owned(),
            TaskListState::Failed(message) => format!("Error: {message}"),
            TaskListState::Success(rows) if rows.is_empty() => "No tasks found".to_owned(),
            TaskListState::Success(rows) => rows
                .iter()
                .map(|row| format!("{} - {}", row.title, row.status))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
