//! In-memory task repository adapter.
//!
//! Backs the store port without external infrastructure: rows live in an
//! `RwLock`, identifiers are assigned sequentially at insertion, and reads
//! scope by owner inside the adapter so no caller ever sees another
//! principal's rows.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{TaskPersistenceError, TaskRepository};
use crate::domain::{Task, TaskId, TaskStatus, TaskTitle, UserId};

/// Insertable task payload; the repository assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Human-readable title (non-empty by construction).
    pub title: TaskTitle,
    /// Initial lifecycle status.
    pub status: TaskStatus,
    /// Owning principal.
    pub owner_id: UserId,
    /// Creation timestamp recorded for the row.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    tasks: Vec<Task>,
}

/// Task repository holding rows in process memory.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    rows: RwLock<Rows>,
}

impl InMemoryTaskRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, assigning the next sequential identifier.
    ///
    /// Creation and mutation belong to collaborators outside the listing
    /// use-case; this entry point exists for seeding and tests.
    pub fn insert(&self, draft: TaskDraft) -> Result<Task, TaskPersistenceError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| TaskPersistenceError::connection("task store lock poisoned"))?;
        rows.next_id += 1;
        let task = Task {
            id: TaskId::new(rows.next_id),
            title: draft.title,
            status: draft.status,
            owner_id: draft.owner_id,
            created_at: draft.created_at,
        };
        rows.tasks.push(task.clone());
        Ok(task)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_owner_ordered_by_creation(
        &self,
        owner: &UserId,
    ) -> Result<Vec<Task>, TaskPersistenceError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| TaskPersistenceError::connection("task store lock poisoned"))?;
        let mut owned: Vec<Task> = rows
            .tasks
            .iter()
            .filter(|task| task.owner_id == *owner)
            .cloned()
            .collect();
        // Later insertion wins ties so equal timestamps still order stably.
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(owned)
    }
}
