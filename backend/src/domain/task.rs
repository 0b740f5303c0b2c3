//! Task data model.
//!
//! A task is one unit of work owned by exactly one principal. The store
//! assigns identifiers and creation timestamps; the rest of the system only
//! reads tasks, so the type is immutable after construction.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Store-assigned task identifier.
///
/// Opaque to callers; ordering or arithmetic on the inner value carries no
/// meaning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier for persistence adapters.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors returned by [`TaskTitle::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The supplied title was empty or whitespace.
    EmptyTitle,
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl std::error::Error for TaskValidationError {}

/// Human-readable task title; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Validate and construct a title.
    pub fn new(raw: impl Into<String>) -> Result<Self, TaskValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<TaskTitle> for String {
    fn from(value: TaskTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for TaskTitle {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Closed task lifecycle enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Created but not started.
    Pending,
    /// Actively worked on.
    InProgress,
    /// Finished.
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        };
        f.write_str(label)
    }
}

/// One unit of work owned by a principal.
///
/// ## Serialisation contract
/// Serialised camelCase; `createdAt` is RFC 3339. This is the exact shape
/// the task listing endpoint returns per element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Human-readable title.
    pub title: TaskTitle,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Owning principal; set at creation and immutable.
    pub owner_id: UserId,
    /// Creation timestamp; the sole sort key for listings.
    pub created_at: DateTime<Utc>,
}
