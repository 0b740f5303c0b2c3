//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — transport-agnostic error payload.
//! - `Task` and its value types — the listed entity.
//! - `UserId` — the authenticated principal's identity.
//! - `ports` — driving/driven traits at the hexagonal boundary.

pub mod error;
pub mod ports;
pub mod task;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::task::{Task, TaskId, TaskStatus, TaskTitle, TaskValidationError};
pub use self::user::{UserId, UserValidationError};
