//! Client for the session-authenticated task listing endpoint.
//!
//! `view` holds the fetch state machine and render contract, `api` the
//! transport port and its reqwest adapter, `payload` the tolerant response
//! normalization that runs between the two.

pub mod api;
pub mod payload;
pub mod view;

pub use api::{FetchError, HttpTasksApi, TasksApi};
pub use payload::{RowId, TaskRow};
pub use view::{FetchTicket, TaskListState, TaskListView};
