//! Tolerant normalization of the task listing response body.
//!
//! The endpoint returns either a bare JSON array of tasks or an envelope
//! exposing the array under a `data` key. Anything else normalizes to an
//! empty sequence: a display surface degrades on an unexpected payload, it
//! does not crash. Normalization runs before any rendering logic so the
//! render function stays total.

use serde_json::Value;

/// Row identifier as received on the wire; opaque, integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowId {
    /// Numeric identifier.
    Int(i64),
    /// String identifier.
    Text(String),
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(raw) => write!(f, "{raw}"),
            Self::Text(raw) => f.write_str(raw),
        }
    }
}

/// One renderable task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Render key; unique within one response.
    pub id: RowId,
    /// Title as received.
    pub title: String,
    /// Status label as received.
    pub status: String,
}

/// Normalize a response body into renderable rows.
///
/// Accepts a bare array or a `{"data": [...]}` envelope; any other shape
/// yields an empty sequence. Rows missing an id, title, or status are
/// dropped. Duplicate ids are kept but logged, since reused render keys are
/// a server-side defect worth surfacing.
#[must_use]
pub fn normalize(body: &Value) -> Vec<TaskRow> {
    let items = match body {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => {
                tracing::warn!("task payload envelope missing a data array; rendering empty");
                return Vec::new();
            }
        },
        _ => {
            tracing::warn!("task payload is neither array nor envelope; rendering empty");
            return Vec::new();
        }
    };

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        match decode_row(item) {
            Some(row) => rows.push(row),
            None => tracing::warn!("dropping task row without id, title, and status"),
        }
    }

    let mut seen = std::collections::HashSet::new();
    for row in &rows {
        if !seen.insert(row.id.clone()) {
            tracing::warn!(id = %row.id, "duplicate task id in one response");
        }
    }

    rows
}

fn decode_row(item: &Value) -> Option<TaskRow> {
    let id = match item.get("id")? {
        Value::Number(raw) => RowId::Int(raw.as_i64()?),
        Value::String(raw) => RowId::Text(raw.clone()),
        _ => return None,
    };
    let title = item.get("title")?.as_str()?.to_owned();
    let status = item.get("status")?.as_str()?.to_owned();
    Some(TaskRow { id, title, status })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn accepts_a_bare_array() {
        let rows = normalize(&json!([
            { "id": 1, "title": "A", "status": "pending" },
            { "id": 2, "title": "B", "status": "done" }
        ]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "A");
        assert_eq!(rows[1].status, "done");
    }

    #[test]
    fn accepts_a_data_envelope() {
        let rows = normalize(&json!({
            "data": [{ "id": "t-9", "title": "C", "status": "in-progress" }]
        }));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, RowId::Text("t-9".into()));
    }

    #[rstest]
    #[case(json!({ "tasks": [] }))]
    #[case(json!({ "data": "nope" }))]
    #[case(json!("plain string"))]
    #[case(json!(42))]
    #[case(json!(null))]
    fn other_shapes_normalize_to_empty(#[case] body: serde_json::Value) {
        assert!(normalize(&body).is_empty());
    }

    #[test]
    fn drops_rows_missing_required_fields() {
        let rows = normalize(&json!([
            { "id": 1, "title": "kept", "status": "pending" },
            { "id": 2, "title": "no status" },
            { "title": "no id", "status": "pending" },
            { "id": true, "title": "bad id", "status": "pending" }
        ]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "kept");
    }

    #[test]
    fn keeps_duplicate_ids_in_order() {
        let rows = normalize(&json!([
            { "id": 1, "title": "first", "status": "pending" },
            { "id": 1, "title": "second", "status": "done" }
        ]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "first");
    }
}
