//! Tolerant normalization of externally supplied diagram payloads.
//!
//! Clients may compute a diagram themselves (a preview built in the browser)
//! and submit it alongside the record. That payload is shaped like a
//! [`Diagram`](super::Diagram) but comes from a codebase that can drift from
//! this one, so canonicalization never rejects it: missing or malformed
//! fields degrade to defaults and the result is always a valid diagram.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::model::{Diagram, EDGE_LABEL, Edge, Node, Step, StepCategory};

/// Normalizes an arbitrary diagram-shaped payload into a canonical [`Diagram`].
///
/// This is total: any JSON value, including `null` or a scalar, produces a
/// diagram (possibly empty). `generated_at` is taken from the payload when it
/// parses as RFC 3339, otherwise stamped with the current time.
pub fn canonicalize(raw: &Value) -> Diagram {
    let steps = match raw.get("steps").and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| canonical_step(index, entry))
            .collect(),
        None => Vec::new(),
    };

    let nodes = match raw.get("nodes").and_then(Value::as_array) {
        Some(entries) => entries.iter().map(canonical_node).collect(),
        None => Vec::new(),
    };

    let edges = match raw.get("edges").and_then(Value::as_array) {
        Some(entries) => entries.iter().map(canonical_edge).collect(),
        None => Vec::new(),
    };

    let generated_at = raw
        .get("generated_at")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    Diagram {
        steps,
        nodes,
        edges,
        generated_at,
    }
}

fn canonical_step(index: usize, entry: &Value) -> Step {
    Step {
        id: string_field(entry, "id").unwrap_or_else(|| format!("step_{}", index + 1)),
        number: entry
            .get("number")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(1),
        description: string_field(entry, "description").unwrap_or_default(),
        category: category_field(entry),
    }
}

fn canonical_node(entry: &Value) -> Node {
    let category = category_field(entry);
    Node {
        id: string_field(entry, "id").unwrap_or_default(),
        label: string_field(entry, "label").unwrap_or_default(),
        category,
        // A missing or unknown shape falls back to the category's own.
        shape: entry
            .get("shape")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_else(|| category.shape()),
    }
}

fn canonical_edge(entry: &Value) -> Edge {
    Edge {
        from: string_field(entry, "from").unwrap_or_default(),
        to: string_field(entry, "to").unwrap_or_default(),
        label: string_field(entry, "label").unwrap_or_else(|| EDGE_LABEL.to_string()),
    }
}

fn string_field(entry: &Value, key: &str) -> Option<String> {
    entry.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Reads the category under either its wire name `type` or the spelled-out
/// `category`; anything unrecognized degrades to `process`.
fn category_field(entry: &Value) -> StepCategory {
    ["type", "category"]
        .iter()
        .find_map(|key| entry.get(*key))
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .unwrap_or_default()
}
