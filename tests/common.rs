//! Common test utilities for building pages.
use sheetflow::prelude::*;

/// Shortcut for a shape record.
#[allow(dead_code)]
pub fn shape(id: &str, kind: &str, text: &str) -> ShapeRecord {
    ShapeRecord::new(id, kind, text)
}

#[allow(dead_code)]
pub fn begin(group: &str, target: &str) -> ConnectorRecord {
    ConnectorRecord::new(group, target, ConnectorRole::Begin)
}

#[allow(dead_code)]
pub fn end(group: &str, target: &str) -> ConnectorRecord {
    ConnectorRecord::new(group, target, ConnectorRole::End)
}

/// Two activities, one annotation and a connector to the annotation.
///
/// Logic: `task_1 -> task_2` via group `c1`; group `c2` points at the helper shape.
#[allow(dead_code)]
pub fn create_approval_page() -> PageDefinition {
    PageDefinition {
        name: Some("Approval".to_string()),
        shapes: vec![
            shape("1", "Task", " Approve "),
            shape("2", "Task", "Archive"),
            shape("3", "Shape", "note"),
        ],
        connectors: vec![begin("c1", "1"), end("c1", "2"), begin("c2", "3")],
    }
}

/// A four-step chain with a branch, using numeric ids like real exports.
///
/// Logic: `1 -> 2`, `2 -> 3`, `2 -> 4`; group `13` only has a begin.
#[allow(dead_code)]
pub fn create_branching_page() -> PageDefinition {
    PageDefinition {
        name: Some("Orders".to_string()),
        shapes: vec![
            shape("1", "Process", "Receive order"),
            shape("2", "Decision", "In stock?"),
            shape("3", "Process", "Ship"),
            shape("4", "Process", "Back-order"),
            shape("9", "Shape", "handled by warehouse"),
        ],
        connectors: vec![
            begin("10", "1"),
            end("10", "2"),
            end("11", "3"),
            begin("11", "2"),
            begin("12", "2"),
            ConnectorRecord::new("12", "4", ConnectorRole::Other("PinX".to_string())),
            end("12", "4"),
            begin("13", "4"),
        ],
    }
}

/// Pairs of (id, source_ref, target_ref) for easy comparison.
#[allow(dead_code)]
pub fn flow_triples(process: &Process) -> Vec<(String, String, String)> {
    process
        .flows()
        .iter()
        .map(|f| {
            (
                f.id().to_string(),
                f.source_ref().to_string(),
                f.target_ref().to_string(),
            )
        })
        .collect()
}
