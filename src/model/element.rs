use serde::{Deserialize, Serialize};
use std::fmt;

pub const TASK_ID_PREFIX: &str = "task_";
pub const FLOW_ID_PREFIX: &str = "flow_";

/// An activity derived from a non-helper shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    id: String,
    label: String,
}

impl Task {
    /// Derives the task for a shape. The label is the shape text with
    /// surrounding whitespace removed.
    pub(crate) fn from_shape(shape_id: &str, text: &str) -> Self {
        Self {
            id: Self::id_for_shape(shape_id),
            label: text.trim().to_string(),
        }
    }

    pub fn id_for_shape(shape_id: &str) -> String {
        format!("{}{}", TASK_ID_PREFIX, shape_id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.id, self.label)
    }
}

/// A directed edge between two tasks of the same process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceFlow {
    id: String,
    source_ref: String,
    target_ref: String,
}

impl SequenceFlow {
    pub(crate) fn new(group: &str, source_ref: String, target_ref: String) -> Self {
        Self {
            id: Self::id_for_group(group),
            source_ref,
            target_ref,
        }
    }

    pub fn id_for_group(group: &str) -> String {
        format!("{}{}", FLOW_ID_PREFIX, group)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }

    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

impl fmt::Display for SequenceFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.id, self.source_ref, self.target_ref)
    }
}
