use super::element::{SequenceFlow, Task};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PROCESS_ID: &str = "Process_1";
pub const DEFAULT_PARTICIPANT_ID: &str = "Participant_1";
pub const DEFAULT_COLLABORATION_ID: &str = "Collaboration_1";

/// The activity graph: tasks in discovery order, then flows in completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    id: String,
    tasks: Vec<Task>,
    flows: Vec<SequenceFlow>,
}

impl Process {
    pub(crate) fn new(id: String, tasks: Vec<Task>, flows: Vec<SequenceFlow>) -> Self {
        Self { id, tasks, flows }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn flows(&self) -> &[SequenceFlow] {
        &self.flows
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn flow(&self, id: &str) -> Option<&SequenceFlow> {
        self.flows.iter().find(|f| f.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.flows.is_empty()
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "process {}", self.id)?;
        if !self.tasks.is_empty() {
            writeln!(f, "  {}", self.tasks.iter().join("\n  "))?;
        }
        if !self.flows.is_empty() {
            writeln!(f, "  {}", self.flows.iter().join("\n  "))?;
        }
        Ok(())
    }
}

/// A pool wrapping exactly one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    id: String,
    name: Option<String>,
    process: Process,
}

impl Participant {
    pub(crate) fn new(id: String, name: Option<String>, process: Process) -> Self {
        Self { id, name, process }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn process(&self) -> &Process {
        &self.process
    }
}

/// The outer container handed to layout and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
    id: String,
    participant: Participant,
}

impl Collaboration {
    pub(crate) fn new(id: String, participant: Participant) -> Self {
        Self { id, participant }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    /// Shortcut for the single process of the single participant.
    pub fn process(&self) -> &Process {
        &self.participant.process
    }
}

impl fmt::Display for Collaboration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collaboration {} / participant {}", self.id, self.participant.id)?;
        if let Some(name) = &self.participant.name {
            write!(f, " {:?}", name)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.participant.process)
    }
}
