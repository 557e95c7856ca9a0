use super::classifier::TaskIndex;
use crate::model::{Collaboration, Participant, Process, SequenceFlow};

/// Identifiers given to the container elements of the assembled graph.
#[derive(Debug, Clone)]
pub(super) struct ContainerIds {
    pub(super) process: String,
    pub(super) participant: String,
    pub(super) collaboration: String,
}

/// Assembles tasks and flows into the single-process container.
pub(super) struct ProcessBuilder<'a> {
    ids: &'a ContainerIds,
    participant_name: Option<&'a str>,
}

impl<'a> ProcessBuilder<'a> {
    pub(super) fn new(ids: &'a ContainerIds, participant_name: Option<&'a str>) -> Self {
        Self {
            ids,
            participant_name,
        }
    }

    pub(super) fn build(&self, tasks: TaskIndex, flows: Vec<SequenceFlow>) -> Collaboration {
        let process = Process::new(self.ids.process.clone(), tasks.into_tasks(), flows);
        let participant = Participant::new(
            self.ids.participant.clone(),
            self.participant_name.map(str::to_string),
            process,
        );
        Collaboration::new(self.ids.collaboration.clone(), participant)
    }
}
