use super::classifier::TaskIndex;
use super::report::ExtractionReport;
use crate::model::SequenceFlow;
use crate::page::{ConnectorRecord, ConnectorRole, Endpoint};
use ahash::AHashMap;

/// Maps connector roles to flow endpoints.
///
/// `Begin` and `End` are always directional. Additional tags can be aliased
/// for page sources that spell them differently.
#[derive(Debug, Clone, Default)]
pub struct RoleTable {
    aliases: AHashMap<String, Endpoint>,
}

impl RoleTable {
    pub fn with_alias(mut self, tag: &str, endpoint: Endpoint) -> Self {
        self.aliases.insert(tag.to_string(), endpoint);
        self
    }

    pub fn endpoint(&self, role: &ConnectorRole) -> Option<Endpoint> {
        match role {
            ConnectorRole::Begin => Some(Endpoint::Source),
            ConnectorRole::End => Some(Endpoint::Target),
            ConnectorRole::Other(tag) => self.aliases.get(tag).copied(),
        }
    }
}

/// Accumulated knowledge about one connector group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Empty,
    PartialSource(String),
    PartialTarget(String),
    Complete(SequenceFlow),
}

/// What a single transition did to a group's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// First value for this end of the flow.
    Advanced,
    /// Replaced an earlier value for the same end (last write wins).
    Overwritten,
    /// Both ends are now known; the state holds the finished flow.
    Completed,
    /// The group was already complete and is left untouched.
    AlreadyComplete,
}

impl FlowState {
    pub fn is_complete(&self) -> bool {
        matches!(self, FlowState::Complete(_))
    }

    /// Applies one directional record for `group` pointing at `task_id`.
    ///
    /// `Complete` is absorbing: no input moves a group out of it.
    pub fn transition(self, group: &str, endpoint: Endpoint, task_id: &str) -> (Self, StepEvent) {
        use Endpoint::{Source, Target};
        use FlowState::*;

        let task_id = task_id.to_string();
        match (self, endpoint) {
            (Complete(flow), _) => (Complete(flow), StepEvent::AlreadyComplete),
            (Empty, Source) => (PartialSource(task_id), StepEvent::Advanced),
            (Empty, Target) => (PartialTarget(task_id), StepEvent::Advanced),
            (PartialSource(_), Source) => (PartialSource(task_id), StepEvent::Overwritten),
            (PartialTarget(_), Target) => (PartialTarget(task_id), StepEvent::Overwritten),
            (PartialSource(source), Target) => (
                Complete(SequenceFlow::new(group, source, task_id)),
                StepEvent::Completed,
            ),
            (PartialTarget(target), Source) => (
                Complete(SequenceFlow::new(group, task_id, target)),
                StepEvent::Completed,
            ),
        }
    }
}

/// Resolves connector records against a `TaskIndex` using the default roles.
pub fn resolve_connectors(tasks: &TaskIndex, connectors: &[ConnectorRecord]) -> Vec<SequenceFlow> {
    let roles = RoleTable::default();
    ConnectorResolver::new(tasks, &roles).resolve(connectors, &mut ExtractionReport::default())
}

/// Folds connector records into completed sequence flows.
pub struct ConnectorResolver<'a> {
    tasks: &'a TaskIndex,
    roles: &'a RoleTable,
    states: AHashMap<String, FlowState>,
    group_order: Vec<String>,
    completed: Vec<SequenceFlow>,
}

impl<'a> ConnectorResolver<'a> {
    pub fn new(tasks: &'a TaskIndex, roles: &'a RoleTable) -> Self {
        Self {
            tasks,
            roles,
            states: AHashMap::new(),
            group_order: Vec::new(),
            completed: Vec::new(),
        }
    }

    /// Consumes the resolver and returns flows in completion order.
    /// Groups that never completed are recorded in the report and dropped.
    pub fn resolve(
        mut self,
        connectors: &[ConnectorRecord],
        report: &mut ExtractionReport,
    ) -> Vec<SequenceFlow> {
        for connector in connectors {
            self.step(connector, report);
        }

        report.incomplete_groups.extend(
            self.group_order
                .iter()
                .filter(|g| !self.states.get(*g).is_some_and(FlowState::is_complete))
                .cloned(),
        );
        for group in &report.incomplete_groups {
            tracing::debug!(group = %group, "dropping incomplete connector group");
        }

        self.completed
    }

    fn step(&mut self, connector: &ConnectorRecord, report: &mut ExtractionReport) {
        let (Some(group), Some(shape_id)) = (&connector.from_group, &connector.to_shape_id) else {
            tracing::debug!(?connector, "skipping connector with missing fields");
            report.incomplete_connectors += 1;
            return;
        };

        let Some(task) = self.tasks.get(shape_id) else {
            tracing::debug!(group = %group, shape_id = %shape_id, "skipping dangling connector");
            report.dangling_connectors += 1;
            return;
        };

        let state = match self.states.remove(group) {
            Some(state) => state,
            None => {
                self.group_order.push(group.clone());
                FlowState::Empty
            }
        };

        let endpoint = connector.role.as_ref().and_then(|r| self.roles.endpoint(r));
        let Some(endpoint) = endpoint else {
            report.ignored_roles += 1;
            self.states.insert(group.clone(), state);
            return;
        };

        let (next, event) = state.transition(group, endpoint, task.id());
        match event {
            StepEvent::Advanced => {}
            StepEvent::Overwritten => {
                tracing::debug!(group = %group, ?endpoint, task = %task.id(), "role overwritten, last write wins");
                report.overwritten_roles += 1;
            }
            StepEvent::Completed => {
                if let FlowState::Complete(flow) = &next {
                    self.completed.push(flow.clone());
                }
            }
            StepEvent::AlreadyComplete => {
                tracing::debug!(group = %group, "ignoring connector for completed group");
                report.late_connectors += 1;
            }
        }
        self.states.insert(group.clone(), next);
    }
}
