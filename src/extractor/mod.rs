use crate::error::ExtractError;
use crate::model::{
    Collaboration, DEFAULT_COLLABORATION_ID, DEFAULT_PARTICIPANT_ID, DEFAULT_PROCESS_ID,
};
use crate::page::{ConnectorRecord, Endpoint, PageDefinition, PageSource, ShapeRecord};

mod builder;
pub mod classifier;
mod report;
pub mod resolver;

use builder::{ContainerIds, ProcessBuilder};
use classifier::{DEFAULT_HELPER_KIND, ShapeClassifier};
use resolver::{ConnectorResolver, RoleTable};

pub use report::ExtractionReport;

/// Everything one extraction produces.
#[derive(Debug, Clone)]
pub struct ExtractionArtifacts {
    pub collaboration: Collaboration,
    pub report: ExtractionReport,
}

/// Converts a diagram page into a single-process collaboration.
///
/// An `Extractor` holds configuration only. Each call works on its own data,
/// so one instance can be shared between threads and requests.
#[derive(Debug, Clone)]
pub struct Extractor {
    helper_kind: String,
    roles: RoleTable,
    ids: ContainerIds,
    participant_name: Option<String>,
}

pub struct ExtractorBuilder {
    helper_kind: String,
    roles: RoleTable,
    ids: ContainerIds,
    participant_name: Option<String>,
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorBuilder {
    pub fn new() -> Self {
        Self {
            helper_kind: DEFAULT_HELPER_KIND.to_string(),
            roles: RoleTable::default(),
            ids: ContainerIds {
                process: DEFAULT_PROCESS_ID.to_string(),
                participant: DEFAULT_PARTICIPANT_ID.to_string(),
                collaboration: DEFAULT_COLLABORATION_ID.to_string(),
            },
            participant_name: None,
        }
    }
    pub fn with_helper_kind(mut self, kind: &str) -> Self {
        self.helper_kind = kind.to_string();
        self
    }
    pub fn with_role_alias(mut self, tag: &str, endpoint: Endpoint) -> Self {
        self.roles = self.roles.with_alias(tag, endpoint);
        self
    }
    pub fn with_participant_name(mut self, name: &str) -> Self {
        self.participant_name = Some(name.to_string());
        self
    }
    pub fn with_process_id(mut self, id: &str) -> Self {
        self.ids.process = id.to_string();
        self
    }
    pub fn build(self) -> Extractor {
        Extractor {
            helper_kind: self.helper_kind,
            roles: self.roles,
            ids: self.ids,
            participant_name: self.participant_name,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        ExtractorBuilder::new().build()
    }
}

impl Extractor {
    pub fn builder() -> ExtractorBuilder {
        ExtractorBuilder::new()
    }

    /// Runs classification, resolution and assembly over an in-memory page.
    ///
    /// This never fails: anything that cannot take part in the graph is left
    /// out and counted in the returned report.
    pub fn extract(&self, page: &PageDefinition) -> ExtractionArtifacts {
        self.extract_records(&page.shapes, &page.connectors, page.name.as_deref())
    }

    /// Pulls records from a page source and extracts them.
    ///
    /// A failing source aborts the whole extraction; no partial graph is produced.
    pub fn extract_from<S: PageSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<ExtractionArtifacts, ExtractError> {
        let shapes = source.shapes()?;
        let connectors = source.connectors()?;
        let name = source.page_name();
        Ok(self.extract_records(&shapes, &connectors, name.as_deref()))
    }

    fn extract_records(
        &self,
        shapes: &[ShapeRecord],
        connectors: &[ConnectorRecord],
        page_name: Option<&str>,
    ) -> ExtractionArtifacts {
        let mut report = ExtractionReport::default();

        let tasks = ShapeClassifier::new(&self.helper_kind).classify(shapes, &mut report);
        let flows = ConnectorResolver::new(&tasks, &self.roles).resolve(connectors, &mut report);

        tracing::info!(
            tasks = tasks.len(),
            flows = flows.len(),
            helper_shapes = report.helper_shapes,
            dropped_groups = report.incomplete_groups.len(),
            "extracted process graph"
        );

        let participant_name = self.participant_name.as_deref().or(page_name);
        let collaboration = ProcessBuilder::new(&self.ids, participant_name).build(tasks, flows);

        ExtractionArtifacts {
            collaboration,
            report,
        }
    }
}
