//! # sheetflow - Process Graph Extraction for Flowchart Pages
//!
//! **sheetflow** turns one page of a flowchart diagram (shapes and the glue
//! records of its connectors) into a process-model graph: tasks, directed
//! sequence flows, and a single participant/collaboration container around
//! them. The result is ready to be handed to a layout engine and a serializer
//! that emit a standard process-notation document.
//!
//! ## Core Workflow
//!
//! The extractor is format-agnostic. It works on a canonical `PageDefinition`
//! and never opens diagram files itself.
//!
//! 1.  **Read Your Page**: Use whatever reader you have for the diagram container.
//! 2.  **Convert to sheetflow's Model**: Implement `IntoPage` (or `PageSource`) for your reader's output, or load the JSON export with `PageDefinition::from_json`.
//! 3.  **Extract**: Build an `Extractor` with `Extractor::builder()` and call `extract`. Helper shapes are dropped, connector ends are paired into flows, and everything is wrapped in one collaboration.
//! 4.  **Hand Off**: Pass the `Collaboration` to a `LayoutEngine` and a `DocumentSerializer`, or persist it with `Collaboration::save`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sheetflow::prelude::*;
//!
//! let page = PageDefinition {
//!     name: Some("Page-1".to_string()),
//!     shapes: vec![
//!         ShapeRecord::new("1", "Process", " Approve "),
//!         ShapeRecord::new("2", "Process", "Archive"),
//!         ShapeRecord::new("3", "Shape", "note"),
//!     ],
//!     connectors: vec![
//!         ConnectorRecord::new("c1", "1", ConnectorRole::Begin),
//!         ConnectorRecord::new("c1", "2", ConnectorRole::End),
//!     ],
//! };
//!
//! let extractor = Extractor::builder().build();
//! let artifacts = extractor.extract(&page);
//!
//! let process = artifacts.collaboration.process();
//! assert_eq!(process.tasks().len(), 2);
//! assert_eq!(process.flows()[0].source_ref(), "task_1");
//! println!("{}", artifacts.collaboration);
//! ```

pub mod error;
pub mod extractor;
pub mod layout;
pub mod model;
pub mod page;
pub mod prelude;

pub use extractor::{ExtractionArtifacts, Extractor};

/// Extracts a page with the default configuration.
pub fn extract(page: &page::PageDefinition) -> model::Collaboration {
    Extractor::default().extract(page).collaboration
}
