//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the sheetflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use sheetflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let page = PageDefinition::from_file("path/to/page.json")?;
//! let artifacts = Extractor::default().extract_from(&page)?;
//!
//! println!("{}", artifacts.collaboration);
//! println!("{}", artifacts.report);
//! # Ok(())
//! # }
//! ```

// Extraction
pub use crate::extractor::{ExtractionArtifacts, ExtractionReport, Extractor, ExtractorBuilder};

// Page input
pub use crate::page::{
    ConnectorRecord, ConnectorRole, Endpoint, IntoPage, PageDefinition, PageSource, ShapeRecord,
};

// Process model
pub use crate::model::{Collaboration, Participant, Process, SequenceFlow, Task};

// Downstream stages
pub use crate::layout::{Diagram, DocumentSerializer, Layout, LayoutEngine};

// Error types
pub use crate::error::{ExtractError, LayoutError, PageConversionError, PageSourceError};

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
