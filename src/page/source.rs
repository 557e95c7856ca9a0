use super::definition::{ConnectorRecord, PageDefinition, ShapeRecord};
use crate::error::PageSourceError;

/// Supplies the ordered shape and connector records of a single page.
///
/// Implementations wrap whatever reads the diagram container. If either call
/// fails the extraction is abandoned as a whole.
pub trait PageSource {
    fn shapes(&self) -> Result<Vec<ShapeRecord>, PageSourceError>;

    fn connectors(&self) -> Result<Vec<ConnectorRecord>, PageSourceError>;

    fn page_name(&self) -> Option<String> {
        None
    }
}

impl PageSource for PageDefinition {
    fn shapes(&self) -> Result<Vec<ShapeRecord>, PageSourceError> {
        Ok(self.shapes.clone())
    }

    fn connectors(&self) -> Result<Vec<ConnectorRecord>, PageSourceError> {
        Ok(self.connectors.clone())
    }

    fn page_name(&self) -> Option<String> {
        self.name.clone()
    }
}
