use super::{Diagram, DocumentSerializer};
use crate::error::ArtifactError;

/// Dumps a diagram as JSON. Meant for inspection, not for interchange.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer {
    pub pretty: bool,
}

impl DocumentSerializer for JsonSerializer {
    fn render(&self, diagram: &Diagram) -> Result<String, ArtifactError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(diagram)
        } else {
            serde_json::to_string(diagram)
        };
        result.map_err(|e| ArtifactError::Generic(format!("JSON rendering failed: {}", e)))
    }
}
