//! Reader for the JSON page export.
//!
//! The export mirrors what container readers typically hand out: a list of
//! shapes and a list of untyped "connect" attribute maps, one per glued
//! connector end.
//!
//! ```json
//! {
//!   "name": "Page-1",
//!   "shapes": [{ "id": "1", "shape_name": "Process", "text": " Approve " }],
//!   "connects": [{ "FromSheet": "5", "ToSheet": "1", "FromCell": "BeginX" }]
//! }
//! ```
use super::conversion::IntoPage;
use super::definition::{ConnectorRecord, PageDefinition, ShapeRecord, normalize_attribute};
use crate::error::{PageConversionError, PageSourceError};
use ahash::AHashMap;
use serde::Deserialize;
use std::fs;

#[derive(Deserialize)]
struct RawPage {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    shapes: Vec<RawShape>,
    #[serde(default, alias = "connectors")]
    connects: Vec<AHashMap<String, serde_json::Value>>,
}

#[derive(Deserialize)]
struct RawShape {
    #[serde(default, alias = "ID")]
    id: Option<serde_json::Value>,
    #[serde(default, alias = "shape_name", alias = "master")]
    kind: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// Stringifies a scalar attribute. Ids are frequently numeric in exports.
fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl IntoPage for RawPage {
    fn into_page(self) -> Result<PageDefinition, PageConversionError> {
        let shapes = self
            .shapes
            .into_iter()
            .filter_map(|raw| {
                // Same normalization as connector attributes, so ids on both sides match.
                let id = raw
                    .id
                    .as_ref()
                    .and_then(scalar_to_string)
                    .and_then(|id| normalize_attribute(&id));
                let Some(id) = id else {
                    tracing::debug!(kind = ?raw.kind, "dropping shape without a usable id");
                    return None;
                };
                Some(ShapeRecord {
                    id,
                    kind: raw.kind.unwrap_or_default(),
                    text: raw.text.unwrap_or_default(),
                })
            })
            .collect();

        let connectors = self
            .connects
            .iter()
            .map(|attributes| {
                let attributes: AHashMap<String, String> = attributes
                    .iter()
                    .filter_map(|(k, v)| scalar_to_string(v).map(|v| (k.clone(), v)))
                    .collect();
                ConnectorRecord::from_attributes(&attributes)
            })
            .collect();

        Ok(PageDefinition {
            name: self.name,
            shapes,
            connectors,
        })
    }
}

impl PageDefinition {
    /// Parses a page from its JSON export.
    pub fn from_json(json: &str) -> Result<Self, PageSourceError> {
        let raw: RawPage =
            serde_json::from_str(json).map_err(|e| PageSourceError::Json(e.to_string()))?;
        raw.into_page()
            .map_err(|e| PageSourceError::Unavailable(e.to_string()))
    }

    /// Loads a page from a JSON export on disk.
    pub fn from_file(path: &str) -> Result<Self, PageSourceError> {
        let content = fs::read_to_string(path).map_err(|e| PageSourceError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}
