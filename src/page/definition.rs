use super::role::ConnectorRole;
use ahash::AHashMap;

/// Attribute naming the connector shape a record belongs to.
pub const FROM_GROUP_ATTRIBUTE: &str = "FromSheet";
/// Attribute naming the shape the connector end is glued to.
pub const TO_SHAPE_ATTRIBUTE: &str = "ToSheet";
/// Attribute naming the connector cell (its role).
pub const ROLE_ATTRIBUTE: &str = "FromCell";

/// Trims an identifier-like attribute; blank values count as missing.
pub(crate) fn normalize_attribute(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// The canonical definition of one diagram page, ready for extraction.
/// This is the target structure for any custom page format conversion.
#[derive(Debug, Clone, Default)]
pub struct PageDefinition {
    pub name: Option<String>,
    pub shapes: Vec<ShapeRecord>,
    pub connectors: Vec<ConnectorRecord>,
}

/// A single shape (node) read from a diagram page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeRecord {
    pub id: String,
    pub kind: String,
    pub text: String,
}

impl ShapeRecord {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            text: text.into(),
        }
    }
}

/// One end of a connector glued to a shape.
///
/// Every field is optional because the page source may omit or garble any of
/// them; records missing a field are skipped during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectorRecord {
    pub from_group: Option<String>,
    pub to_shape_id: Option<String>,
    pub role: Option<ConnectorRole>,
}

impl ConnectorRecord {
    pub fn new(
        from_group: impl Into<String>,
        to_shape_id: impl Into<String>,
        role: ConnectorRole,
    ) -> Self {
        Self {
            from_group: Some(from_group.into()),
            to_shape_id: Some(to_shape_id.into()),
            role: Some(role),
        }
    }

    /// Builds a validated record from an untyped attribute map.
    ///
    /// Blank values are treated the same as missing ones.
    pub fn from_attributes(attributes: &AHashMap<String, String>) -> Self {
        let field = |key: &str| attributes.get(key).and_then(|v| normalize_attribute(v));

        Self {
            from_group: field(FROM_GROUP_ATTRIBUTE),
            to_shape_id: field(TO_SHAPE_ATTRIBUTE),
            role: field(ROLE_ATTRIBUTE).map(|tag| ConnectorRole::from_tag(&tag)),
        }
    }
}
