use serde::{Deserialize, Serialize};
use std::fmt;

/// The anchor role a connector record plays on its target shape.
///
/// Only `Begin` and `End` carry direction. Every other tag describes geometry
/// (e.g. a control point) and is kept as `Other` so it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorRole {
    Begin,
    End,
    Other(String),
}

impl ConnectorRole {
    pub const BEGIN_TAG: &'static str = "BeginX";
    pub const END_TAG: &'static str = "EndX";

    /// Parses a raw role tag. Matching is exact; the page source is expected
    /// to report tags in their canonical spelling.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::BEGIN_TAG => ConnectorRole::Begin,
            Self::END_TAG => ConnectorRole::End,
            other => ConnectorRole::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            ConnectorRole::Begin => Self::BEGIN_TAG,
            ConnectorRole::End => Self::END_TAG,
            ConnectorRole::Other(tag) => tag,
        }
    }
}

impl fmt::Display for ConnectorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Which end of a sequence flow a connector record designates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Source,
    Target,
}
