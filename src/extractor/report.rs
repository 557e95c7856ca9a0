use itertools::Itertools;
use std::fmt;

/// Counts of everything an extraction filtered out without failing.
///
/// The report is purely informational: the graph is identical whether or not
/// anyone reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Shapes skipped because their kind is the helper tag.
    pub helper_shapes: usize,
    /// Connector records lacking a group key or a target shape id.
    pub incomplete_connectors: usize,
    /// Connector records whose target is not a task (helper or unknown shape).
    pub dangling_connectors: usize,
    /// Connector records whose role carries no direction.
    pub ignored_roles: usize,
    /// Begin or end roles that replaced an earlier value for the same group.
    pub overwritten_roles: usize,
    /// Directional records arriving for a group that was already complete.
    pub late_connectors: usize,
    /// Group keys that never received both ends, in first-seen order.
    pub incomplete_groups: Vec<String>,
}

impl ExtractionReport {
    /// True when nothing was filtered besides helper shapes and geometry-only
    /// roles, which are expected on every well-formed page.
    pub fn is_clean(&self) -> bool {
        self.incomplete_connectors == 0
            && self.dangling_connectors == 0
            && self.overwritten_roles == 0
            && self.late_connectors == 0
            && self.incomplete_groups.is_empty()
    }
}

impl fmt::Display for ExtractionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Helper shapes skipped:      {}", self.helper_shapes)?;
        writeln!(f, "Connectors missing fields:  {}", self.incomplete_connectors)?;
        writeln!(f, "Dangling connectors:        {}", self.dangling_connectors)?;
        writeln!(f, "Geometry-only roles:        {}", self.ignored_roles)?;
        writeln!(f, "Overwritten roles:          {}", self.overwritten_roles)?;
        writeln!(f, "Connectors after complete:  {}", self.late_connectors)?;
        write!(
            f,
            "Incomplete groups:          {}",
            if self.incomplete_groups.is_empty() {
                "none".to_string()
            } else {
                self.incomplete_groups.iter().join(", ")
            }
        )
    }
}
