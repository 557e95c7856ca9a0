//! Contracts for the stages that run after extraction.
//!
//! Coordinates and markup are produced outside this crate. The types here fix
//! what those stages receive and return, and `apply_layout` makes sure a
//! layout only annotates the graph instead of changing it.
use crate::error::{ArtifactError, LayoutError, RenderError};
use crate::model::{Collaboration, Process};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

mod json;

pub use json::JsonSerializer;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Geometry computed by a layout engine, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Task id -> shape bounds.
    pub shapes: AHashMap<String, Bounds>,
    /// Flow id -> edge waypoints.
    pub edges: AHashMap<String, Vec<Point>>,
}

/// A collaboration together with validated geometry for every element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    pub collaboration: Collaboration,
    pub layout: Layout,
}

/// Computes coordinates for an extracted graph.
///
/// The engine only sees the graph by reference: it may not add, remove or
/// reconnect elements.
pub trait LayoutEngine {
    fn layout(&self, collaboration: &Collaboration) -> Result<Layout, LayoutError>;
}

/// Renders a laid-out diagram into a textual document.
pub trait DocumentSerializer {
    fn render(&self, diagram: &Diagram) -> Result<String, ArtifactError>;
}

/// Pairs a collaboration with a layout after checking that the layout covers
/// exactly the elements of the process.
pub fn apply_layout(collaboration: Collaboration, layout: Layout) -> Result<Diagram, LayoutError> {
    check_coverage(collaboration.process(), &layout)?;
    Ok(Diagram {
        collaboration,
        layout,
    })
}

fn check_coverage(process: &Process, layout: &Layout) -> Result<(), LayoutError> {
    let task_ids: AHashSet<&str> = process.tasks().iter().map(|t| t.id()).collect();
    let flow_ids: AHashSet<&str> = process.flows().iter().map(|f| f.id()).collect();

    if let Some(id) = layout.shapes.keys().find(|id| !task_ids.contains(id.as_str())) {
        return Err(LayoutError::UnknownElement(id.clone()));
    }
    if let Some(id) = layout.edges.keys().find(|id| !flow_ids.contains(id.as_str())) {
        return Err(LayoutError::UnknownElement(id.clone()));
    }
    if let Some(task) = process
        .tasks()
        .iter()
        .find(|t| !layout.shapes.contains_key(t.id()))
    {
        return Err(LayoutError::MissingGeometry(task.id().to_string()));
    }
    if let Some(flow) = process
        .flows()
        .iter()
        .find(|f| !layout.edges.contains_key(f.id()))
    {
        return Err(LayoutError::MissingGeometry(flow.id().to_string()));
    }
    Ok(())
}

/// Runs layout and serialization over an extracted collaboration.
pub fn render<L, S>(
    collaboration: Collaboration,
    engine: &L,
    serializer: &S,
) -> Result<String, RenderError>
where
    L: LayoutEngine + ?Sized,
    S: DocumentSerializer + ?Sized,
{
    let layout = engine.layout(&collaboration)?;
    let diagram = apply_layout(collaboration, layout)?;
    Ok(serializer.render(&diagram)?)
}
