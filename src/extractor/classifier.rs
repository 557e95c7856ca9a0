use super::report::ExtractionReport;
use crate::model::Task;
use crate::page::ShapeRecord;
use ahash::AHashMap;

/// Shape kind marking annotation shapes that never become tasks.
pub const DEFAULT_HELPER_KIND: &str = "Shape";

/// Tasks keyed by the id of the shape they were derived from, kept in
/// discovery order.
#[derive(Debug, Clone, Default)]
pub struct TaskIndex {
    tasks: Vec<Task>,
    by_shape: AHashMap<String, usize>,
}

impl TaskIndex {
    fn insert(&mut self, shape_id: &str, task: Task) {
        // Duplicate shape ids are a source bug; the later task takes over the key.
        self.by_shape.insert(shape_id.to_string(), self.tasks.len());
        self.tasks.push(task);
    }

    pub fn get(&self, shape_id: &str) -> Option<&Task> {
        self.by_shape.get(shape_id).map(|&i| &self.tasks[i])
    }

    pub fn contains(&self, shape_id: &str) -> bool {
        self.by_shape.contains_key(shape_id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub(super) fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}

/// Classifies shapes using the default helper tag.
pub fn classify_shapes(shapes: &[ShapeRecord]) -> TaskIndex {
    ShapeClassifier::new(DEFAULT_HELPER_KIND).classify(shapes, &mut ExtractionReport::default())
}

/// Turns shape records into tasks, skipping helper shapes.
pub struct ShapeClassifier<'a> {
    helper_kind: &'a str,
}

impl<'a> ShapeClassifier<'a> {
    pub fn new(helper_kind: &'a str) -> Self {
        Self { helper_kind }
    }

    pub fn classify(&self, shapes: &[ShapeRecord], report: &mut ExtractionReport) -> TaskIndex {
        let mut index = TaskIndex::default();
        for shape in shapes {
            if shape.kind == self.helper_kind {
                tracing::debug!(shape_id = %shape.id, "skipping helper shape");
                report.helper_shapes += 1;
                continue;
            }
            index.insert(&shape.id, Task::from_shape(&shape.id, &shape.text));
        }
        index
    }
}
