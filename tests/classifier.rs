//! Tests for shape classification.
mod common;
use common::*;
use sheetflow::extractor::classifier::{ShapeClassifier, classify_shapes};
use sheetflow::prelude::*;

#[test]
fn test_helper_shapes_are_excluded() {
    let shapes = vec![
        shape("1", "Task", "Approve"),
        shape("2", "Shape", "note"),
        shape("3", "Decision", "OK?"),
    ];

    let index = classify_shapes(&shapes);

    assert_eq!(index.len(), 2);
    assert!(index.contains("1"));
    assert!(!index.contains("2"));
    assert!(index.contains("3"));
}

#[test]
fn test_task_ids_and_trimmed_labels() {
    let shapes = vec![
        shape("7", "Task", "  Approve\t\n"),
        shape("8", "Task", "Send  the   invoice"),
    ];

    let index = classify_shapes(&shapes);

    let approve = index.get("7").expect("task for shape 7");
    assert_eq!(approve.id(), "task_7");
    assert_eq!(approve.label(), "Approve");

    // Only the edges are trimmed, inner whitespace is kept
    assert_eq!(index.get("8").unwrap().label(), "Send  the   invoice");
}

#[test]
fn test_empty_text_yields_empty_label() {
    let index = classify_shapes(&[shape("1", "Task", ""), shape("2", "Task", "   ")]);
    assert_eq!(index.get("1").unwrap().label(), "");
    assert_eq!(index.get("2").unwrap().label(), "");
}

#[test]
fn test_discovery_order_is_kept() {
    let shapes = vec![
        shape("b", "Task", "second"),
        shape("x", "Shape", "note"),
        shape("a", "Task", "first"),
    ];

    let index = classify_shapes(&shapes);
    let ids: Vec<&str> = index.tasks().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["task_b", "task_a"]);
}

#[test]
fn test_kind_comparison_is_exact() {
    // Only the exact helper tag is filtered
    let index = classify_shapes(&[shape("1", "shape", "lower"), shape("2", "Shapes", "plural")]);
    assert_eq!(index.len(), 2);
}

#[test]
fn test_custom_helper_kind_and_report() {
    let shapes = vec![
        shape("1", "Annotation", "note"),
        shape("2", "Shape", "kept"),
        shape("3", "Annotation", "note"),
    ];
    let mut report = ExtractionReport::default();

    let index = ShapeClassifier::new("Annotation").classify(&shapes, &mut report);

    assert_eq!(index.len(), 1);
    assert!(index.contains("2"));
    assert_eq!(report.helper_shapes, 2);
}

#[test]
fn test_empty_shape_list() {
    let index = classify_shapes(&[]);
    assert!(index.is_empty());
}

#[test]
fn test_duplicate_shape_ids_later_record_wins_lookup() {
    let shapes = vec![
        shape("1", "Task", "first"),
        shape("2", "Task", "other"),
        shape("1", "Task", "second"),
    ];

    let index = classify_shapes(&shapes);

    // Both tasks keep their discovery positions
    let labels: Vec<&str> = index.tasks().iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["first", "other", "second"]);
    assert_eq!(index.len(), 3);
    assert_eq!(index.get("1").unwrap().label(), "second");
}
