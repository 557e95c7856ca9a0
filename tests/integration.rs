//! Integration tests for sheetflow
//!
//! End-to-end tests that run whole pages through the extractor.
mod common;
use common::*;
use sheetflow::prelude::*;

#[test]
fn test_scenario_tasks_flow_and_helper_connector() {
    let artifacts = Extractor::default().extract(&create_approval_page());
    let process = artifacts.collaboration.process();

    let tasks: Vec<(&str, &str)> = process.tasks().iter().map(|t| (t.id(), t.label())).collect();
    assert_eq!(tasks, vec![("task_1", "Approve"), ("task_2", "Archive")]);

    assert_eq!(
        flow_triples(process),
        vec![("flow_c1".into(), "task_1".into(), "task_2".into())]
    );

    // c2 pointed at the helper shape and touched nothing
    assert!(process.flow("flow_c2").is_none());
    assert_eq!(artifacts.report.helper_shapes, 1);
    assert_eq!(artifacts.report.dangling_connectors, 1);
    assert!(artifacts.report.incomplete_groups.is_empty());
}

#[test]
fn test_scenario_begin_without_end() {
    let page = PageDefinition {
        name: None,
        shapes: vec![shape("1", "Task", "A"), shape("2", "Task", "B")],
        connectors: vec![begin("c1", "1")],
    };

    let artifacts = Extractor::default().extract(&page);

    assert_eq!(artifacts.collaboration.process().tasks().len(), 2);
    assert!(artifacts.collaboration.process().flows().is_empty());
    assert_eq!(artifacts.report.incomplete_groups, vec!["c1".to_string()]);
    assert!(!artifacts.report.is_clean());
}

#[test]
fn test_scenario_empty_page_is_success() {
    let artifacts = Extractor::default().extract(&PageDefinition::default());

    let process = artifacts.collaboration.process();
    assert!(process.tasks().is_empty());
    assert!(process.flows().is_empty());
    assert!(process.is_empty());
    assert!(artifacts.report.is_clean());
}

#[test]
fn test_branching_page() {
    let artifacts = Extractor::default().extract(&create_branching_page());
    let process = artifacts.collaboration.process();

    assert_eq!(process.tasks().len(), 4);
    assert_eq!(
        flow_triples(process),
        vec![
            ("flow_10".into(), "task_1".into(), "task_2".into()),
            ("flow_11".into(), "task_2".into(), "task_3".into()),
            ("flow_12".into(), "task_2".into(), "task_4".into()),
        ]
    );
    assert_eq!(artifacts.report.ignored_roles, 1);
    assert_eq!(artifacts.report.incomplete_groups, vec!["13".to_string()]);
}

#[test]
fn test_every_flow_references_existing_tasks() {
    let artifacts = Extractor::default().extract(&create_branching_page());
    let process = artifacts.collaboration.process();

    for flow in process.flows() {
        assert!(process.task(flow.source_ref()).is_some());
        assert!(process.task(flow.target_ref()).is_some());
    }
}

#[test]
fn test_single_participant_container() {
    let artifacts = Extractor::default().extract(&create_approval_page());
    let collaboration = &artifacts.collaboration;

    assert_eq!(collaboration.id(), "Collaboration_1");
    assert_eq!(collaboration.participant().id(), "Participant_1");
    assert_eq!(collaboration.process().id(), "Process_1");
    // Falls back to the page name
    assert_eq!(collaboration.participant().name(), Some("Approval"));
}

#[test]
fn test_builder_configuration() {
    let mut page = create_approval_page();
    page.shapes.push(shape("4", "Callout", "aside"));
    page.connectors.push(ConnectorRecord::new(
        "c3",
        "2",
        ConnectorRole::Other("Start".to_string()),
    ));
    page.connectors.push(end("c3", "4"));

    let extractor = Extractor::builder()
        .with_helper_kind("Callout")
        .with_role_alias("Start", Endpoint::Source)
        .with_participant_name("Finance")
        .with_process_id("Process_Approval")
        .build();
    let artifacts = extractor.extract(&page);
    let process = artifacts.collaboration.process();

    // "Shape" is no longer a helper, so shape 3 and group c2 now count
    assert!(process.task("task_3").is_some());
    assert!(process.task("task_4").is_none());
    assert_eq!(process.id(), "Process_Approval");
    assert_eq!(artifacts.collaboration.participant().name(), Some("Finance"));
    // c2 only has a begin; c3 ends on the callout, which is now a helper
    assert_eq!(process.flows().len(), 1);
    assert_eq!(
        artifacts.report.incomplete_groups,
        vec!["c2".to_string(), "c3".to_string()]
    );
}

#[test]
fn test_extraction_is_repeatable() {
    let extractor = Extractor::default();
    let page = create_branching_page();

    let first = extractor.extract(&page);
    let second = extractor.extract(&page);
    assert_eq!(first.collaboration, second.collaboration);
    assert_eq!(first.report, second.report);
}

#[test]
fn test_convenience_extract() {
    let collaboration = sheetflow::extract(&create_approval_page());
    assert_eq!(collaboration.process().flows().len(), 1);
}

struct BrokenSource;

impl PageSource for BrokenSource {
    fn shapes(&self) -> Result<Vec<ShapeRecord>, PageSourceError> {
        Ok(vec![shape("1", "Task", "A")])
    }

    fn connectors(&self) -> Result<Vec<ConnectorRecord>, PageSourceError> {
        Err(PageSourceError::Unavailable("corrupt container".to_string()))
    }
}

#[test]
fn test_failing_source_aborts_extraction() {
    let result = Extractor::default().extract_from(&BrokenSource);

    match result {
        Err(ExtractError::PageSource(PageSourceError::Unavailable(msg))) => {
            assert_eq!(msg, "corrupt container");
        }
        other => panic!("Expected page source failure, got {:?}", other),
    }
}

#[test]
fn test_extract_from_page_definition() {
    let page = create_approval_page();
    let from_source = Extractor::default().extract_from(&page).expect("Failed to extract");
    let direct = Extractor::default().extract(&page);
    assert_eq!(from_source.collaboration, direct.collaboration);
}

#[test]
fn test_collaboration_display() {
    let collaboration = sheetflow::extract(&create_approval_page());
    let text = collaboration.to_string();

    assert!(text.contains("participant Participant_1 \"Approval\""));
    assert!(text.contains("task_1 \"Approve\""));
    assert!(text.contains("flow_c1: task_1 -> task_2"));
}

#[test]
fn test_collaboration_artifact_round_trip() {
    let collaboration = sheetflow::extract(&create_branching_page());
    let bytes = collaboration.to_bytes().expect("Failed to encode");
    let restored = Collaboration::from_bytes(&bytes).expect("Failed to decode");
    assert_eq!(restored, collaboration);
}

#[test]
fn test_error_display() {
    let err = ExtractError::from(PageSourceError::Io {
        path: "page.json".to_string(),
        message: "No such file".to_string(),
    });
    assert!(err.to_string().contains("page.json"));
    assert!(err.to_string().contains("No such file"));

    let layout_err = LayoutError::UnknownElement("task_99".to_string());
    assert!(layout_err.to_string().contains("task_99"));
}

#[test]
fn test_extractor_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Extractor>();

    let extractor = Extractor::default();
    let page = create_branching_page();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| extractor.extract(&page))).collect();
        for handle in handles {
            let artifacts = handle.join().expect("extraction thread panicked");
            assert_eq!(artifacts.collaboration.process().flows().len(), 3);
        }
    });
}

#[test]
fn test_geometry_roles_keep_report_clean() {
    let mut page = create_approval_page();
    page.connectors.insert(
        1,
        ConnectorRecord::new("c1", "1", ConnectorRole::Other("PinX".to_string())),
    );
    page.connectors.pop(); // drop the helper connector

    let artifacts = Extractor::default().extract(&page);
    assert_eq!(artifacts.report.ignored_roles, 1);
    assert!(artifacts.report.is_clean());
}
