//! Phase 5 tests: linked list, workbench sessions, CLI end-to-end.

use std::process::{Command, Output};

use tempfile::NamedTempFile;

use structviz::cli::commands::{parse_edge, parse_entry};
use structviz::config::VisualizerConfig;
use structviz::engine::Workbench;
use structviz::list::SinglyLinkedList;
use structviz::types::{EventLevel, StructureKind, VizError};

// ==================== CLI Helpers ====================

/// Run the `sviz` CLI with the given arguments and return the output.
fn run_sviz(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sviz"))
        .args(args)
        .output()
        .expect("Failed to run sviz")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "sviz failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: parse stdout as JSON.
fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ==================== Linked List Tests ====================

#[test]
fn test_list_insert_at_head() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());
    list.insert_at_head(1).unwrap();
    list.insert_at_head(2).unwrap();
    list.insert_at_head(3).unwrap();
    assert_eq!(list.to_vec(), vec![3, 2, 1]);
    assert_eq!(list.head(), Some(3));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_list_rejects_non_positive() {
    let mut list = SinglyLinkedList::new();
    match list.insert_at_head(0) {
        Err(VizError::InvalidValue(0)) => {}
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
    assert!(list.insert_at_head(-4).is_err());
    assert!(list.is_empty());
}

#[test]
fn test_list_clear_and_long_drop() {
    let mut list = SinglyLinkedList::new();
    for v in 1..=200_000 {
        list.insert_at_head(v).unwrap();
    }
    assert_eq!(list.len(), 200_000);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);

    let mut long = SinglyLinkedList::new();
    for v in 1..=200_000 {
        long.insert_at_head(v).unwrap();
    }
    drop(long);
}

// ==================== Workbench Tests ====================

#[test]
fn test_workbench_shares_log() {
    let mut bench = Workbench::from_config(&VisualizerConfig::default()).unwrap();
    bench.heap().insert(5);
    bench.tree().insert(10);
    bench.table().insert(5, "a".to_string());
    bench.graph().add_edge(0, 1);
    bench.list().insert_at_head(7).unwrap();

    let log = bench.log();
    let log = log.borrow();
    let kinds: Vec<StructureKind> = log.entries().map(|e| e.event.structure).collect();
    assert_eq!(
        kinds,
        vec![
            StructureKind::Session,
            StructureKind::Heap,
            StructureKind::AvlTree,
            StructureKind::HashTable,
            StructureKind::Graph,
            StructureKind::LinkedList,
        ]
    );
    assert_eq!(
        log.entries().next().unwrap().event.message,
        "Visualizer ready. Use the controls to start."
    );
}

#[test]
fn test_workbench_from_custom_config() {
    let mut config = VisualizerConfig::default();
    config.heap.min_heap = false;
    config.hash.bucket_count = 3;
    config.graph.vertex_count = 2;
    config.log.capacity = 2;

    let mut bench = Workbench::from_config(&config).unwrap();
    assert!(!bench.heap().is_min());
    assert_eq!(bench.table().bucket_count(), 3);
    assert_eq!(bench.graph().vertex_count(), 2);

    bench.heap().insert(1);
    bench.heap().insert(2);
    bench.heap().insert(3);
    assert_eq!(bench.log().borrow().len(), 2);

    bench.clear_log();
    assert!(bench.log().borrow().is_empty());
}

#[test]
fn test_workbench_rejected_input_logged_as_error() {
    let mut bench = Workbench::from_config(&VisualizerConfig::default()).unwrap();
    assert!(bench.list().insert_at_head(0).is_err());
    let log = bench.log();
    let last = log.borrow().latest_first().next().cloned().unwrap();
    assert_eq!(last.event.level, EventLevel::Error);
    assert_eq!(last.event.message, "Please enter a valid number.");
}

#[test]
fn test_workbench_invalid_config() {
    let mut config = VisualizerConfig::default();
    config.hash.bucket_count = 0;
    assert!(matches!(
        Workbench::from_config(&config),
        Err(VizError::ZeroBuckets)
    ));
}

// ==================== Parser Tests ====================

#[test]
fn test_parse_entry() {
    assert_eq!(parse_entry("5=a").unwrap(), (5, "a".to_string()));
    assert_eq!(parse_entry("-3 = hello").unwrap(), (-3, "hello".to_string()));
    assert!(matches!(parse_entry("5"), Err(VizError::InvalidInput(_))));
    assert!(matches!(parse_entry("x=1"), Err(VizError::InvalidInput(_))));
}

#[test]
fn test_parse_edge() {
    assert_eq!(parse_edge("0-1").unwrap(), (0, 1));
    assert_eq!(parse_edge(" 3 - 4 ").unwrap(), (3, 4));
    assert!(matches!(parse_edge("0:1"), Err(VizError::InvalidInput(_))));
    assert!(matches!(parse_edge("a-1"), Err(VizError::InvalidInput(_))));
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_heap_json() {
    let output = run_sviz(&[
        "--format", "json", "heap", "--insert", "5,3,8,1", "--extract", "2",
    ]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["order"], "min-heap");
    assert_eq!(json["extracted"], serde_json::json!([1, 3]));
    assert_eq!(json["array"], serde_json::json!([5, 8]));
}

#[test]
fn test_cli_max_heap() {
    let output = run_sviz(&["--format", "json", "heap", "--max", "--insert", "1,9,4"]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["order"], "max-heap");
    assert_eq!(json["array"][0], 9);
}

#[test]
fn test_cli_avl_json() {
    let output = run_sviz(&["--format", "json", "avl", "--insert", "10,20,30"]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["inorder"], serde_json::json!([10, 20, 30]));
    assert_eq!(json["root"], 20);
    assert_eq!(json["height"], 2);
}

#[test]
fn test_cli_hash_json() {
    let output = run_sviz(&[
        "--format", "json", "hash", "--put", "5=a", "--put", "18=b", "--remove", "5", "--get",
        "18,5",
    ]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["bucket_count"], 13);
    assert_eq!(json["buckets"][0]["index"], 5);
    assert_eq!(
        json["buckets"][0]["entries"],
        serde_json::json!([[18, "b"]])
    );
    assert_eq!(json["lookups"], serde_json::json!([[18, "b"], [5, null]]));
}

#[test]
fn test_cli_graph_text() {
    let output = run_sviz(&[
        "graph", "--vertices", "5", "--edge", "0-1", "--edge", "1-2", "--edge", "0-3",
    ]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BFS(0): [0, 1, 3, 2]"));
    assert!(stdout.contains("DFS(0): [0, 3, 1, 2]"));
}

#[test]
fn test_cli_bad_edge_exit_code() {
    let output = run_sviz(&["graph", "--edge", "0/1"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_list_rejects_zero() {
    let output = run_sviz(&["list", "--push", "2,0"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_config_roundtrip() {
    let tmp = NamedTempFile::new().unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_sviz(&["config", path]);
    assert_success(&output);
    let loaded = VisualizerConfig::load(tmp.path()).unwrap();
    assert_eq!(loaded, VisualizerConfig::default());

    std::fs::write(tmp.path(), "[hash]\nbucket_count = 0\n").unwrap();
    let output = run_sviz(&["--config", path, "hash", "--put", "1=x"]);
    assert_eq!(output.status.code(), Some(2));
}
