//! Column rendering integration tests, mirroring src/columns

mod common;

use common::{sample_pod, sample_record};
use podwide_core::{
    ColumnError, EvalError, JoinedRecord, NONE, RenderPolicy, parse_columns, render_table,
};

#[test]
fn test_renders_header_and_rows() {
    let columns = parse_columns(
        "NAME:.pod.metadata.name,NODE:.node.metadata.name,PHASE:.pod.status.phase",
    )
    .expect("valid spec");
    let records = [sample_record()];

    let table = render_table(&columns, &records, RenderPolicy::Lenient).expect("render");
    let mut lines = table.lines();

    let header = lines.next().expect("header row");
    assert!(header.contains("NAME"));
    assert!(header.contains("NODE"));
    assert!(header.contains("PHASE"));

    let row = lines.next().expect("record row");
    assert!(row.contains("test-pod"));
    assert!(row.contains("node1"));
    assert!(row.contains("Running"));
}

#[test]
fn test_absent_relations_render_none_cells() {
    let columns =
        parse_columns("NAME:.pod.metadata.name,NODE:.node.metadata.name").expect("valid spec");
    let records = [JoinedRecord::new(sample_pod())];

    let table = render_table(&columns, &records, RenderPolicy::Lenient).expect("render");
    let row = table.lines().nth(1).expect("record row");
    assert!(row.contains("test-pod"));
    assert!(row.contains(NONE));
}

#[test]
fn test_lenient_render_degrades_errors_to_none() {
    let columns =
        parse_columns("NAME:.pod.metadata.name,BAD:.pod.metadata.nonexistent").expect("valid spec");
    let records = [sample_record()];

    let table = render_table(&columns, &records, RenderPolicy::Lenient).expect("render");
    let row = table.lines().nth(1).expect("record row");
    assert!(row.contains("test-pod"));
    assert!(row.contains(NONE));
}

#[test]
fn test_strict_render_surfaces_first_error() {
    let columns =
        parse_columns("NAME:.pod.metadata.name,BAD:.pod.metadata.nonexistent").expect("valid spec");
    let records = [sample_record()];

    let err = render_table(&columns, &records, RenderPolicy::Strict)
        .expect_err("strict render fails on the bad column");
    assert_eq!(
        err,
        ColumnError::Eval {
            header: "BAD".to_string(),
            source: EvalError::field_not_found("nonexistent"),
        }
    );
}

#[test]
fn test_one_row_per_record() {
    let columns = parse_columns("NAME:.pod.metadata.name").expect("valid spec");

    let mut second = sample_record();
    second.pod.metadata.name = "test-pod-2".to_string();
    let records = [sample_record(), second];

    let table = render_table(&columns, &records, RenderPolicy::Lenient).expect("render");
    assert_eq!(table.lines().count(), 3);
}
