//! Public API tests for the fluent report builder

use podwide::{
    ColumnError, EvalError, JoinedRecord, NONE, Pod, RelatedRecords, Report, join_records,
};

fn sample_records() -> Vec<JoinedRecord> {
    let mut pod = Pod::default();
    pod.metadata.name = "web-0".to_string();
    pod.metadata.namespace = "default".to_string();
    pod.status.phase = "Running".to_string();
    join_records(vec![pod], &RelatedRecords::default())
}

#[test]
fn test_report_renders_declared_columns() {
    let report = Report::columns("NAME:.pod.metadata.name,PHASE:.pod.status.phase")
        .expect("valid column spec");
    assert_eq!(report.declared().len(), 2);

    let rendered = report.render(&sample_records()).expect("lenient render");
    let row = rendered.lines().nth(1).expect("record row");
    assert!(row.contains("web-0"));
    assert!(row.contains("Running"));
}

#[test]
fn test_report_substitutes_none_for_absent_relations() {
    let report =
        Report::columns("NAME:.pod.metadata.name,NODE:.node.metadata.name").expect("valid spec");
    let rendered = report.render(&sample_records()).expect("lenient render");
    assert!(rendered.contains(NONE));
}

#[test]
fn test_strict_report_propagates_evaluation_errors() {
    let report = Report::columns("BAD:.pod.metadata.nonexistent")
        .expect("valid spec")
        .strict();

    let err = report
        .render(&sample_records())
        .expect_err("strict render fails");
    assert_eq!(
        err,
        ColumnError::Eval {
            header: "BAD".to_string(),
            source: EvalError::field_not_found("nonexistent"),
        }
    );
}

#[test]
fn test_invalid_column_spec_is_rejected() {
    assert!(matches!(
        Report::columns("NAME-without-path"),
        Err(ColumnError::InvalidColumn { .. })
    ));
}
