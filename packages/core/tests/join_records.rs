//! Joiner integration tests, mirroring src/join

mod common;

use common::{sample_claim, sample_node, sample_pod, sample_service_account};
use podwide_core::{RelatedRecords, join_records};

#[test]
fn test_joins_every_relation_by_foreign_key() {
    let related = RelatedRecords::new(
        vec![sample_node()],
        vec![sample_service_account()],
        vec![sample_claim()],
    );

    let records = join_records(vec![sample_pod()], &related);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.pod.metadata.name, "test-pod");
    assert_eq!(record.node.as_ref().map(|n| n.metadata.name.as_str()), Some("node1"));
    assert_eq!(
        record.service_account.as_ref().map(|a| a.metadata.name.as_str()),
        Some("default")
    );
    assert_eq!(record.claims.len(), 1);
    assert_eq!(record.claims[0].metadata.name, "test-pvc");
}

#[test]
fn test_unscheduled_pod_joins_without_node() {
    let mut pod = sample_pod();
    pod.spec.node_name = String::new();

    let related = RelatedRecords::new(vec![sample_node()], vec![], vec![]);
    let records = join_records(vec![pod], &related);
    assert!(records[0].node.is_none());
}

#[test]
fn test_unknown_node_joins_as_absent() {
    let mut pod = sample_pod();
    pod.spec.node_name = "node-gone".to_string();

    let related = RelatedRecords::new(vec![sample_node()], vec![], vec![]);
    let records = join_records(vec![pod], &related);
    assert!(records[0].node.is_none());
}

#[test]
fn test_service_account_is_namespace_scoped() {
    let mut foreign = sample_service_account();
    foreign.metadata.namespace = "kube-system".to_string();

    let related = RelatedRecords::new(vec![], vec![foreign], vec![]);
    let records = join_records(vec![sample_pod()], &related);
    assert!(records[0].service_account.is_none());
}

#[test]
fn test_claims_keep_volume_order_and_skip_unresolved() {
    use podwide_core::{PersistentVolumeClaimSource, Volume};

    let mut pod = sample_pod();
    pod.spec.volumes = ["beta-pvc", "missing-pvc", "alpha-pvc"]
        .into_iter()
        .map(|claim_name| Volume {
            name: format!("vol-{claim_name}"),
            persistent_volume_claim: Some(PersistentVolumeClaimSource {
                claim_name: claim_name.to_string(),
            }),
        })
        .collect();

    let mut alpha = sample_claim();
    alpha.metadata.name = "alpha-pvc".to_string();
    let mut beta = sample_claim();
    beta.metadata.name = "beta-pvc".to_string();

    let related = RelatedRecords::new(vec![], vec![], vec![alpha, beta]);
    let records = join_records(vec![pod], &related);

    let names: Vec<&str> = records[0]
        .claims
        .iter()
        .map(|claim| claim.metadata.name.as_str())
        .collect();
    assert_eq!(names, ["beta-pvc", "alpha-pvc"]);
}

#[test]
fn test_empty_related_records_join_as_absent() {
    let related = RelatedRecords::default();
    let records = join_records(vec![sample_pod()], &related);

    let record = &records[0];
    assert!(record.node.is_none());
    assert!(record.service_account.is_none());
    assert!(record.claims.is_empty());
}
