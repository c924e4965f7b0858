//! Shared record fixtures for integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use podwide_core::{
    Container, ContainerStatus, JoinedRecord, Node, NodeAddress, NodeSystemInfo, ObjectMeta,
    OwnerReference, PersistentVolumeClaim, PersistentVolumeClaimSource, Pod, ServiceAccount,
    Volume,
};

pub fn sample_pod() -> Pod {
    let mut pod = Pod::default();
    pod.metadata = ObjectMeta {
        name: "test-pod".to_string(),
        namespace: "default".to_string(),
        labels: BTreeMap::from([("app".to_string(), "myapp".to_string())]),
        creation_timestamp: Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()),
        owner_references: vec![OwnerReference {
            kind: "ReplicaSet".to_string(),
            name: "test-rs".to_string(),
            controller: Some(true),
        }],
        ..ObjectMeta::default()
    };
    pod.spec.node_name = "node1".to_string();
    pod.spec.service_account_name = "default".to_string();
    pod.spec.containers = vec![Container {
        name: "app".to_string(),
        image: "registry.example.com/app:1.2.3".to_string(),
    }];
    pod.spec.volumes = vec![Volume {
        name: "data".to_string(),
        persistent_volume_claim: Some(PersistentVolumeClaimSource {
            claim_name: "test-pvc".to_string(),
        }),
    }];
    pod.status.phase = "Running".to_string();
    pod.status.pod_ip = "10.0.0.7".to_string();
    pod.status.container_statuses = vec![ContainerStatus {
        name: "app".to_string(),
        ready: true,
        restart_count: 3,
        image: "registry.example.com/app:1.2.3".to_string(),
    }];
    pod
}

pub fn sample_node() -> Node {
    let mut node = Node::default();
    node.metadata.name = "node1".to_string();
    node.metadata.labels =
        BTreeMap::from([("kubernetes.io/os".to_string(), "linux".to_string())]);
    node.status.addresses = vec![NodeAddress {
        address_type: "InternalIP".to_string(),
        address: "192.168.1.10".to_string(),
    }];
    node.status.node_info = NodeSystemInfo {
        operating_system: "linux".to_string(),
        architecture: "arm64".to_string(),
        kubelet_version: "v1.29.2".to_string(),
        ..NodeSystemInfo::default()
    };
    node
}

pub fn sample_service_account() -> ServiceAccount {
    let mut account = ServiceAccount::default();
    account.metadata.name = "default".to_string();
    account.metadata.namespace = "default".to_string();
    account
}

pub fn sample_claim() -> PersistentVolumeClaim {
    let mut claim = PersistentVolumeClaim::default();
    claim.metadata.name = "test-pvc".to_string();
    claim.metadata.namespace = "default".to_string();
    claim.spec.storage_class_name = Some("standard".to_string());
    claim.status.phase = "Bound".to_string();
    claim
}

/// A joined record with every relation present.
pub fn sample_record() -> JoinedRecord {
    JoinedRecord {
        pod: sample_pod(),
        node: Some(sample_node()),
        service_account: Some(sample_service_account()),
        claims: vec![sample_claim()],
    }
}
