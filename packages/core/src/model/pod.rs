//! Pod records: the primary side of every join

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meta::ObjectMeta;
use crate::fieldpath::value::{Record, ToValue, Value};

/// A pod as listed from a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pod {
    pub metadata: ObjectMeta,
    pub spec: PodSpec,
    pub status: PodStatus,
}

impl Record for Pod {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "metadata" => Some(self.metadata.to_value()),
            "spec" => Some(self.spec.to_value()),
            "status" => Some(self.status.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Metadata" => Some(self.metadata.to_value()),
            "Spec" => Some(self.spec.to_value()),
            "Status" => Some(self.status.to_value()),
            _ => None,
        }
    }
}

/// Desired pod state: scheduling target, identity and attached volumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodSpec {
    pub node_name: String,
    pub service_account_name: String,
    pub restart_policy: String,
    pub host_network: bool,
    pub containers: Vec<Container>,
    pub volumes: Vec<Volume>,
}

impl Record for PodSpec {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "nodeName" => Some(self.node_name.to_value()),
            "serviceAccountName" => Some(self.service_account_name.to_value()),
            "restartPolicy" => Some(self.restart_policy.to_value()),
            "hostNetwork" => Some(self.host_network.to_value()),
            "containers" => Some(self.containers.to_value()),
            "volumes" => Some(self.volumes.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "NodeName" => Some(self.node_name.to_value()),
            "ServiceAccountName" => Some(self.service_account_name.to_value()),
            "RestartPolicy" => Some(self.restart_policy.to_value()),
            "HostNetwork" => Some(self.host_network.to_value()),
            "Containers" => Some(self.containers.to_value()),
            "Volumes" => Some(self.volumes.to_value()),
            _ => None,
        }
    }
}

/// One container declared in a pod spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
    pub name: String,
    pub image: String,
}

impl Record for Container {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "name" => Some(self.name.to_value()),
            "image" => Some(self.image.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Name" => Some(self.name.to_value()),
            "Image" => Some(self.image.to_value()),
            _ => None,
        }
    }
}

/// A volume attached to a pod; only claim-backed volumes carry a source
/// here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volume {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim: Option<PersistentVolumeClaimSource>,
}

impl Record for Volume {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "name" => Some(self.name.to_value()),
            "persistentVolumeClaim" => Some(self.persistent_volume_claim.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Name" => Some(self.name.to_value()),
            "PersistentVolumeClaim" => Some(self.persistent_volume_claim.to_value()),
            _ => None,
        }
    }
}

/// Reference from a pod volume to a claim in the same namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeClaimSource {
    pub claim_name: String,
}

impl Record for PersistentVolumeClaimSource {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "claimName" => Some(self.claim_name.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "ClaimName" => Some(self.claim_name.to_value()),
            _ => None,
        }
    }
}

/// Observed pod state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodStatus {
    pub phase: String,
    #[serde(rename = "podIP")]
    pub pod_ip: String,
    #[serde(rename = "hostIP")]
    pub host_ip: String,
    pub qos_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    pub container_statuses: Vec<ContainerStatus>,
}

impl Record for PodStatus {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "phase" => Some(self.phase.to_value()),
            "podIP" => Some(self.pod_ip.to_value()),
            "hostIP" => Some(self.host_ip.to_value()),
            "qosClass" => Some(self.qos_class.to_value()),
            "startTime" => Some(self.start_time.to_value()),
            "containerStatuses" => Some(self.container_statuses.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Phase" => Some(self.phase.to_value()),
            "PodIP" => Some(self.pod_ip.to_value()),
            "HostIP" => Some(self.host_ip.to_value()),
            "QOSClass" => Some(self.qos_class.to_value()),
            "StartTime" => Some(self.start_time.to_value()),
            "ContainerStatuses" => Some(self.container_statuses.to_value()),
            _ => None,
        }
    }
}

/// Observed state of one container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStatus {
    pub name: String,
    pub ready: bool,
    pub restart_count: i32,
    pub image: String,
}

impl Record for ContainerStatus {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "name" => Some(self.name.to_value()),
            "ready" => Some(self.ready.to_value()),
            "restartCount" => Some(self.restart_count.to_value()),
            "image" => Some(self.image.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Name" => Some(self.name.to_value()),
            "Ready" => Some(self.ready.to_value()),
            "RestartCount" => Some(self.restart_count.to_value()),
            "Image" => Some(self.image.to_value()),
            _ => None,
        }
    }
}

super::record_value!(
    Pod,
    PodSpec,
    Container,
    Volume,
    PersistentVolumeClaimSource,
    PodStatus,
    ContainerStatus,
);
