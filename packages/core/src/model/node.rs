//! Node records: the scheduling host relation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::meta::ObjectMeta;
use crate::fieldpath::value::{Record, ToValue, Value};

/// A cluster node, joined to a pod via `spec.nodeName`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Node {
    pub metadata: ObjectMeta,
    pub spec: NodeSpec,
    pub status: NodeStatus,
}

impl Record for Node {
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

/// Desired node state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeSpec {
    #[serde(rename = "podCIDR")]
    pub pod_cidr: String,
    #[serde(rename = "providerID")]
    pub provider_id: String,
    pub unschedulable: bool,
}

impl Record for NodeSpec {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "podCIDR" => Some(self.pod_cidr.to_value()),
            "providerID" => Some(self.provider_id.to_value()),
            "unschedulable" => Some(self.unschedulable.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "PodCIDR" => Some(self.pod_cidr.to_value()),
            "ProviderID" => Some(self.provider_id.to_value()),
            "Unschedulable" => Some(self.unschedulable.to_value()),
            _ => None,
        }
    }
}

/// Observed node state: addresses, system info and resource totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeStatus {
    pub addresses: Vec<NodeAddress>,
    pub node_info: NodeSystemInfo,
    pub capacity: BTreeMap<String, String>,
    pub allocatable: BTreeMap<String, String>,
}

impl Record for NodeStatus {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "addresses" => Some(self.addresses.to_value()),
            "nodeInfo" => Some(self.node_info.to_value()),
            "capacity" => Some(self.capacity.to_value()),
            "allocatable" => Some(self.allocatable.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Addresses" => Some(self.addresses.to_value()),
            "NodeInfo" => Some(self.node_info.to_value()),
            "Capacity" => Some(self.capacity.to_value()),
            "Allocatable" => Some(self.allocatable.to_value()),
            _ => None,
        }
    }
}

/// One address record published by a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeAddress {
    #[serde(rename = "type")]
    pub address_type: String,
    pub address: String,
}

impl Record for NodeAddress {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "type" => Some(self.address_type.to_value()),
            "address" => Some(self.address.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Type" => Some(self.address_type.to_value()),
            "Address" => Some(self.address.to_value()),
            _ => None,
        }
    }
}

/// Kernel, OS and runtime versions reported by the kubelet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeSystemInfo {
    #[serde(rename = "machineID")]
    pub machine_id: String,
    pub kernel_version: String,
    pub os_image: String,
    pub operating_system: String,
    pub architecture: String,
    pub container_runtime_version: String,
    pub kubelet_version: String,
}

impl Record for NodeSystemInfo {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "machineID" => Some(self.machine_id.to_value()),
            "kernelVersion" => Some(self.kernel_version.to_value()),
            "osImage" => Some(self.os_image.to_value()),
            "operatingSystem" => Some(self.operating_system.to_value()),
            "architecture" => Some(self.architecture.to_value()),
            "containerRuntimeVersion" => Some(self.container_runtime_version.to_value()),
            "kubeletVersion" => Some(self.kubelet_version.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "MachineID" => Some(self.machine_id.to_value()),
            "KernelVersion" => Some(self.kernel_version.to_value()),
            "OSImage" => Some(self.os_image.to_value()),
            "OperatingSystem" => Some(self.operating_system.to_value()),
            "Architecture" => Some(self.architecture.to_value()),
            "ContainerRuntimeVersion" => Some(self.container_runtime_version.to_value()),
            "KubeletVersion" => Some(self.kubelet_version.to_value()),
            _ => None,
        }
    }
}

super::record_value!(Node, NodeSpec, NodeStatus, NodeAddress, NodeSystemInfo);
