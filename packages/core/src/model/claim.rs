//! Persistent volume claim records: the storage relation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::meta::ObjectMeta;
use crate::fieldpath::value::{Record, ToValue, Value};

/// A persistent volume claim, joined to a pod through its volume list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeClaim {
    pub metadata: ObjectMeta,
    pub spec: PersistentVolumeClaimSpec,
    pub status: PersistentVolumeClaimStatus,
}

impl Record for PersistentVolumeClaim {
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

/// Desired claim state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeClaimSpec {
    pub access_modes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
    pub volume_name: String,
}

impl Record for PersistentVolumeClaimSpec {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "accessModes" => Some(self.access_modes.to_value()),
            "storageClassName" => Some(self.storage_class_name.to_value()),
            "volumeName" => Some(self.volume_name.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "AccessModes" => Some(self.access_modes.to_value()),
            "StorageClassName" => Some(self.storage_class_name.to_value()),
            "VolumeName" => Some(self.volume_name.to_value()),
            _ => None,
        }
    }
}

/// Observed claim state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeClaimStatus {
    pub phase: String,
    pub capacity: BTreeMap<String, String>,
}

impl Record for PersistentVolumeClaimStatus {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "phase" => Some(self.phase.to_value()),
            "capacity" => Some(self.capacity.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Phase" => Some(self.phase.to_value()),
            "Capacity" => Some(self.capacity.to_value()),
            _ => None,
        }
    }
}

super::record_value!(
    PersistentVolumeClaim,
    PersistentVolumeClaimSpec,
    PersistentVolumeClaimStatus,
);
