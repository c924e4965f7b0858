//! Object metadata shared by every record type

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fieldpath::value::{Record, ToValue, Value};

/// Identifying metadata carried by every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMeta {
    pub name: String,
    pub namespace: String,
    pub uid: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub owner_references: Vec<OwnerReference>,
}

impl Record for ObjectMeta {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "name" => Some(self.name.to_value()),
            "namespace" => Some(self.namespace.to_value()),
            "uid" => Some(self.uid.to_value()),
            "labels" => Some(self.labels.to_value()),
            "annotations" => Some(self.annotations.to_value()),
            "creationTimestamp" => Some(self.creation_timestamp.to_value()),
            "ownerReferences" => Some(self.owner_references.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Name" => Some(self.name.to_value()),
            "Namespace" => Some(self.namespace.to_value()),
            "UID" => Some(self.uid.to_value()),
            "Labels" => Some(self.labels.to_value()),
            "Annotations" => Some(self.annotations.to_value()),
            "CreationTimestamp" => Some(self.creation_timestamp.to_value()),
            "OwnerReferences" => Some(self.owner_references.to_value()),
            _ => None,
        }
    }
}

/// Owning controller reference attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerReference {
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<bool>,
}

impl Record for OwnerReference {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "kind" => Some(self.kind.to_value()),
            "name" => Some(self.name.to_value()),
            "controller" => Some(self.controller.to_value()),
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Kind" => Some(self.kind.to_value()),
            "Name" => Some(self.name.to_value()),
            "Controller" => Some(self.controller.to_value()),
            _ => None,
        }
    }
}

super::record_value!(ObjectMeta, OwnerReference);
