//! Service account records: the identity relation

use serde::{Deserialize, Serialize};

use super::meta::ObjectMeta;
use crate::fieldpath::value::{Record, ToValue, Value};

/// A service account, joined to a pod via `spec.serviceAccountName` within
/// the pod's namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceAccount {
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automount_service_account_token: Option<bool>,
}

impl Record for ServiceAccount {
    fn field(&self, alias: &str) -> Option<Value<'_>> {
        match alias {
            "metadata" => Some(self.metadata.to_value()),
            "automountServiceAccountToken" => {
                Some(self.automount_service_account_token.to_value())
            }
            _ => None,
        }
    }

    fn field_named(&self, name: &str) -> Option<Value<'_>> {
        match name {
            "Metadata" => Some(self.metadata.to_value()),
            "AutomountServiceAccountToken" => {
                Some(self.automount_service_account_token.to_value())
            }
            _ => None,
        }
    }
}

super::record_value!(ServiceAccount);
