//! The joined record evaluated by field paths

use serde::{Deserialize, Serialize};

use super::claim::PersistentVolumeClaim;
use super::node::Node;
use super::pod::Pod;
use super::service_account::ServiceAccount;

/// One pod enriched with its related records.
///
/// The pod is always present; every relation is independently optional. A
/// joined record is immutable once constructed: evaluation only reads it,
/// so it may be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JoinedRecord {
    pub pod: Pod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account: Option<ServiceAccount>,
    pub claims: Vec<PersistentVolumeClaim>,
}

impl JoinedRecord {
    /// A record with no relations resolved yet.
    pub fn new(pod: Pod) -> Self {
        Self {
            pod,
            node: None,
            service_account: None,
            claims: Vec::new(),
        }
    }
}
