//! List payloads as returned by a cluster

use serde::{Deserialize, Serialize};

/// A list response (`{"items": [...]}`), e.g. the payload behind
/// `kubectl get pods -o json`. Deserializing one of these per record type
/// is all it takes to feed the joiner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct List<T> {
    pub items: Vec<T>,
}

impl<T> List<T> {
    /// Take ownership of the listed items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
