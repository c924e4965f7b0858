//! In-memory joining of pods with their related records
//!
//! Builds lookup indices once over the related record lists, then joins
//! each pod to its node, service account and claims by foreign key. Listing
//! the records from a cluster is the caller's concern: joining operates on
//! fully materialized lists and performs no I/O. A relation missing from
//! the indices joins as absent rather than failing.

use hashbrown::HashMap;

use crate::model::{JoinedRecord, Node, PersistentVolumeClaim, Pod, ServiceAccount};

/// Related record lists, indexed for joining.
///
/// Nodes are cluster-scoped and indexed by name; service accounts and
/// claims are indexed by `namespace/name`.
#[derive(Debug, Default)]
pub struct RelatedRecords {
    nodes: HashMap<String, Node>,
    service_accounts: HashMap<String, ServiceAccount>,
    claims: HashMap<String, PersistentVolumeClaim>,
}

impl RelatedRecords {
    /// Index the related record lists for joining.
    pub fn new(
        nodes: Vec<Node>,
        service_accounts: Vec<ServiceAccount>,
        claims: Vec<PersistentVolumeClaim>,
    ) -> Self {
        let nodes = nodes
            .into_iter()
            .map(|node| (node.metadata.name.clone(), node))
            .collect();
        let service_accounts = service_accounts
            .into_iter()
            .map(|account| {
                (
                    namespaced_key(&account.metadata.namespace, &account.metadata.name),
                    account,
                )
            })
            .collect();
        let claims = claims
            .into_iter()
            .map(|claim| {
                (
                    namespaced_key(&claim.metadata.namespace, &claim.metadata.name),
                    claim,
                )
            })
            .collect();

        Self {
            nodes,
            service_accounts,
            claims,
        }
    }

    fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    fn service_account(&self, namespace: &str, name: &str) -> Option<&ServiceAccount> {
        self.service_accounts.get(&namespaced_key(namespace, name))
    }

    fn claim(&self, namespace: &str, name: &str) -> Option<&PersistentVolumeClaim> {
        self.claims.get(&namespaced_key(namespace, name))
    }
}

/// Index key for records scoped to a namespace.
fn namespaced_key(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

/// Join each pod with its related records.
///
/// The node is matched by `spec.nodeName`, the service account by
/// `spec.serviceAccountName` within the pod's namespace (an empty name
/// joins as absent), and claims in volume order through each volume's
/// claim reference. Unresolved claim references are skipped.
pub fn join_records(pods: Vec<Pod>, related: &RelatedRecords) -> Vec<JoinedRecord> {
    pods.into_iter()
        .map(|pod| join_one(pod, related))
        .collect()
}

fn join_one(pod: Pod, related: &RelatedRecords) -> JoinedRecord {
    let node = match pod.spec.node_name.as_str() {
        "" => None,
        name => related.node(name).cloned(),
    };

    let service_account = match pod.spec.service_account_name.as_str() {
        "" => None,
        name => related.service_account(&pod.metadata.namespace, name).cloned(),
    };

    let claims: Vec<PersistentVolumeClaim> = pod
        .spec
        .volumes
        .iter()
        .filter_map(|volume| volume.persistent_volume_claim.as_ref())
        .filter_map(|source| {
            related
                .claim(&pod.metadata.namespace, &source.claim_name)
                .cloned()
        })
        .collect();

    JoinedRecord {
        pod,
        node,
        service_account,
        claims,
    }
}
