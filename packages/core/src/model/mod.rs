//! Typed record model for wide pod reports
//!
//! Immutable, serde-(de)serializable records covering the slice of the pod,
//! node, service-account and claim surface the report exposes. Every struct
//! serializes under camelCase wire names and implements
//! [`crate::fieldpath::Record`] with an explicit resolution table, so the
//! evaluator can walk it without reflection.

pub mod claim;
pub mod joined;
pub mod list;
pub mod meta;
pub mod node;
pub mod pod;
pub mod service_account;

pub use claim::{PersistentVolumeClaim, PersistentVolumeClaimSpec, PersistentVolumeClaimStatus};
pub use joined::JoinedRecord;
pub use list::List;
pub use meta::{ObjectMeta, OwnerReference};
pub use node::{Node, NodeAddress, NodeSpec, NodeStatus, NodeSystemInfo};
pub use pod::{
    Container, ContainerStatus, PersistentVolumeClaimSource, Pod, PodSpec, PodStatus, Volume,
};
pub use service_account::ServiceAccount;

/// Implements [`crate::fieldpath::ToValue`] for record types so their
/// fields can nest inside other records.
macro_rules! record_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::fieldpath::value::ToValue for $ty {
                fn to_value(&self) -> $crate::fieldpath::value::Value<'_> {
                    $crate::fieldpath::value::Value::Record(self)
                }
            }
        )+
    };
}

pub(crate) use record_value;
