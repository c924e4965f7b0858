//! Podwide Core Prelude
//!
//! Canonical types of the public surface. Only types a consumer of wide
//! pod reports actually touches belong here.

// Path compilation and evaluation
pub use crate::fieldpath::{EvalError, EvalResult, FieldPath, NONE, Record, ToValue, Value, evaluate};

// Record model
pub use crate::model::{
    Container, ContainerStatus, JoinedRecord, List, Node, NodeAddress, NodeSpec, NodeStatus,
    NodeSystemInfo, ObjectMeta, OwnerReference, PersistentVolumeClaim, PersistentVolumeClaimSource,
    PersistentVolumeClaimSpec, PersistentVolumeClaimStatus, Pod, PodSpec, PodStatus,
    ServiceAccount, Volume,
};

// Relation joining
pub use crate::join::{RelatedRecords, join_records};

// Column declarations and rendering
pub use crate::columns::{
    CUSTOM_COLUMNS_PREFIX, Column, ColumnError, ColumnResult, RenderPolicy, format_age,
    parse_columns, render_table,
};
