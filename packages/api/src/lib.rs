//! # Podwide Public API
//!
//! Wide pod reports: pods joined with their node, service account and
//! persistent volume claims, queried by dotted field paths and rendered as
//! aligned columns.
//!
//! ```
//! use podwide::{JoinedRecord, Pod, Report};
//!
//! let mut pod = Pod::default();
//! pod.metadata.name = "web-0".to_string();
//! let records = vec![JoinedRecord::new(pod)];
//!
//! let report = Report::columns("NAME:.pod.metadata.name,NODE:.node.metadata.name")
//!     .expect("valid column spec");
//! let rendered = report.render(&records).expect("lenient render does not fail");
//! assert!(rendered.contains("web-0"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod report;

pub use report::Report;

// Re-export the core surface: path engine, record model, joiner, columns
pub use podwide_core::{
    CUSTOM_COLUMNS_PREFIX, Column, ColumnError, ColumnResult, Container, ContainerStatus,
    EvalError, EvalResult, FieldPath, JoinedRecord, List, NONE, Node, NodeAddress, NodeSpec,
    NodeStatus,
    NodeSystemInfo, ObjectMeta, OwnerReference, PersistentVolumeClaim,
    PersistentVolumeClaimSource, PersistentVolumeClaimSpec, PersistentVolumeClaimStatus, Pod,
    PodSpec, PodStatus, Record, RelatedRecords, RenderPolicy, ServiceAccount, ToValue, Value,
    Volume, evaluate, format_age, join_records, parse_columns, render_table,
};
