//! # Podwide Core
//!
//! Record model, in-memory relation joiner and dotted field-path query
//! engine behind the `podwide` public API.
//!
//! A wide pod report starts from a list of pods plus the related records a
//! cluster returned (nodes, service accounts, persistent volume claims).
//! [`join::join_records`] materializes one immutable [`model::JoinedRecord`]
//! per pod, and [`fieldpath::evaluate`] resolves dotted paths such as
//! `.node.metadata.labels.kubernetes\.io/os` against it. The [`columns`]
//! module drives the evaluator once per declared column per record and
//! aligns the results into a report.
//!
//! Listing records from a cluster, authentication and retry behavior are
//! deliberately out of scope: callers hand this crate fully materialized
//! record lists.

#![deny(unsafe_code)]
#![warn(clippy::all)]

// Core modules
pub mod columns;
pub mod fieldpath;
pub mod join;
pub mod model;

// Prelude with canonical types
pub mod prelude;

pub use crate::prelude::*;
