//! Dotted field-path parsing and evaluation
//!
//! This module is the query engine of the crate: it compiles a dotted path
//! string into segments and evaluates those segments against a joined
//! record, dispatching on the runtime shape at each step (record, string
//! map, collection, scalar, absent reference).
//!
//! Parsing is purely lexical and never fails. Evaluation distinguishes two
//! outcomes that the path cannot reach a value: *benign absence* (an unset
//! relation, a missing map key, an empty claim list) renders the literal
//! `<none>`, while structural failures (unknown root selector, unresolvable
//! field, traversal into a scalar) surface as [`EvalError`].
//!
//! # Examples
//!
//! ```
//! use podwide_core::fieldpath::{FieldPath, evaluate};
//! use podwide_core::model::{JoinedRecord, Pod};
//!
//! let mut pod = Pod::default();
//! pod.metadata.name = "web-0".to_string();
//! let record = JoinedRecord::new(pod);
//!
//! let path = FieldPath::parse(".pod.metadata.name");
//! assert_eq!(evaluate(&record, &path).unwrap(), "web-0");
//! ```

pub mod error;
pub mod evaluator;
pub mod parser;
pub mod value;

pub use self::{
    error::{EvalError, EvalResult},
    evaluator::evaluate,
    parser::FieldPath,
    value::{NONE, Record, ToValue, Value},
};
