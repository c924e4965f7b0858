//! Field-path evaluation errors

pub mod types;

pub use types::{EvalError, EvalResult};
