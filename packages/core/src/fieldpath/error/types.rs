//! Evaluation error types for field-path queries
//!
//! Benign absence (an unset relation, a missing map key, an empty claim
//! list, a nil reference mid-walk) is not an error; it renders as the
//! `<none>` marker. These types cover the structural failures only.

use thiserror::Error;

/// Result type for field-path evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Failures raised while evaluating a field path against a joined record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// First path segment is not in the root selector vocabulary.
    #[error("path must start with 'pod', 'node', 'serviceAccount' or 'pvcs', got: {selector:?}")]
    InvalidRootSelector {
        /// The offending first segment (empty for a zero-segment path)
        selector: String,
    },

    /// A record field could not be resolved by wire alias or capitalized
    /// declared name.
    #[error("field {segment:?} not found")]
    FieldNotFound {
        /// The segment that failed to resolve
        segment: String,
    },

    /// Path segments remain but the current value is a scalar or a
    /// collection.
    #[error("cannot access field {segment:?} on {kind} value")]
    NotTraversable {
        /// The segment that could not be applied
        segment: String,
        /// Shape of the value it was applied to
        kind: &'static str,
    },

    /// Cursor became structurally invalid mid-traversal. Defensive; not
    /// expected under normal inputs.
    #[error("invalid value at segment {index} ({segment:?})")]
    InvalidCursor {
        /// Zero-based index of the segment being applied
        index: usize,
        /// The segment being applied
        segment: String,
    },
}

impl EvalError {
    /// Unknown (or missing) root selector.
    pub fn invalid_root(selector: impl Into<String>) -> Self {
        Self::InvalidRootSelector {
            selector: selector.into(),
        }
    }

    /// Field resolution failed on a record.
    pub fn field_not_found(segment: impl Into<String>) -> Self {
        Self::FieldNotFound {
            segment: segment.into(),
        }
    }

    /// Traversal attempted through a non-traversable shape.
    pub fn not_traversable(segment: impl Into<String>, kind: &'static str) -> Self {
        Self::NotTraversable {
            segment: segment.into(),
            kind,
        }
    }

    /// Structurally invalid cursor (defensive).
    pub fn invalid_cursor(index: usize, segment: impl Into<String>) -> Self {
        Self::InvalidCursor {
            index,
            segment: segment.into(),
        }
    }
}
