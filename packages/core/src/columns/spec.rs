//! Custom column declarations
//!
//! A column spec is a comma-separated list of `HEADER:path` pairs, e.g.
//! `NAME:.pod.metadata.name,NODE:.node.metadata.name`. The spec may carry a
//! `custom-columns=` prefix, which is accepted and stripped.

use thiserror::Error;

use crate::fieldpath::{EvalError, FieldPath};

/// Accepted prefix on a column spec.
pub const CUSTOM_COLUMNS_PREFIX: &str = "custom-columns=";

/// One declared output column: header text plus the compiled path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub path: FieldPath,
}

/// Result type for column handling.
pub type ColumnResult<T> = Result<T, ColumnError>;

/// Failures in column spec parsing or strict rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    /// The spec contained no column definitions.
    #[error("empty custom columns spec")]
    Empty,

    /// A definition was missing the `HEADER:path` separator.
    #[error("invalid custom-columns format: {definition}")]
    InvalidColumn {
        /// The malformed definition as written
        definition: String,
    },

    /// Strict rendering hit an evaluation error.
    #[error("column {header:?}: {source}")]
    Eval {
        /// Header of the failing column
        header: String,
        /// The underlying evaluation failure
        #[source]
        source: EvalError,
    },
}

/// Parse a column spec into compiled columns.
///
/// Each definition must contain a `:` separating header from path; the
/// path compiles once here and is reused for every record rendered.
pub fn parse_columns(spec: &str) -> ColumnResult<Vec<Column>> {
    let spec = spec.strip_prefix(CUSTOM_COLUMNS_PREFIX).unwrap_or(spec);
    if spec.is_empty() {
        return Err(ColumnError::Empty);
    }

    spec.split(',')
        .map(|definition| match definition.split_once(':') {
            Some((header, path)) => Ok(Column {
                header: header.to_string(),
                path: FieldPath::parse(path),
            }),
            None => Err(ColumnError::InvalidColumn {
                definition: definition.to_string(),
            }),
        })
        .collect()
}
