//! Root selector dispatch
//!
//! The first path segment picks which side of the join the remaining
//! segments traverse. The vocabulary is fixed and case-sensitive: `pod`,
//! `node`, `serviceAccount` (alias `sa`) and `pvcs` (alias `pvc`).

use crate::fieldpath::error::{EvalError, EvalResult};
use crate::fieldpath::parser::FieldPath;
use crate::fieldpath::value::{NONE, ToValue, Value};
use crate::model::JoinedRecord;

/// Outcome of root selection.
#[derive(Debug)]
pub enum Selection<'a> {
    /// Evaluation finished at the root (absent relation, claim-name list,
    /// or a path with no further segments)
    Rendered(String),
    /// Cursor positioned on the selected record, with the segments still
    /// to traverse
    Cursor(Value<'a>, &'a [String]),
}

/// Select the root value addressed by the path's first segment.
///
/// An absent relation short-circuits to `<none>` regardless of how many
/// segments follow. A claim list selected with no further segments renders
/// the name of each claim joined by commas rather than a generic
/// traversal.
pub fn select_root<'a>(
    record: &'a JoinedRecord,
    path: &'a FieldPath,
) -> EvalResult<Selection<'a>> {
    let Some((selector, rest)) = path.segments().split_first() else {
        return Err(EvalError::invalid_root(path.original()));
    };

    let cursor = match selector.as_str() {
        "pod" => Value::Record(&record.pod),
        "node" => match &record.node {
            Some(node) => Value::Record(node),
            None => return Ok(Selection::Rendered(NONE.to_string())),
        },
        "serviceAccount" | "sa" => match &record.service_account {
            Some(account) => Value::Record(account),
            None => return Ok(Selection::Rendered(NONE.to_string())),
        },
        "pvcs" | "pvc" => {
            if record.claims.is_empty() {
                return Ok(Selection::Rendered(NONE.to_string()));
            }
            if rest.is_empty() {
                let names: Vec<&str> = record
                    .claims
                    .iter()
                    .map(|claim| claim.metadata.name.as_str())
                    .collect();
                return Ok(Selection::Rendered(names.join(",")));
            }
            record.claims.to_value()
        }
        _ => return Err(EvalError::invalid_root(selector)),
    };

    if rest.is_empty() {
        return Ok(Selection::Rendered(cursor.to_string()));
    }

    Ok(Selection::Cursor(cursor, rest))
}
