//! Column-driven report rendering
//!
//! Drives the evaluator once per `(record, column)` pair and aligns the
//! cells into a borderless table: a header row, then one row per record.

use comfy_table::Table;
use comfy_table::presets::NOTHING;

use super::spec::{Column, ColumnError, ColumnResult};
use crate::fieldpath::{NONE, evaluate};
use crate::model::JoinedRecord;

/// How evaluation errors surface in rendered cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Substitute `<none>` for cells whose path fails to evaluate; the
    /// failure is logged at debug level
    #[default]
    Lenient,
    /// Abort on the first evaluation error
    Strict,
}

/// Render a header row plus one row per record.
///
/// Cells whose path resolves to benign absence already carry the `<none>`
/// marker; under [`RenderPolicy::Lenient`] evaluation errors degrade to
/// the same marker so one bad column never aborts the report.
pub fn render_table(
    columns: &[Column],
    records: &[JoinedRecord],
    policy: RenderPolicy,
) -> ColumnResult<String> {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(columns.iter().map(|column| column.header.clone()));

    for record in records {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            match evaluate(record, &column.path) {
                Ok(cell) => cells.push(cell),
                Err(err) if policy == RenderPolicy::Lenient => {
                    log::debug!(
                        "column {:?}: path {:?} failed: {}",
                        column.header,
                        column.path.original(),
                        err
                    );
                    cells.push(NONE.to_string());
                }
                Err(err) => {
                    return Err(ColumnError::Eval {
                        header: column.header.clone(),
                        source: err,
                    });
                }
            }
        }
        table.add_row(cells);
    }

    Ok(table.to_string())
}
