//! Column declarations and report rendering
//!
//! A report is declared as `HEADER:path` pairs. Each path compiles once and
//! the renderer drives the evaluator once per `(record, column)` pair,
//! aligning the results into a borderless table. Under the default lenient
//! policy an evaluation error degrades into a `<none>` cell instead of
//! aborting the report.

pub mod format;
pub mod render;
pub mod spec;

pub use self::{
    format::format_age,
    render::{RenderPolicy, render_table},
    spec::{CUSTOM_COLUMNS_PREFIX, Column, ColumnError, ColumnResult, parse_columns},
};
