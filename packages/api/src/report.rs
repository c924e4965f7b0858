//! Fluent report builder
//!
//! Declares the columns of a report once, then renders any number of
//! record sets against them.

use podwide_core::{Column, ColumnResult, JoinedRecord, RenderPolicy, parse_columns, render_table};

/// Builder for column-based reports over joined records.
///
/// # Examples
///
/// ```
/// use podwide::{JoinedRecord, Pod, Report};
///
/// let report = Report::columns("NAME:.pod.metadata.name,PHASE:.pod.status.phase")
///     .expect("valid column spec");
///
/// let mut pod = Pod::default();
/// pod.metadata.name = "web-0".to_string();
/// pod.status.phase = "Running".to_string();
///
/// let rendered = report
///     .render(&[JoinedRecord::new(pod)])
///     .expect("lenient render does not fail");
/// assert!(rendered.contains("Running"));
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    columns: Vec<Column>,
    policy: RenderPolicy,
}

impl Report {
    /// Create a report from a custom-columns spec such as
    /// `NAME:.pod.metadata.name,NODE:.node.metadata.name`.
    ///
    /// Paths compile once here and are reused for every record rendered.
    pub fn columns(spec: &str) -> ColumnResult<Self> {
        Ok(Self {
            columns: parse_columns(spec)?,
            policy: RenderPolicy::default(),
        })
    }

    /// Abort rendering on the first evaluation error instead of
    /// substituting `<none>`.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.policy = RenderPolicy::Strict;
        self
    }

    /// Override the render policy.
    #[must_use]
    pub fn policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Declared columns in render order.
    pub fn declared(&self) -> &[Column] {
        &self.columns
    }

    /// Render the header row plus one row per record.
    pub fn render(&self, records: &[JoinedRecord]) -> ColumnResult<String> {
        render_table(&self.columns, records, self.policy)
    }
}
