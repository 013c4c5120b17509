//! # Table Module
//!
//! In-memory representation of the examples table and everything that grows it:
//! the ordered columnar table with its row-count check and pipe-delimited rendering,
//! the nested structure extractor, general defaults and table references.
use std::fmt::Display;
use std::fmt::Formatter;
use thiserror::Error;

pub(crate) mod columnar;
pub(crate) mod defaults;
pub(crate) mod nested;
pub(crate) mod reference;

/// Reserved column holding one run name (sheet title) per row.
pub const RUN_NAME: &str = "RunName";

/// A column whose length disagrees with the table's row count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnLength {
    /// Column name
    pub name: String,
    /// Number of values actually stored in the column
    pub length: usize,
}

impl Display for ColumnLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' has {} entries", self.name, self.length)
    }
}

/// Structural errors detected in input sheets or in the assembled table.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Sheet does not consist of exactly three parallel columns.
    #[error("Sheet '{sheet}' has wrong shape: {message}")]
    ShapeMismatch { sheet: String, message: String },

    /// One or more columns do not have one entry per run.
    #[error("Wrong labels entries count, each label should have {expected} entries: {}", join(.columns))]
    RowCountMismatch {
        expected: usize,
        columns: Vec<ColumnLength>,
    },

    /// The general data set produced no row to take defaults from.
    #[error("General data set '{0}' contains no runs")]
    EmptyGeneralData(String),
}

fn join(columns: &[ColumnLength]) -> String {
    columns
        .iter()
        .map(ColumnLength::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replaces line breaks inside a cell value so it stays on one table row.
pub(crate) fn single_line(value: &str) -> String {
    value.replace('\n', " ")
}
