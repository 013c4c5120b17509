use crate::table::ColumnLength;
use crate::table::ValidationError;
use crate::table::RUN_NAME;
use indexmap::IndexMap;
use tracing::debug;
use tracing::info;
use tracing::warn;

/// Ordered mapping from column name to per-row values.
///
/// Column insertion order is the header order of the rendered table. Columns may
/// temporarily differ in length while the table is being built; the lengths are
/// checked once, right before rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnarTable {
    columns: IndexMap<String, Vec<String>>,
}

impl ColumnarTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to the named column, creating the column at the end if absent.
    pub fn push(&mut self, column: &str, value: impl Into<String>) {
        self.column_mut(column).push(value.into());
    }

    /// Returns the named column, creating it empty if absent.
    pub(crate) fn column_mut(&mut self, column: &str) -> &mut Vec<String> {
        self.columns.entry(column.to_owned()).or_default()
    }

    /// Returns the values of a column.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Returns column names in header order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    /// Returns true if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows the table is expected to have.
    ///
    /// Tables with a `RunName` column have one row per run; tables without it
    /// (nested tables) take the length of their first column.
    pub fn row_count(&self) -> usize {
        self.columns
            .get(RUN_NAME)
            .or_else(|| self.columns.values().next())
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Returns the given row as an ordered column → value mapping.
    pub fn row(&self, index: usize) -> Option<IndexMap<String, String>> {
        if index >= self.row_count() {
            return None;
        }
        self.columns
            .iter()
            .map(|(name, values)| values.get(index).map(|value| (name.to_owned(), value.to_owned())))
            .collect()
    }

    /// Checks that every column has exactly one entry per row.
    ///
    /// All offending columns are reported, not only the first one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let expected = self.row_count();
        let columns: Vec<ColumnLength> = self
            .columns
            .iter()
            .filter(|(_, values)| values.len() != expected)
            .map(|(name, values)| ColumnLength {
                name: name.to_owned(),
                length: values.len(),
            })
            .collect();
        if columns.is_empty() {
            debug!("Table validation passed.");
            Ok(())
        } else {
            warn!("Invalid labels in data set. Each label should have {expected} entries.");
            for column in &columns {
                warn!("Label: {}, Entries count: {}", column.name, column.length);
            }
            Err(ValidationError::RowCountMismatch { expected, columns })
        }
    }

    /// Validates the table and renders it as pipe-delimited text.
    ///
    /// The header row is `|name` for each column followed by `|\n`; every data row
    /// uses the same layout with the row's values.
    pub fn render(&self) -> Result<String, ValidationError> {
        self.validate()?;
        info!("Converting table with {} columns to text.", self.columns.len());
        let mut text = String::new();
        for name in self.columns.keys() {
            text.push('|');
            text.push_str(name);
        }
        text.push_str("|\n");
        for row in 0..self.row_count() {
            for values in self.columns.values() {
                text.push('|');
                text.push_str(&values[row]);
            }
            text.push_str("|\n");
        }
        Ok(text)
    }
}
