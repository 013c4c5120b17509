use crate::table::ValidationError;

/// A sheet as it comes from a data source: a title and its columns.
pub type RawColumns = Vec<Vec<String>>;

/// A validated sheet of three parallel columns.
///
/// Row `i` of a sheet is `(labels[i], values[i], tags[i])`: a human readable label, the
/// value for that label and the machine tag that decides where the value goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetColumnSet {
    /// Sheet title, becomes the run name
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<String>,
    pub tags: Vec<String>,
}

impl SheetColumnSet {
    /// Number of columns every sheet must have.
    pub const COLUMNS: usize = 3;

    /// Validates the shape of a raw sheet.
    ///
    /// Fails unless the sheet has exactly three columns of equal length.
    pub fn new(title: &str, columns: RawColumns) -> Result<Self, ValidationError> {
        let mismatch = |message: String| ValidationError::ShapeMismatch {
            sheet: title.to_owned(),
            message,
        };
        let [labels, values, tags]: [Vec<String>; Self::COLUMNS] = columns
            .try_into()
            .map_err(|columns: RawColumns| {
                mismatch(format!("expected {} columns, found {}", Self::COLUMNS, columns.len()))
            })?;
        if labels.len() != values.len() || values.len() != tags.len() {
            return Err(mismatch(format!(
                "columns have different lengths (labels: {}, values: {}, tags: {})",
                labels.len(),
                values.len(),
                tags.len()
            )));
        }
        Ok(Self {
            title: title.to_owned(),
            labels,
            values,
            tags,
        })
    }

    /// Iterates over `(tag, value)` pairs in row order.
    pub fn tagged_values(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tags
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(columns: &[&[&str]]) -> RawColumns {
        columns
            .iter()
            .map(|column| column.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn sheet_three_columns() {
        let sheet = SheetColumnSet::new(
            "Run1",
            columns(&[&["Button label", "Link"], &["Submit", "Home"], &["Button", ""]]),
        )
        .unwrap();
        assert_eq!(sheet.title, "Run1");
        assert_eq!(sheet.len(), 2);
        assert_eq!(
            sheet.tagged_values().collect::<Vec<_>>(),
            vec![("Button", "Submit"), ("", "Home")]
        );
    }

    #[test]
    fn sheet_two_columns() {
        let error = SheetColumnSet::new("Run1", columns(&[&["a"], &["b"]])).unwrap_err();
        assert_eq!(
            error,
            ValidationError::ShapeMismatch {
                sheet: "Run1".to_owned(),
                message: "expected 3 columns, found 2".to_owned(),
            }
        );
    }

    #[test]
    fn sheet_four_columns() {
        let error = SheetColumnSet::new("Run1", columns(&[&[], &[], &[], &[]])).unwrap_err();
        assert!(matches!(error, ValidationError::ShapeMismatch { .. }));
    }

    #[test]
    fn sheet_ragged_columns() {
        let error = SheetColumnSet::new("Run1", columns(&[&["a", "b"], &["1"], &["A", "B"]])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Sheet 'Run1' has wrong shape: columns have different lengths (labels: 2, values: 1, tags: 2)"
        );
    }
}
