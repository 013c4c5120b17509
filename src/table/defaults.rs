use crate::table::columnar::ColumnarTable;
use crate::table::ValidationError;
use crate::table::RUN_NAME;
use indexmap::IndexMap;

/// One row of default column values applied to every run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneralDefaults {
    values: IndexMap<String, String>,
}

impl GeneralDefaults {
    /// Takes the first row of a table built from the general data set.
    pub fn from_table(name: &str, table: &ColumnarTable) -> Result<Self, ValidationError> {
        let values = table
            .row(0)
            .ok_or_else(|| ValidationError::EmptyGeneralData(name.to_owned()))?;
        Ok(Self { values })
    }

    /// Returns the default value of a column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends every default value except `RunName` to the table, once.
    ///
    /// Must be called exactly once per run so the default columns keep the same
    /// length as the `RunName` column.
    pub(crate) fn merge_into(&self, table: &mut ColumnarTable) {
        for (column, value) in &self.values {
            if column != RUN_NAME {
                table.push(column, value.as_str());
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for GeneralDefaults
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}
