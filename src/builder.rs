//! # Columnar Table Builder
//!
//! Folds sheets of three parallel columns into one table with a row per sheet.
//! Each call owns its table and its nested structure extractor, so builders never
//! share state with each other.
use crate::error::ExamplesError;
use crate::error::ResultMessage;
use crate::helpers::persister::persist_nested;
use crate::helpers::persister::TablePersister;
use crate::spreadsheet::sheet::SheetColumnSet;
use crate::spreadsheet::tag::TagKind;
use crate::spreadsheet::SheetData;
use crate::table::columnar::ColumnarTable;
use crate::table::defaults::GeneralDefaults;
use crate::table::nested::NestedExtractor;
use crate::table::single_line;
use crate::table::RUN_NAME;
use tracing::debug;
use tracing::info;

/// Builds one examples table from the sheets of a data set.
pub struct ColumnarTableBuilder<'a> {
    table: ColumnarTable,
    defaults: Option<&'a GeneralDefaults>,
    persister: &'a mut dyn TablePersister,
}

impl<'a> ColumnarTableBuilder<'a> {
    /// Creates a builder persisting nested tables through `persister`.
    pub fn new(persister: &'a mut dyn TablePersister) -> Self {
        Self {
            table: ColumnarTable::new(),
            defaults: None,
            persister,
        }
    }

    /// Applies the given defaults to every run added afterwards.
    pub fn with_defaults(mut self, defaults: &'a GeneralDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Adds every sheet in order and returns the finished table.
    ///
    /// The shape of every sheet is checked before the first one is added, so a
    /// malformed sheet leaves no nested table behind.
    pub fn build(mut self, data: SheetData) -> Result<ColumnarTable, ExamplesError> {
        info!("Parsing {} sheets to examples table.", data.len());
        let sheets = data
            .into_iter()
            .map(|(title, columns)| SheetColumnSet::new(&title, columns))
            .collect::<Result<Vec<_>, _>>()?;
        for sheet in &sheets {
            self.add_sheet(sheet).with_prefix(&format!("Sheet '{}'", sheet.title))?;
        }
        Ok(self.table)
    }

    /// Adds one sheet as one run.
    fn add_sheet(&mut self, sheet: &SheetColumnSet) -> Result<(), ExamplesError> {
        debug!("Adding run '{}' with {} rows.", sheet.title, sheet.len());
        self.table.push(RUN_NAME, sheet.title.as_str());
        if let Some(defaults) = self.defaults {
            defaults.merge_into(&mut self.table);
        }

        let mut extractor = NestedExtractor::default();
        for (tag, value) in sheet.tagged_values() {
            match TagKind::classify(tag)? {
                TagKind::Ignore => (),
                TagKind::FlatLabel(column) => self.table.push(column, single_line(value)),
                nested => {
                    if let Some(spec) = extractor.feed(&nested, value)? {
                        let reference = persist_nested(&mut *self.persister, &spec)?;
                        self.table.push(&spec.name, reference);
                    }
                }
            }
        }
        extractor.finish()?;
        Ok(())
    }
}
