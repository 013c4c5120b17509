//! # Examples Provider
//!
//! Turns a data set id into examples table text: loads the data set, applies the
//! defaults taken from the general data set and renders the combined table.
use crate::builder::ColumnarTableBuilder;
use crate::config::ProviderConfig;
use crate::error::ExamplesError;
use crate::error::ResultMessage;
use crate::helpers::persister::FsTablePersister;
use crate::helpers::persister::TablePersister;
use crate::source::retry::RetryingSource;
use crate::source::TabularDataSource;
use crate::spreadsheet::criteria::Criteria;
use crate::spreadsheet::select_sheets;
use crate::spreadsheet::SheetData;
use crate::table::columnar::ColumnarTable;
use crate::table::defaults::GeneralDefaults;
use tracing::info;

/// Builds examples tables for data sets of one source.
///
/// The general defaults are loaded on first use and kept for the lifetime of the
/// provider.
pub struct ExamplesProvider<S, P> {
    source: S,
    persister: P,
    criteria: Criteria,
    general_dataset_id: String,
    defaults: Option<GeneralDefaults>,
    loaded: usize,
}

impl<S: TabularDataSource> ExamplesProvider<RetryingSource<S>, FsTablePersister> {
    /// Creates a provider from configuration, retrying the source per the configured
    /// policy and writing nested tables below the resources directory.
    pub fn from_config(source: S, config: &ProviderConfig) -> Self {
        ExamplesProvider::new(
            RetryingSource::new(source, config.retry.to_owned()),
            FsTablePersister::new(&config.resources_dir),
            &config.general_dataset_id,
        )
    }
}

impl<S: TabularDataSource, P: TablePersister> ExamplesProvider<S, P> {
    pub fn new(source: S, persister: P, general_dataset_id: &str) -> Self {
        Self {
            source,
            persister,
            criteria: Criteria::default(),
            general_dataset_id: general_dataset_id.to_owned(),
            defaults: None,
            loaded: 0,
        }
    }

    /// Replaces the criteria selecting the sheets of requested data sets.
    /// The general data set only drops sheets with the excluded prefix.
    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    /// Builds and renders the examples table of a data set.
    pub fn examples_table(&mut self, id: &str) -> Result<String, ExamplesError> {
        let text = self
            .load_table(id)
            .and_then(|table| table.render().map_err(ExamplesError::from))
            .with_prefix(&format!("Data set '{id}'"))?;
        info!("Examples table for '{id}' is ready.");
        Ok(text)
    }

    /// Builds the table of a data set with the general defaults applied.
    pub fn load_table(&mut self, id: &str) -> Result<ColumnarTable, ExamplesError> {
        let data = select_sheets(self.fetch(id)?, &self.criteria);
        self.general_defaults()?;
        let builder = ColumnarTableBuilder::new(&mut self.persister);
        match &self.defaults {
            Some(defaults) => builder.with_defaults(defaults).build(data),
            None => builder.build(data),
        }
    }

    /// Returns the general defaults, loading them on first use.
    pub fn general_defaults(&mut self) -> Result<&GeneralDefaults, ExamplesError> {
        let defaults = match self.defaults.take() {
            Some(defaults) => {
                info!("General data file already loaded.");
                defaults
            }
            None => {
                let id = self.general_dataset_id.to_owned();
                info!("General file was not loaded yet. Loading general data file with id {id}");
                self.load_general_defaults(&id)
                    .with_prefix(&format!("General data set '{id}'"))?
            }
        };
        Ok(self.defaults.insert(defaults))
    }

    /// Number of data sets fetched from the source so far.
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn persister(&self) -> &P {
        &self.persister
    }

    fn load_general_defaults(&mut self, id: &str) -> Result<GeneralDefaults, ExamplesError> {
        let data = select_sheets(self.fetch(id)?, &Criteria::default());
        let table = ColumnarTableBuilder::new(&mut self.persister).build(data)?;
        table.validate()?;
        Ok(GeneralDefaults::from_table(id, &table)?)
    }

    fn fetch(&mut self, id: &str) -> Result<SheetData, ExamplesError> {
        self.loaded += 1;
        info!("Loading data set '{id}'. Loaded data sets count: {}", self.loaded);
        let data = self.source.fetch(id)?;
        info!("Data loaded.");
        Ok(data)
    }
}
