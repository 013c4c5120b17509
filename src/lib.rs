//! # Examples Table Builder
//!
//! Reshapes spreadsheet data sets into examples tables for data-driven tests.
//!
//! Every sheet of a data set has three parallel columns: a human readable label, a
//! value and a machine tag. Every sheet becomes one run (one row) of the examples
//! table and the tags decide where each value ends up:
//!
//! - **Empty or `!` tags**: the row is ignored
//! - **Plain tags**: the value goes to the column named after the tag
//! - **Nested structures**: rows between `@startNestedStructure <name>` and
//!   `@endNestedStructure`, tagged `@<type>#<label>`, are collected into a separate
//!   `label|type|value` table. That table is written to a file and the column `<name>`
//!   receives its `file:///` reference
//!
//! A general data set supplies default values merged into every run, and the final
//! table is rendered as pipe-delimited text:
//!
//! ```text
//! |RunName|Env|Button|
//! |Run1|prod|Submit|
//! |Run2|prod|Cancel|
//! ```
//!
//! ## Entry Points
//!
//! - [`ExamplesProvider`]: load a data set from a [`TabularDataSource`] and render it
//! - [`ColumnarTableBuilder`]: fold already loaded sheets into a [`ColumnarTable`]
mod builder;
mod config;
mod error;
mod helpers;
mod provider;
mod source;
mod spreadsheet;
mod table;

pub use crate::builder::ColumnarTableBuilder;
pub use crate::config::ConfigError;
pub use crate::config::ProviderConfig;
pub use crate::error::ExamplesError;
pub use crate::helpers::persister::FsTablePersister;
pub use crate::helpers::persister::PersistError;
pub use crate::helpers::persister::TablePersister;
pub use crate::provider::ExamplesProvider;
pub use crate::source::retry::RetryPolicy;
pub use crate::source::retry::RetryingSource;
pub use crate::source::MemorySource;
pub use crate::source::SourceError;
pub use crate::source::TabularDataSource;
pub use crate::spreadsheet::criteria::Criteria;
pub use crate::spreadsheet::select_sheets;
pub use crate::spreadsheet::sheet::RawColumns;
pub use crate::spreadsheet::sheet::SheetColumnSet;
pub use crate::spreadsheet::tag::ParseError;
pub use crate::spreadsheet::tag::TagKind;
pub use crate::spreadsheet::SheetData;
pub use crate::table::columnar::ColumnarTable;
pub use crate::table::defaults::GeneralDefaults;
pub use crate::table::nested::NestedExtractor;
pub use crate::table::nested::NestedTableSpec;
pub use crate::table::reference::TableReference;
pub use crate::table::ColumnLength;
pub use crate::table::ValidationError;
pub use crate::table::RUN_NAME;

/// Builds and renders the examples table of already loaded sheets.
///
/// Nested tables are handed to `persister`; `defaults`, when given, are merged into
/// every run.
pub fn build_examples_table(
    data: SheetData,
    defaults: Option<&GeneralDefaults>,
    persister: &mut dyn TablePersister,
) -> Result<String, ExamplesError> {
    let builder = ColumnarTableBuilder::new(persister);
    let builder = match defaults {
        Some(defaults) => builder.with_defaults(defaults),
        None => builder,
    };
    Ok(builder.build(data)?.render()?)
}
