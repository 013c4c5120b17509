//! Storage of nested tables rendered to text.
use crate::error::ExamplesError;
use crate::table::nested::NestedTableSpec;
use crate::table::reference::TableReference;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use tracing::info;
use uuid::Uuid;

/// Errors while storing a nested table.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create temporary table '{}': {source}", .path.display())]
    WriteTable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Destination for rendered nested tables.
pub trait TablePersister {
    /// Stores the table text under a name derived from `name` and returns its location.
    ///
    /// Implementations must never overwrite an earlier table and must create any
    /// missing directory.
    fn persist(&mut self, name: &str, text: &str) -> Result<TableReference, PersistError>;
}

/// Writes tables as `testData<uuid>.table` files below `<resources>/data/tables`.
#[derive(Clone, Debug)]
pub struct FsTablePersister {
    directory: PathBuf,
}

impl FsTablePersister {
    /// Subdirectory of the resources root holding the tables.
    pub const TABLES_DIR: [&'static str; 2] = ["data", "tables"];

    pub fn new(resources_dir: &Path) -> Self {
        let resources_dir = std::path::absolute(resources_dir).unwrap_or_else(|_| resources_dir.to_path_buf());
        let directory = Self::TABLES_DIR
            .iter()
            .fold(resources_dir, |path, part| path.join(part));
        Self { directory }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn file_name() -> String {
        format!("testData{}.table", Uuid::new_v4())
    }
}

impl TablePersister for FsTablePersister {
    fn persist(&mut self, name: &str, text: &str) -> Result<TableReference, PersistError> {
        if !self.directory.exists() {
            std::fs::create_dir_all(&self.directory).map_err(|source| PersistError::CreateDirectory {
                path: self.directory.to_owned(),
                source,
            })?;
            info!("Directories created: {}", self.directory.display());
        }
        let path = self.directory.join(Self::file_name());
        debug!("File name generated for '{name}': {}", path.display());
        write_new(&path, text).map_err(|source| PersistError::WriteTable {
            path: path.to_owned(),
            source,
        })?;
        Ok(TableReference::from_path(&path))
    }
}

/// Writes a file that must not exist yet.
fn write_new(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}

/// Renders a finished nested structure and hands it to the persister.
pub(crate) fn persist_nested(
    persister: &mut dyn TablePersister,
    spec: &NestedTableSpec,
) -> Result<TableReference, ExamplesError> {
    let text = spec.to_table().render()?;
    let reference = persister.persist(&spec.name, &text)?;
    info!("Temporary table path: {reference}");
    Ok(reference)
}
