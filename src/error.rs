use thiserror::Error;

/// Main error type for the examples table builder.
/// Aggregates errors from the input, table, persistence and configuration modules.
#[derive(Error, Debug)]
pub enum ExamplesError {
    #[error("{context}: {source}")]
    WithContextError {
        context: String,
        source: Box<ExamplesError>,
    },

    // Table module errors
    #[error("{0}")]
    ValidationError(#[from] crate::table::ValidationError),

    // Spreadsheet module errors
    #[error("{0}")]
    ParseError(#[from] crate::spreadsheet::tag::ParseError),

    // Boundary errors
    #[error("{0}")]
    PersistError(#[from] crate::helpers::persister::PersistError),

    #[error("{0}")]
    SourceError(#[from] crate::source::SourceError),

    #[error("{0}")]
    ConfigError(#[from] crate::config::ConfigError),
}

impl ExamplesError {
    /// Returns the error under all context prefixes.
    pub fn root(&self) -> &ExamplesError {
        match self {
            Self::WithContextError { source, .. } => source.root(),
            error => error,
        }
    }
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, ExamplesError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| ExamplesError::WithContextError {
            context: message.to_owned(),
            source: Box::new(e),
        })
    }
}
