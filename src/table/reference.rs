use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;
use url::Url;

/// Location of a persisted nested table, stored in the parent table instead of the data.
///
/// Always rendered as `file:///<path>` with forward slashes, whatever the platform
/// separator of the underlying path is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableReference(String);

impl TableReference {
    const SCHEME: &'static str = "file:///";

    /// Builds a reference to a file path.
    pub fn from_path(path: &Path) -> Self {
        let path = path.to_string_lossy().replace('\\', "/");
        Self(format!("{}{}", Self::SCHEME, path.trim_start_matches('/')))
    }

    /// Returns the reference text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the reference as a URL.
    pub fn to_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.0)
    }
}

impl Display for TableReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TableReference> for String {
    fn from(reference: TableReference) -> Self {
        reference.0
    }
}
