//! Classification of the machine tags found in the third column of a sheet.
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const NESTED_START: &str = "@startNestedStructure ";
const NESTED_END: &str = "@endNestedStructure";

static NESTED_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^#]*)#([^#]*)$").expect("Hardcode regex pattern"));

/// Errors in tag syntax or in the nesting of tagged structures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nested row tag without exactly one `#` between type and label.
    #[error("Malformed nested tag '{0}': expected '@<type>#<label>'")]
    MalformedNestedTag(String),

    /// A structure was opened while another one was still open, or never closed.
    #[error("Nested structure '{0}' is not closed")]
    UnclosedNestedStructure(String),

    /// Nested row or end tag with no open structure.
    #[error("Tag '{0}' is outside of a nested structure")]
    NestedRowOutsideStructure(String),
}

/// Meaning of a single tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagKind<'a> {
    /// Empty or commented-out (`!`) tag, the row is skipped.
    Ignore,
    /// Value goes to the column with this name.
    FlatLabel(&'a str),
    /// Opens a nested structure with this name.
    NestedStart(&'a str),
    /// Row of the open nested structure.
    NestedRow { kind: &'a str, label: &'a str },
    /// Closes the open nested structure.
    NestedEnd,
}

impl<'a> TagKind<'a> {
    /// Classifies a raw tag.
    ///
    /// Nested row tags have the form `@<type>#<label>` and must contain exactly one `#`.
    pub fn classify(tag: &'a str) -> Result<Self, ParseError> {
        if tag.is_empty() || tag.starts_with('!') {
            Ok(Self::Ignore)
        } else if let Some(name) = tag.strip_prefix(NESTED_START) {
            Ok(Self::NestedStart(name))
        } else if tag == NESTED_END {
            Ok(Self::NestedEnd)
        } else if let Some(body) = tag.strip_prefix('@') {
            let (_, [kind, label]) = NESTED_ROW
                .captures(body)
                .ok_or_else(|| ParseError::MalformedNestedTag(tag.to_owned()))?
                .extract();
            Ok(Self::NestedRow { kind, label })
        } else {
            Ok(Self::FlatLabel(tag))
        }
    }
}
