use crate::spreadsheet::tag::ParseError;
use crate::spreadsheet::tag::TagKind;
use crate::table::columnar::ColumnarTable;
use crate::table::single_line;
use std::mem;

/// Sub-table collected between a start and an end tag, one row per nested row tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NestedTableSpec {
    /// Structure name, also the parent column receiving the table reference
    pub name: String,
    pub labels: Vec<String>,
    pub types: Vec<String>,
    pub values: Vec<String>,
}

impl NestedTableSpec {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    fn push(&mut self, kind: &str, label: &str, value: &str) {
        self.labels.push(label.to_owned());
        self.types.push(kind.to_owned());
        self.values.push(single_line(value));
    }

    /// Number of captured rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Converts the structure into a `label`, `type`, `value` table.
    pub fn to_table(&self) -> ColumnarTable {
        let mut table = ColumnarTable::new();
        table.column_mut("label").extend(self.labels.iter().cloned());
        table.column_mut("type").extend(self.types.iter().cloned());
        table.column_mut("value").extend(self.values.iter().cloned());
        table
    }
}

/// State of the nested structure extractor.
#[derive(Debug, Default)]
pub enum NestedExtractor {
    #[default]
    Idle,
    Collecting(NestedTableSpec),
}

impl NestedExtractor {
    /// Feeds one nested tag and its co-indexed value.
    ///
    /// Returns the finished structure when the tag closes it. Non-nested tags are
    /// ignored and leave the state unchanged.
    pub fn feed(&mut self, tag: &TagKind, value: &str) -> Result<Option<NestedTableSpec>, ParseError> {
        match (mem::take(self), tag) {
            (Self::Idle, TagKind::NestedStart(name)) => {
                *self = Self::Collecting(NestedTableSpec::new(name));
                Ok(None)
            }
            (Self::Collecting(spec), TagKind::NestedStart(_)) => {
                Err(ParseError::UnclosedNestedStructure(spec.name))
            }
            (Self::Collecting(mut spec), TagKind::NestedRow { kind, label }) => {
                spec.push(kind, label, value);
                *self = Self::Collecting(spec);
                Ok(None)
            }
            (Self::Collecting(spec), TagKind::NestedEnd) => Ok(Some(spec)),
            (Self::Idle, TagKind::NestedRow { kind, label }) => {
                Err(ParseError::NestedRowOutsideStructure(format!("@{kind}#{label}")))
            }
            (Self::Idle, TagKind::NestedEnd) => {
                Err(ParseError::NestedRowOutsideStructure("@endNestedStructure".to_owned()))
            }
            (state, _) => {
                *self = state;
                Ok(None)
            }
        }
    }

    /// Ends the tag sequence of a sheet; an open structure at this point is an error.
    pub fn finish(self) -> Result<(), ParseError> {
        match self {
            Self::Idle => Ok(()),
            Self::Collecting(spec) => Err(ParseError::UnclosedNestedStructure(spec.name)),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
