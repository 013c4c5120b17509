//! # Spreadsheet Module
//!
//! Input side of the examples table: sheets of three parallel columns, the criteria
//! that select them and the classification of the tags in their third column.
use crate::spreadsheet::criteria::Criteria;
use crate::spreadsheet::sheet::RawColumns;
use indexmap::IndexMap;

pub(crate) mod criteria;
pub(crate) mod sheet;
pub(crate) mod tag;

/// All sheets of one data set, keyed by title in source order.
pub type SheetData = IndexMap<String, RawColumns>;

/// Drops the sheets rejected by the criteria, keeping the order of the rest.
pub fn select_sheets(data: SheetData, criteria: &Criteria) -> SheetData {
    data.into_iter()
        .filter(|(title, _)| criteria.accept(title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_keeps_order() {
        let data: SheetData = ["Run2", "!Notes", "Run1"]
            .into_iter()
            .map(|title| (title.to_owned(), RawColumns::new()))
            .collect();
        let selected = select_sheets(data, &Criteria::default());
        assert_eq!(selected.keys().collect::<Vec<_>>(), vec!["Run2", "Run1"]);
    }
}
