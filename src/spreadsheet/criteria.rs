use glob::Pattern;

/// Criteria for selecting which sheets of a data set become runs.
#[derive(Clone, Debug)]
pub struct Criteria {
    /// Sheets whose title starts with this prefix are skipped.
    pub excluded_prefix: String,

    /// Sheet name patterns; when present only matching sheets are kept.
    pub sheet_name_patterns: Option<Vec<Pattern>>,
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria {
            excluded_prefix: "!".to_owned(),
            sheet_name_patterns: None,
        }
    }
}

impl Criteria {
    /// Builds criteria keeping only sheets matching one of the glob patterns.
    pub fn with_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, glob::PatternError> {
        let patterns = patterns
            .iter()
            .map(|pattern| Pattern::new(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Criteria {
            sheet_name_patterns: Some(patterns),
            ..Criteria::default()
        })
    }

    /// Checks if a sheet title matches the criteria.
    /// Excluded titles never match; otherwise true if no patterns are specified or if
    /// the title matches any pattern.
    pub fn accept(&self, sheet_name: &str) -> bool {
        if !self.excluded_prefix.is_empty() && sheet_name.starts_with(&self.excluded_prefix) {
            return false;
        }
        if let Some(patterns) = &self.sheet_name_patterns {
            patterns.iter().any(|pattern| pattern.matches(sheet_name))
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_skips_commented_sheets() {
        let criteria = Criteria::default();
        assert!(criteria.accept("Run1"));
        assert!(!criteria.accept("!Draft"));
    }

    #[test]
    fn accept_with_patterns() {
        let criteria = Criteria::with_patterns(&["Run*", "Smoke"]).unwrap();
        assert!(criteria.accept("Run1"));
        assert!(criteria.accept("Smoke"));
        assert!(!criteria.accept("Regression"));
        assert!(!criteria.accept("!Run1"));
    }

    #[test]
    fn invalid_pattern() {
        assert!(Criteria::with_patterns(&["Run[1"]).is_err());
    }
}
