//! Severity filtering driven by a string of filter letters.

use crate::entry::{LogEntry, Severity};

/// Filter letters used when none are given on the command line
pub const DEFAULT_PREFIXES: &str = "diwef";

/// Set of severities selected by filter letters such as `"we"`
///
/// Letters are matched case-sensitively; anything other than `d`, `i`, `w`, `e`
/// or `f` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityFilter {
    allowed: [bool; Severity::ALL.len()],
}

impl SeverityFilter {
    /// Build a filter from a string of filter letters
    pub fn from_letters(letters: &str) -> Self {
        let mut allowed = [false; Severity::ALL.len()];
        for (slot, severity) in allowed.iter_mut().zip(Severity::ALL) {
            *slot = letters.contains(severity.filter_letter());
        }
        Self { allowed }
    }

    /// Whether entries of `severity` are shown
    pub fn allows(&self, severity: Severity) -> bool {
        self.allowed[severity as usize]
    }

    /// Whether `entry` is kept; unrecognised labels never are
    pub fn accepts(&self, entry: &LogEntry) -> bool {
        entry.level().is_some_and(|severity| self.allows(severity))
    }
}

impl Default for SeverityFilter {
    fn default() -> Self {
        Self::from_letters(DEFAULT_PREFIXES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bstr::BString;
    use proptest::prelude::*;

    fn entry(severity: &str) -> LogEntry {
        LogEntry {
            timestamp: BString::from("2024-05-01 12:00:00"),
            severity: BString::from(severity),
            caller: BString::from("main.main"),
            message: BString::from("hello"),
        }
    }

    #[test]
    fn test_default_allows_everything() {
        let filter = SeverityFilter::default();
        for severity in Severity::ALL {
            assert!(filter.allows(severity));
        }
    }

    #[test]
    fn test_single_letter() {
        let filter = SeverityFilter::from_letters("w");
        assert!(filter.allows(Severity::Warning));
        assert!(!filter.allows(Severity::Debug));
        assert!(!filter.allows(Severity::Info));
        assert!(!filter.allows(Severity::Error));
        assert!(!filter.allows(Severity::Fatal));
    }

    #[test]
    fn test_letters_are_case_sensitive() {
        let filter = SeverityFilter::from_letters("DIWEF");
        for severity in Severity::ALL {
            assert!(!filter.allows(severity));
        }
    }

    #[test]
    fn test_unknown_letters_are_ignored() {
        let filter = SeverityFilter::from_letters("xyz-e!");
        assert!(filter.allows(Severity::Error));
        assert!(!filter.allows(Severity::Fatal));
        assert_eq!(filter, SeverityFilter::from_letters("e"));
    }

    #[test]
    fn test_unrecognised_label_never_accepted() {
        let filter = SeverityFilter::default();
        assert!(filter.accepts(&entry("Fatal")));
        assert!(!filter.accepts(&entry("Trace")));
        assert!(!filter.accepts(&entry("fatal")));
        assert!(!filter.accepts(&entry("")));
    }

    proptest! {
        #[test]
        fn prop_accepts_iff_letter_present(letters in "[a-z]{0,8}", index in 0usize..5) {
            let severity = Severity::ALL[index];
            let filter = SeverityFilter::from_letters(&letters);
            prop_assert_eq!(
                filter.accepts(&entry(severity.label())),
                letters.contains(severity.filter_letter())
            );
        }
    }
}
