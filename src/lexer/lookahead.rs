//! Longest-match lookup against a fixed candidate set.
//!
//! Dialects resolve multi-character operators (`<=`, `||`, `<>`, ...) by
//! asking which candidate string occurs at the current scan position. A
//! longer match always beats a shorter one, so candidates are deduplicated
//! and bucketed by code-point length up front and the buckets are probed
//! longest-first. Among equal-length candidates at most one can match a
//! given position under case-sensitive matching; under case-insensitive
//! matching two candidates differing only in case are interchangeable, and
//! which one is reported is unspecified.

use crate::lexer::source::Source;
use itertools::Itertools;

/// A fixed set of candidate strings matched by longest prefix at a
/// position, in either case-sensitive or ASCII case-insensitive mode.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    case_sensitive: bool,
    /// `(length, candidates)` buckets, longest first.
    buckets: Vec<(usize, Vec<String>)>,
}

impl CandidateSet {
    pub fn new<I, S>(candidates: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let buckets = candidates
            .into_iter()
            .map(Into::into)
            .filter(|c| !c.is_empty())
            .unique()
            .map(|c| (c.chars().count(), c))
            .into_group_map()
            .into_iter()
            .sorted_by(|a, b| b.0.cmp(&a.0))
            .collect();
        Self {
            case_sensitive,
            buckets,
        }
    }

    /// The longest candidate occurring at `pos`, or `None`.
    ///
    /// Returns the candidate itself (not the source slice), so callers get
    /// the canonical spelling under case-insensitive matching.
    pub fn longest_match(&self, source: &Source, pos: usize) -> Option<&str> {
        for (length, bucket) in &self.buckets {
            if pos + length > source.len() {
                continue;
            }
            for candidate in bucket {
                if source.matches_at(pos, candidate, self.case_sensitive) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators() -> CandidateSet {
        CandidateSet::new(["<", "<=", "<<", "=", "==", "(", ";"], true)
    }

    #[test]
    fn longer_match_wins() {
        let src = Source::new("a <= b");
        assert_eq!(operators().longest_match(&src, 2), Some("<="));
    }

    #[test]
    fn falls_back_to_shorter() {
        let src = Source::new("a < b");
        assert_eq!(operators().longest_match(&src, 2), Some("<"));
    }

    #[test]
    fn no_match() {
        let src = Source::new("abc");
        assert_eq!(operators().longest_match(&src, 0), None);
    }

    #[test]
    fn respects_end_of_input() {
        let src = Source::new("x<");
        // only the single-char bucket fits at the last position
        assert_eq!(operators().longest_match(&src, 1), Some("<"));
    }

    #[test]
    fn case_insensitive_mode() {
        let set = CandidateSet::new(["NOT", "NOTNULL"], false);
        let src = Source::new("notnull x");
        assert_eq!(set.longest_match(&src, 0), Some("NOTNULL"));
        let src = Source::new("not x");
        assert_eq!(set.longest_match(&src, 0), Some("NOT"));
    }

    #[test]
    fn duplicates_collapse() {
        let set = CandidateSet::new(["<", "<", "<="], true);
        let src = Source::new("<=");
        assert_eq!(set.longest_match(&src, 0), Some("<="));
    }
}
