//! Code-point indexed view of the input text.
//!
//! All tokenizer offsets are Unicode code-point indices, not byte indices,
//! so multi-byte identifiers and literals keep stable spans. `Source`
//! materializes the code points once up front; dialect predicates then get
//! O(1) positional access and allocation-free prefix comparison.

/// The input string, indexed by code point.
#[derive(Debug, Clone, Default)]
pub struct Source {
    text: String,
    chars: Vec<char>,
}

impl Source {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// Length in code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The original text, unindexed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Code point at `pos`, or `None` past the end.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// The `[start, end)` code-point range as an owned string. Out-of-range
    /// positions are clamped to the end of the input.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Whether `needle` occurs at `pos`. ASCII case folding is applied when
    /// `case_sensitive` is false, matching SQL's keyword conventions.
    pub fn matches_at(&self, pos: usize, needle: &str, case_sensitive: bool) -> bool {
        let mut i = pos;
        for expected in needle.chars() {
            let Some(actual) = self.char_at(i) else {
                return false;
            };
            let hit = if case_sensitive {
                actual == expected
            } else {
                actual.eq_ignore_ascii_case(&expected)
            };
            if !hit {
                return false;
            }
            i += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_point_indexing() {
        let src = Source::new("héllo");
        assert_eq!(src.len(), 5); // code points, not bytes
        assert_eq!(src.char_at(1), Some('é'));
        assert_eq!(src.char_at(5), None);
        assert_eq!(src.slice(1, 4), "éll");
    }

    #[test]
    fn slice_clamps_out_of_range() {
        let src = Source::new("ab");
        assert_eq!(src.slice(1, 10), "b");
        assert_eq!(src.slice(5, 10), "");
    }

    #[test]
    fn prefix_matching_case_modes() {
        let src = Source::new("Select * FROM t");
        assert!(src.matches_at(0, "select", false));
        assert!(!src.matches_at(0, "select", true));
        assert!(src.matches_at(0, "Select", true));
        assert!(src.matches_at(9, "FROM", true));
        assert!(!src.matches_at(12, "FROM", true));
        assert!(!src.matches_at(14, "tx", true)); // runs past the end
    }
}
