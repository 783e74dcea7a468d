//! Pluggable lexical rules for one SQL variant.
//!
//! The tokenizer engine is dialect-agnostic: everything that distinguishes
//! one SQL flavor from another (whitespace characters, comment syntax, the
//! operator and keyword inventory, identifier and string quoting) lives
//! behind the [`Dialect`] trait. The engine
//! calls the predicates at the current scan position; a predicate either
//! declines (`None`) or reports how many code points it consumed and, for
//! token-producing matches, the canonical content to store.
//!
//! A [`SqliteDialect`] implementation ships in the `sqlite` submodule.

use crate::lexer::source::Source;

pub mod sqlite;
pub use sqlite::SqliteDialect;

/// One successful lexical match: consumed length in code points plus the
/// canonical content for the emitted token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub length: usize,
    pub content: String,
}

impl Match {
    pub fn new(length: usize, content: impl Into<String>) -> Self {
        Self {
            length,
            content: content.into(),
        }
    }
}

/// Classification predicates supplied by a concrete SQL dialect.
///
/// All lengths are code points. A predicate must never report a zero
/// length; the engine treats that as [`crate::Error::InvalidAdvance`].
pub trait Dialect {
    /// Length of the whitespace run starting at `pos`, if any.
    fn match_whitespace(&self, source: &Source, pos: usize) -> Option<usize>;

    /// Length of the comment (line or block) starting at `pos`, if any.
    fn match_comment(&self, source: &Source, pos: usize) -> Option<usize>;

    /// Longest operator or punctuation token starting at `pos`.
    fn match_operator(&self, source: &Source, pos: usize) -> Option<Match>;

    /// Longest quoted or bracketed identifier starting at `pos`.
    fn match_identifier(&self, source: &Source, pos: usize) -> Option<Match>;

    /// Longest quoted string literal starting at `pos`.
    fn match_string_literal(&self, source: &Source, pos: usize) -> Option<Match>;

    /// Whether an accumulated bare word is a reserved keyword; returns the
    /// canonical spelling (e.g. uppercased) when it is.
    fn keyword(&self, word: &str) -> Option<String>;
}
