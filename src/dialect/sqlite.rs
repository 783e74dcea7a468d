//! SQLite lexical rules.
//!
//! Matches SQLite's tokenizer behavior for the constructs this crate cares
//! about: `--` line comments and `/* */` block comments (unterminated block
//! comments run to end of input, as SQLite accepts), double-quote /
//! backtick / bracket identifier quoting with doubled-delimiter escapes,
//! single-quoted string literals with `''` escapes, the operator and
//! punctuation inventory, and case-insensitive reserved words canonicalized
//! to uppercase.

use crate::dialect::{Dialect, Match};
use crate::lexer::lookahead::CandidateSet;
use crate::lexer::source::Source;
use std::collections::HashSet;

const OPERATORS: &[&str] = &[
    "(", ")", ";", ",", ".", "+", "-", "*", "/", "%", "=", "==", "!=", "<>", "<", "<=", ">", ">=",
    "||", "<<", ">>", "&", "|", "~",
];

const KEYWORDS: &[&str] = &[
    "ABORT",
    "ACTION",
    "ADD",
    "AFTER",
    "ALL",
    "ALTER",
    "ALWAYS",
    "ANALYZE",
    "AND",
    "AS",
    "ASC",
    "ATTACH",
    "AUTOINCREMENT",
    "BEFORE",
    "BEGIN",
    "BETWEEN",
    "BY",
    "CASCADE",
    "CASE",
    "CAST",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "COMMIT",
    "CONFLICT",
    "CONSTRAINT",
    "CREATE",
    "CROSS",
    "CURRENT",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "DATABASE",
    "DEFAULT",
    "DEFERRABLE",
    "DEFERRED",
    "DELETE",
    "DESC",
    "DETACH",
    "DISTINCT",
    "DO",
    "DROP",
    "EACH",
    "ELSE",
    "END",
    "ESCAPE",
    "EXCEPT",
    "EXCLUDE",
    "EXCLUSIVE",
    "EXISTS",
    "EXPLAIN",
    "FAIL",
    "FILTER",
    "FIRST",
    "FOLLOWING",
    "FOR",
    "FOREIGN",
    "FROM",
    "FULL",
    "GENERATED",
    "GLOB",
    "GROUP",
    "GROUPS",
    "HAVING",
    "IF",
    "IGNORE",
    "IMMEDIATE",
    "IN",
    "INDEX",
    "INDEXED",
    "INITIALLY",
    "INNER",
    "INSERT",
    "INSTEAD",
    "INTERSECT",
    "INTO",
    "IS",
    "ISNULL",
    "JOIN",
    "KEY",
    "LAST",
    "LEFT",
    "LIKE",
    "LIMIT",
    "MATCH",
    "MATERIALIZED",
    "NATURAL",
    "NO",
    "NOT",
    "NOTHING",
    "NOTNULL",
    "NULL",
    "NULLS",
    "OF",
    "OFFSET",
    "ON",
    "OR",
    "ORDER",
    "OTHERS",
    "OUTER",
    "OVER",
    "PARTITION",
    "PLAN",
    "PRAGMA",
    "PRECEDING",
    "PRIMARY",
    "QUERY",
    "RAISE",
    "RANGE",
    "RECURSIVE",
    "REFERENCES",
    "REGEXP",
    "REINDEX",
    "RELEASE",
    "RENAME",
    "REPLACE",
    "RESTRICT",
    "RETURNING",
    "RIGHT",
    "ROLLBACK",
    "ROW",
    "ROWS",
    "SAVEPOINT",
    "SELECT",
    "SET",
    "TABLE",
    "TEMP",
    "TEMPORARY",
    "THEN",
    "TIES",
    "TO",
    "TRANSACTION",
    "TRIGGER",
    "UNBOUNDED",
    "UNION",
    "UNIQUE",
    "UPDATE",
    "USING",
    "VACUUM",
    "VALUES",
    "VIEW",
    "VIRTUAL",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
    "WITHOUT",
];

/// SQLite's lexical rules.
#[derive(Debug, Clone)]
pub struct SqliteDialect {
    operators: CandidateSet,
    keywords: HashSet<&'static str>,
}

impl SqliteDialect {
    pub fn new() -> Self {
        Self {
            operators: CandidateSet::new(OPERATORS.iter().copied(), true),
            keywords: KEYWORDS.iter().copied().collect(),
        }
    }

    /// Scan a delimited region starting at `pos` whose opening delimiter is
    /// `open`, closed by `close`, where a doubled closing delimiter escapes
    /// itself when `escape_by_doubling`. Returns the total matched length
    /// including both delimiters, or `None` when unterminated.
    fn match_delimited(
        source: &Source,
        pos: usize,
        open: char,
        close: char,
        escape_by_doubling: bool,
    ) -> Option<usize> {
        if source.char_at(pos) != Some(open) {
            return None;
        }
        let mut i = pos + 1;
        while let Some(c) = source.char_at(i) {
            if c == close {
                if escape_by_doubling && source.char_at(i + 1) == Some(close) {
                    i += 2;
                    continue;
                }
                return Some(i + 1 - pos);
            }
            i += 1;
        }
        // Unterminated: no match, the engine falls back to buffering.
        None
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqliteDialect {
    fn match_whitespace(&self, source: &Source, pos: usize) -> Option<usize> {
        let mut i = pos;
        while let Some(c) = source.char_at(i) {
            if matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0b' | '\x0c') {
                i += 1;
            } else {
                break;
            }
        }
        (i > pos).then_some(i - pos)
    }

    fn match_comment(&self, source: &Source, pos: usize) -> Option<usize> {
        if source.matches_at(pos, "--", true) {
            let mut i = pos + 2;
            while let Some(c) = source.char_at(i) {
                if c == '\n' {
                    break;
                }
                i += 1;
            }
            // The newline itself is left for the whitespace predicate.
            return Some(i - pos);
        }
        if source.matches_at(pos, "/*", true) {
            let mut i = pos + 2;
            while i < source.len() {
                if source.matches_at(i, "*/", true) {
                    return Some(i + 2 - pos);
                }
                i += 1;
            }
            // SQLite accepts a block comment running to end of input.
            return Some(source.len() - pos);
        }
        None
    }

    fn match_operator(&self, source: &Source, pos: usize) -> Option<Match> {
        self.operators
            .longest_match(source, pos)
            .map(|op| Match::new(op.chars().count(), op))
    }

    fn match_identifier(&self, source: &Source, pos: usize) -> Option<Match> {
        let length = match source.char_at(pos)? {
            '"' => Self::match_delimited(source, pos, '"', '"', true),
            '`' => Self::match_delimited(source, pos, '`', '`', true),
            '[' => Self::match_delimited(source, pos, '[', ']', false),
            _ => None,
        }?;
        Some(Match::new(length, source.slice(pos, pos + length)))
    }

    fn match_string_literal(&self, source: &Source, pos: usize) -> Option<Match> {
        let length = Self::match_delimited(source, pos, '\'', '\'', true)?;
        Some(Match::new(length, source.slice(pos, pos + length)))
    }

    fn keyword(&self, word: &str) -> Option<String> {
        let upper = word.to_ascii_uppercase();
        self.keywords.contains(upper.as_str()).then_some(upper)
    }
}
