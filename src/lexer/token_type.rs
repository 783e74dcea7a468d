//! Token classification for the tree-building SQL tokenizer.
//!
//! Three variants are *containers* that own children (`Code`, `Statement`,
//! `Parenthesis`); the rest are leaves. The tokenizer only ever attaches
//! children to containers, and navigation helpers on `Token` refuse child
//! access on leaf types.

use derive_more::Display;

/// Classification of a node in the token tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenType {
    /// Root of the tree: the whole tokenized input.
    Code,
    /// One semicolon-delimited statement.
    Statement,
    /// A parenthesized group nested inside a statement or another group.
    Parenthesis,
    /// Quoted or bracketed identifier, delimiters included.
    Identifier,
    /// Quoted string literal, delimiters included.
    StringLiteral,
    /// Operator or punctuation.
    Operator,
    /// Reserved word, content canonicalized by the dialect.
    Keyword,
    /// Bare run of text the dialect does not classify further.
    Word,
}

impl TokenType {
    /// True for the types that own child tokens.
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            TokenType::Code | TokenType::Statement | TokenType::Parenthesis
        )
    }

    /// True for the types that never own children.
    pub const fn is_leaf(self) -> bool {
        !self.is_container()
    }
}
