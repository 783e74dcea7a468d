//! Token tree node tying a `TokenType` to its content and source span.
//!
//! A `Token` is either a leaf (operator, keyword, identifier, string
//! literal, bare word) or a container (`Code`, `Statement`, `Parenthesis`)
//! owning an ordered child sequence. Offsets always refer to the *original*
//! input and are measured in Unicode code points, end exclusive, so
//! downstream analyzers can slice or range-check the source without
//! re-deriving positions.
//!
//! Ownership is strictly one-way: children are owned by their parent and
//! there is no stored back-reference. Navigation is top-down via
//! [`Token::child_at`], which supports negative indices (`-1` = last child).
//!
//! See sibling modules:
//! - `token_type.rs` for the `TokenType` classification.
//! - `tokenizer.rs`  for producing the tree from raw SQL input.

use crate::lexer::token_type::TokenType;

/// One node of the token tree.
///
/// Construction is builder-style: `Token::new(..)` followed by chained
/// `with_*` setters. Tokens are not mutated once the tokenizer has moved
/// past their closing boundary, so a returned tree can be shared freely.
///
/// Invariants maintained by the tokenizer:
/// - `start <= end`, both valid code-point offsets into the input
/// - children appear in source order
/// - leaf types never own children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    token_type: TokenType,
    content: String,
    start: usize,
    end: usize,
    children: Vec<Token>,
}

impl Token {
    /// Construct an empty token of the given type.
    pub fn new(token_type: TokenType) -> Self {
        Self {
            token_type,
            content: String::new(),
            start: 0,
            end: 0,
            children: Vec::new(),
        }
    }

    /// Replace the classification, chained.
    pub fn with_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Set the canonical content, chained.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the `[start, end)` code-point span, chained.
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Canonical text of this token. May differ from the raw source slice,
    /// e.g. keywords carry the dialect's canonical casing.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Inclusive start offset in code points.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset in code points.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Convenience: the `(start, end)` pair.
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Code-point length of the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the span is zero-length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Child sequence in source order; empty for leaf tokens.
    pub fn children(&self) -> &[Token] {
        &self.children
    }

    /// True if at least one child is attached.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Append `child` to the end of the child sequence.
    ///
    /// Leaf tokens cannot own children; the call is a no-op on them (the
    /// tokenizer never attaches to a leaf, this only guards misuse).
    pub fn append_child(&mut self, child: Token) {
        debug_assert!(
            self.token_type.is_container(),
            "cannot attach a child to leaf token type {}",
            self.token_type
        );
        if self.token_type.is_container() {
            self.children.push(child);
        }
    }

    /// Child at `index`, counting from the back for negative values
    /// (`-1` = last). `None` when out of range or on a leaf token.
    pub fn child_at(&self, index: isize) -> Option<&Token> {
        self.children.get(self.resolve_index(index)?)
    }

    /// Remove and return the child at `index` (negative indices as in
    /// [`Token::child_at`]). Used to prune the dangling empty trailing
    /// statement at end of input.
    pub fn remove_child_at(&mut self, index: isize) -> Option<Token> {
        let i = self.resolve_index(index)?;
        Some(self.children.remove(i))
    }

    fn resolve_index(&self, index: isize) -> Option<usize> {
        let i = if index < 0 {
            self.children.len().checked_sub(index.unsigned_abs())?
        } else {
            index as usize
        };
        (i < self.children.len()).then_some(i)
    }

    /// Shrink this container's span to the extent of its children.
    /// Containers without children keep a zero span.
    pub(crate) fn seal(&mut self) {
        if let (Some(first), Some(last)) = (self.children.first(), self.children.last()) {
            self.start = first.start;
            self.end = last.end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement_with(children: &[&str]) -> Token {
        let mut stmt = Token::new(TokenType::Statement);
        for (i, word) in children.iter().enumerate() {
            stmt.append_child(
                Token::new(TokenType::Word)
                    .with_content(*word)
                    .with_span(i, i + 1),
            );
        }
        stmt
    }

    #[test]
    fn builder_chain() {
        let t = Token::new(TokenType::Operator).with_content("<=").with_span(4, 6);
        assert_eq!(t.token_type(), TokenType::Operator);
        assert_eq!(t.content(), "<=");
        assert_eq!(t.span(), (4, 6));
        assert_eq!(t.len(), 2);
        assert!(!t.is_empty());
    }

    #[test]
    fn child_indexing_supports_negative() {
        let stmt = statement_with(&["a", "b", "c"]);
        assert_eq!(stmt.child_at(0).unwrap().content(), "a");
        assert_eq!(stmt.child_at(2).unwrap().content(), "c");
        assert_eq!(stmt.child_at(-1).unwrap().content(), "c");
        assert_eq!(stmt.child_at(-3).unwrap().content(), "a");
        assert!(stmt.child_at(3).is_none());
        assert!(stmt.child_at(-4).is_none());
    }

    #[test]
    fn leaves_reject_children() {
        let mut leaf = Token::new(TokenType::Keyword).with_content("SELECT");
        assert!(leaf.child_at(0).is_none());
        assert!(!leaf.has_children());
        // release-mode behavior: silently refused
        if !cfg!(debug_assertions) {
            leaf.append_child(Token::new(TokenType::Word));
            assert!(!leaf.has_children());
        }
    }

    #[test]
    fn remove_child_at_back() {
        let mut stmt = statement_with(&["a", "b"]);
        let removed = stmt.remove_child_at(-1).unwrap();
        assert_eq!(removed.content(), "b");
        assert_eq!(stmt.children().len(), 1);
        assert!(stmt.remove_child_at(5).is_none());
    }

    #[test]
    fn seal_takes_child_extent() {
        let mut stmt = statement_with(&["a", "b", "c"]);
        stmt.seal();
        assert_eq!(stmt.span(), (0, 3));

        let mut empty = Token::new(TokenType::Statement);
        empty.seal();
        assert_eq!(empty.span(), (0, 0));
    }
}
