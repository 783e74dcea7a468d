//! Single-pass, tree-building SQL tokenizer.
//!
//! Scope / Intent:
//! - Consumes a raw SQL string left-to-right and builds the nested `Token`
//!   tree: `Code` root, one `Statement` per semicolon-separated statement,
//!   `Parenthesis` groups nesting arbitrarily, leaf tokens for everything
//!   the dialect classifies.
//! - Accepts malformed SQL: anything no predicate claims is buffered one
//!   character at a time and flushed as a bare `Word`, so the scan always
//!   terminates after at most one classification round per code point.
//! - Lexical rules are injected via the `Dialect` trait; the engine itself
//!   only hardwires the structural meaning of `(`, `)` and `;`.
//!
//! Guarantees:
//! - Offsets are code-point indices into the original input, end exclusive.
//! - Exactly one `Code` root per call; a dangling empty trailing container
//!   (the statement opened after a final `;`) is pruned before returning.
//! - `tokenize()` resets all scan state, so one engine instance can be
//!   reused across inputs via `set_source`.
//!
//! Errors:
//! - `MismatchedParenthesis` on a `)` with no open group.
//! - `InvalidAdvance` if a predicate reports a zero-length match.

use crate::dialect::{Dialect, Match, SqliteDialect};
use crate::lexer::source::Source;
use crate::lexer::token::Token;
use crate::lexer::token_type::TokenType;
use crate::{Error, Result, trace};

/// Tokenize `sql` with the built-in SQLite dialect.
pub fn tokenize(sql: &str) -> Result<Token> {
    Tokenizer::new(SqliteDialect::new(), sql).tokenize()
}

/// The tree-building scan engine.
///
/// Holds mutable scan state (position, word buffer, open-container stack),
/// so an instance is single-threaded by design; the returned tree is plain
/// data and can be shared freely.
pub struct Tokenizer<D> {
    dialect: D,
    source: Source,
    position: usize,
    buffer: String,
    /// Code-point count of `buffer`; tracked separately because the buffer
    /// stores UTF-8 bytes while offsets count code points.
    buffer_len: usize,
    /// Open containers, `Code` root at the bottom. Containers attach to
    /// their parent when they close.
    stack: Vec<Token>,
}

impl<D: Dialect> Tokenizer<D> {
    pub fn new(dialect: D, sql: impl Into<String>) -> Self {
        Self {
            dialect,
            source: Source::new(sql),
            position: 0,
            buffer: String::new(),
            buffer_len: 0,
            stack: Vec::new(),
        }
    }

    /// Replace the input text. The next `tokenize()` call starts fresh.
    pub fn set_source(&mut self, sql: impl Into<String>) {
        self.source = Source::new(sql);
    }

    /// Run the scan over the current source and return the `Code` root.
    pub fn tokenize(&mut self) -> Result<Token> {
        self.reset();
        self.stack
            .push(Token::new(TokenType::Code).with_span(0, self.source.len()));
        self.stack.push(Token::new(TokenType::Statement));

        while self.position < self.source.len() {
            self.step()?;
        }
        self.flush_buffer();
        self.collapse()
    }

    fn reset(&mut self) {
        self.position = 0;
        self.buffer.clear();
        self.buffer_len = 0;
        self.stack.clear();
    }

    /// One classification round at the current position.
    fn step(&mut self) -> Result {
        let pos = self.position;

        if let Some(length) = self.dialect.match_whitespace(&self.source, pos) {
            self.flush_buffer();
            return self.advance(length);
        }
        if let Some(length) = self.dialect.match_comment(&self.source, pos) {
            self.flush_buffer();
            return self.advance(length);
        }
        // Operators take precedence over delimited tokens.
        if let Some(m) = self.dialect.match_operator(&self.source, pos) {
            self.flush_buffer();
            self.advance(m.length)?;
            return self.emit_operator(pos, m);
        }
        if let Some(m) = self.dialect.match_string_literal(&self.source, pos) {
            self.flush_buffer();
            self.advance(m.length)?;
            self.emit_leaf(TokenType::StringLiteral, m.content, pos, self.position);
            return Ok(());
        }
        if let Some(m) = self.dialect.match_identifier(&self.source, pos) {
            self.flush_buffer();
            self.advance(m.length)?;
            self.emit_leaf(TokenType::Identifier, m.content, pos, self.position);
            return Ok(());
        }

        // Nothing claimed this position; buffer one character and move on.
        if let Some(c) = self.source.char_at(pos) {
            self.buffer.push(c);
            self.buffer_len += 1;
        }
        self.advance(1)
    }

    fn advance(&mut self, length: usize) -> Result {
        if length == 0 {
            return Err(Error::InvalidAdvance {
                offset: self.position,
                length,
            });
        }
        self.position += length;
        Ok(())
    }

    /// Emit the accumulated bare word, if any, classifying it through the
    /// dialect's keyword table.
    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let start = self.position - self.buffer_len;
        let end = self.position;
        let token = match self.dialect.keyword(&self.buffer) {
            Some(canonical) => {
                trace!(word = %self.buffer, %canonical, "flush keyword");
                Token::new(TokenType::Keyword).with_content(canonical)
            }
            None => {
                trace!(word = %self.buffer, "flush bare word");
                Token::new(TokenType::Word).with_content(self.buffer.as_str())
            }
        };
        self.current().append_child(token.with_span(start, end));
        self.buffer.clear();
        self.buffer_len = 0;
    }

    fn emit_leaf(&mut self, token_type: TokenType, content: String, start: usize, end: usize) {
        self.current().append_child(
            Token::new(token_type)
                .with_content(content)
                .with_span(start, end),
        );
    }

    /// Emit an operator leaf and apply its structural side effect. `(` and
    /// `)` open and close parenthesis groups; `;` closes the statement and
    /// opens the next one.
    fn emit_operator(&mut self, start: usize, m: Match) -> Result {
        let end = self.position;
        match m.content.as_str() {
            "(" => {
                self.emit_leaf(TokenType::Operator, m.content, start, end);
                trace!(offset = start, "open parenthesis group");
                self.stack.push(Token::new(TokenType::Parenthesis));
            }
            ")" => {
                if self.current().token_type() != TokenType::Parenthesis {
                    return Err(Error::MismatchedParenthesis { offset: start });
                }
                trace!(offset = start, "close parenthesis group");
                self.close_top();
                self.emit_leaf(TokenType::Operator, m.content, start, end);
            }
            ";" => {
                // Consecutive separators collapse instead of yielding
                // empty statements.
                let top = self.current();
                if top.token_type() == TokenType::Statement && !top.has_children() {
                    return Ok(());
                }
                self.emit_leaf(TokenType::Operator, m.content, start, end);
                trace!(offset = start, "statement boundary");
                while self.stack.len() > 1 {
                    self.close_top();
                }
                self.stack.push(Token::new(TokenType::Statement));
            }
            _ => self.emit_leaf(TokenType::Operator, m.content, start, end),
        }
        Ok(())
    }

    fn current(&mut self) -> &mut Token {
        self.stack
            .last_mut()
            .expect("container stack holds at least the Code root during a scan")
    }

    /// Detach the top container, seal its span and attach it to its parent.
    fn close_top(&mut self) {
        let mut done = self
            .stack
            .pop()
            .expect("close_top is only called while an open container remains");
        done.seal();
        self.current().append_child(done);
    }

    /// Close everything still open, prune a dangling empty trailing
    /// container and hand over the root.
    fn collapse(&mut self) -> Result<Token> {
        while self.stack.len() > 1 {
            self.close_top();
        }
        let mut root = self
            .stack
            .pop()
            .expect("the Code root remains after collapsing the stack");
        if root
            .child_at(-1)
            .is_some_and(|last| last.token_type().is_container() && !last.has_children())
        {
            root.remove_child_at(-1);
        }
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dialect that claims a zero-length whitespace match, the bug class
    /// `InvalidAdvance` exists to surface.
    struct StallingDialect;

    impl Dialect for StallingDialect {
        fn match_whitespace(&self, _source: &Source, _pos: usize) -> Option<usize> {
            Some(0)
        }
        fn match_comment(&self, _source: &Source, _pos: usize) -> Option<usize> {
            None
        }
        fn match_operator(&self, _source: &Source, _pos: usize) -> Option<Match> {
            None
        }
        fn match_identifier(&self, _source: &Source, _pos: usize) -> Option<Match> {
            None
        }
        fn match_string_literal(&self, _source: &Source, _pos: usize) -> Option<Match> {
            None
        }
        fn keyword(&self, _word: &str) -> Option<String> {
            None
        }
    }

    /// Dialect with no rules at all: every character degrades to the
    /// single-character buffering fallback.
    struct InertDialect;

    impl Dialect for InertDialect {
        fn match_whitespace(&self, _source: &Source, _pos: usize) -> Option<usize> {
            None
        }
        fn match_comment(&self, _source: &Source, _pos: usize) -> Option<usize> {
            None
        }
        fn match_operator(&self, _source: &Source, _pos: usize) -> Option<Match> {
            None
        }
        fn match_identifier(&self, _source: &Source, _pos: usize) -> Option<Match> {
            None
        }
        fn match_string_literal(&self, _source: &Source, _pos: usize) -> Option<Match> {
            None
        }
        fn keyword(&self, _word: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn zero_length_match_is_an_error() {
        let mut engine = Tokenizer::new(StallingDialect, " x");
        assert_eq!(
            engine.tokenize(),
            Err(Error::InvalidAdvance {
                offset: 0,
                length: 0
            })
        );
    }

    #[test]
    fn fallback_buffers_whole_input_as_one_word() {
        let mut engine = Tokenizer::new(InertDialect, "anything; at (all)");
        let root = engine.tokenize().unwrap();
        let stmt = root.child_at(0).unwrap();
        assert_eq!(stmt.children().len(), 1);
        let word = stmt.child_at(0).unwrap();
        assert_eq!(word.token_type(), TokenType::Word);
        assert_eq!(word.content(), "anything; at (all)");
        assert_eq!(word.span(), (0, 18));
    }
}
