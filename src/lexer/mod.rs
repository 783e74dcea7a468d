//! Tree-building SQL tokenization module.
//!
//! This module groups the building blocks used to turn a raw SQL string
//! into a navigable token tree for static analysis (statement counting,
//! nesting checks, injection heuristics) without a full parser. The
//! components are intentionally pragmatic:
//!
//! Modules:
//! - `token_type` : Classification of tree nodes (containers vs leaves).
//! - `token`      : Tree node pairing type, content and code-point span.
//! - `source`     : Code-point indexed view of the input text.
//! - `lookahead`  : Longest-match lookup for multi-character operators.
//! - `tokenizer`  : Single pass O(n) engine producing the `Code` root.
//!
//! Design Principles:
//! 1. Accept malformed SQL (unclassifiable text degrades to `Word` leaves).
//! 2. Group lexically only: parentheses and statement boundaries, no
//!    grammar validation and no expression structure.
//! 3. Keep the engine dialect-agnostic; lexical rules live behind the
//!    `Dialect` trait in the `dialect` module.
//! 4. Measure every offset in Unicode code points so multi-byte
//!    identifiers and literals keep stable spans.
//!
//! Example:
//! ```rust
//! use sqlex::prelude::*;
//!
//! let root = tokenize("SELECT 1; SELECT (2)").unwrap();
//! assert_eq!(root.token_type(), TokenType::Code);
//! assert_eq!(root.children().len(), 2);
//! let second = root.child_at(-1).unwrap();
//! assert_eq!(second.token_type(), TokenType::Statement);
//! ```
//!
//! NOTE: This is **not** a SQL parser. The tree reflects lexical structure
//! only; consumers wanting clause-level meaning must walk it themselves.

pub mod lookahead;
pub mod source;
pub mod token;
pub mod token_type;
pub mod tokenizer;


pub use lookahead::CandidateSet;
pub use source::Source;
pub use token::Token;
pub use token_type::TokenType;
pub use tokenizer::{Tokenizer, tokenize};

/// Convenience prelude re-exporting the most commonly used items.
///
/// Import with:
/// `use sqlex::prelude::*;`
pub mod prelude {
    pub use super::{CandidateSet, Source, Token, TokenType, Tokenizer, tokenize};
}
