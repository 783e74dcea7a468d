//! Dialect-pluggable SQL tokenizer producing a nested token tree.
//!
//! The crate turns a raw SQL string into a tree of typed tokens: a `Code`
//! root, one `Statement` child per semicolon-separated statement, nested
//! `Parenthesis` groups, and leaf tokens for operators, keywords, quoted
//! identifiers, string literals and bare words. Lexical rules live behind
//! the [`Dialect`] trait; a SQLite implementation ships as [`SqliteDialect`].

reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(lexer);
reexport!(dialect);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
