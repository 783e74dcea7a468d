#![cfg(test)]
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Trace the full tree of a tokenization result when `SQLEX_DUMP_TREES` is
/// set. No-op otherwise; handy when a shape assertion fails.
pub(crate) fn dump_tree(token: &crate::Token) {
    if !crate::config().dump_trees {
        return;
    }
    fn walk(token: &crate::Token, depth: usize) {
        crate::trace!(
            "{:indent$}{} [{}, {}) {:?}",
            "",
            token.token_type(),
            token.start(),
            token.end(),
            token.content(),
            indent = depth * 2
        );
        for child in token.children() {
            walk(child, depth + 1);
        }
    }
    walk(token, 0);
}
