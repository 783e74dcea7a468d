#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A dialect predicate reported a zero-length match, which would stall
    /// the scan loop. Indicates a bug in the dialect, not in the input.
    #[error("cannot advance the scan position by {length} at offset {offset}")]
    InvalidAdvance { offset: usize, length: usize },

    /// A `)` operator was encountered while no parenthesis group was open.
    #[error("closing parenthesis at offset {offset} has no matching opening parenthesis")]
    MismatchedParenthesis { offset: usize },
}

pub type Result<T = ()> = std::result::Result<T, Error>;
