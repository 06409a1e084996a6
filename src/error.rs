use thiserror::Error;

/// Errors produced while quoting names or writing statements.
///
/// The [`Insert`](crate::Insert) builder latches the first error it sees and
/// returns it from every later call; sink failures pass through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The name contains a NUL or newline character, which cannot be
    /// represented inside a backtick-quoted identifier.
    #[error("invalid identifier")]
    InvalidIdentifier,

    /// A record argument was required but none was given.
    #[error("function does not accept a nil record")]
    NilRecord,

    /// The output sink reported a write failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
