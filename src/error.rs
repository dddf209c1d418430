use thiserror::Error;

/// Error returned when an argument or the accumulator state violates a precondition.
///
/// Every failure in this crate is a deterministic function of the inputs, so a single
/// kind is enough. The payload is a short human-readable reason such as
/// `"values must not be empty"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The arguments (or the accumulator state) do not satisfy the operation's precondition
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Convenience alias used by every fallible operation of the crate
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = Error::InvalidInput("values must not be empty");
        assert_eq!(
            format!("{err}"),
            "invalid input: values must not be empty"
        );
    }

    #[test]
    fn errors_compare_by_reason() {
        assert_eq!(Error::InvalidInput("a"), Error::InvalidInput("a"));
        assert_ne!(Error::InvalidInput("a"), Error::InvalidInput("b"));
    }
}
