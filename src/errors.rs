//! Error types returned while constructing an automaton.
//!
//! Matching never fails; every error in this crate surfaces at build time.

/// Result type with [`BuildError`] as the default error.
pub type Result<T, E = BuildError> = std::result::Result<T, E>;

/// Errors that can occur when building an automaton.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The keyword list was rejected before any state was allocated.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// Reading a keyword file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// Returns the input error if this is [`BuildError::InvalidInput`].
    pub fn invalid_input(&self) -> Option<&InvalidInputError> {
        match self {
            BuildError::InvalidInput(e) => Some(e),
            BuildError::Io(_) => None,
        }
    }
}

/// The ways a keyword list can be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInputError {
    /// No keywords were supplied.
    #[error("invalid input: keyword list is empty")]
    EmptyKeywordList,

    /// A keyword had zero length.
    ///
    /// `index` is the position of the keyword in the caller's input sequence.
    #[error("invalid input: keyword at index {index} is empty")]
    EmptyKeyword {
        /// Position of the offending keyword in the input.
        index: usize,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invalid_input_messages() {
        assert_eq!(
            InvalidInputError::EmptyKeywordList.to_string(),
            "invalid input: keyword list is empty"
        );
        assert_eq!(
            InvalidInputError::EmptyKeyword { index: 3 }.to_string(),
            "invalid input: keyword at index 3 is empty"
        );
    }

    #[test]
    fn build_error_is_transparent() {
        let err = BuildError::from(InvalidInputError::EmptyKeyword { index: 0 });
        assert_eq!(err.to_string(), "invalid input: keyword at index 0 is empty");
        assert_eq!(
            err.invalid_input(),
            Some(&InvalidInputError::EmptyKeyword { index: 0 })
        );

        let io = BuildError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io.invalid_input().is_none());
    }
}
