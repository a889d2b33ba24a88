//! Error types for list construction and the fallible transforms.
//!
//! Every failure in this crate is local and reported synchronously to the
//! caller. Queries that simply may have no answer (such as
//! [`ImmutableList::at`](crate::list::ImmutableList::at)) return `Option`.
//! The operations below return [`ListError`] when the caller needs to know
//! which kind of failure happened.

use thiserror::Error;

/// Represents the ways a list operation can fail.
///
/// # Examples
///
/// ```rust
/// use ninety_nine_lists::error::ListError;
/// use ninety_nine_lists::list::ImmutableList;
///
/// let result = ImmutableList::try_from(Vec::<i32>::new());
/// assert_eq!(result, Err(ListError::ConstructionEmpty));
/// assert_eq!(
///     ListError::ConstructionEmpty.to_string(),
///     "cannot construct a list from an empty sequence"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ListError {
    /// A list was requested from zero elements.
    #[error("cannot construct a list from an empty sequence")]
    ConstructionEmpty,

    /// An index query went past the end of the list.
    #[error("index {index} is out of range for a list of length {length}")]
    IndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// The length of the list that was queried.
        length: usize,
    },

    /// A run-length encoded list contained a run with a non-positive count.
    #[error("malformed encoding: run at position {position} has count {count}")]
    MalformedEncoding {
        /// Zero-based position of the offending run in the encoded list.
        position: usize,
        /// The count found at that position.
        count: usize,
    },

    /// Elements were asked to be repeated zero times.
    #[error("cannot duplicate elements zero times: lists are never empty")]
    DuplicateTimesZero,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ListError::ConstructionEmpty, "cannot construct a list from an empty sequence")]
    #[case(
        ListError::IndexOutOfRange { index: 9, length: 6 },
        "index 9 is out of range for a list of length 6"
    )]
    #[case(
        ListError::MalformedEncoding { position: 2, count: 0 },
        "malformed encoding: run at position 2 has count 0"
    )]
    #[case(
        ListError::DuplicateTimesZero,
        "cannot duplicate elements zero times: lists are never empty"
    )]
    fn test_display(#[case] error: ListError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&ListError::DuplicateTimesZero);
    }
}
