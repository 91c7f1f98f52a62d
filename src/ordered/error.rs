//! Error type for [`OrderedSet`](super::OrderedSet) operations.
//!
//! Every failure is a deterministic function of the set's state and the
//! arguments passed in. A failing operation leaves the set unchanged.

/// Errors returned by fallible [`OrderedSet`](super::OrderedSet) operations.
///
/// # Examples
///
/// ```rust
/// use ordered_index_set::ordered::{OrderedSet, OrderedSetError};
///
/// let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(
///     set.get_by_index(3),
///     Err(OrderedSetError::OutOfRange { index: 3, len: 3 })
/// );
/// assert_eq!(
///     format!("{}", OrderedSetError::OutOfRange { index: 3, len: 3 }),
///     "index 3 is out of range for ordered set of length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderedSetError {
    /// A positional index fell outside `[-len, len - 1]`.
    OutOfRange {
        /// The index that was requested.
        index: isize,
        /// The length of the set at the time of the request.
        len: usize,
    },
    /// A key lookup or removal targeted an element that is not present.
    KeyNotFound,
    /// `pop` was called on an empty set.
    Empty,
    /// An argument was rejected before any work was done.
    InvalidArgument(&'static str),
}

impl std::fmt::Display for OrderedSetError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => write!(
                formatter,
                "index {index} is out of range for ordered set of length {len}"
            ),
            Self::KeyNotFound => write!(formatter, "key not found in ordered set"),
            Self::Empty => write!(formatter, "ordered set is empty"),
            Self::InvalidArgument(reason) => write!(formatter, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for OrderedSetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::out_of_range(
        OrderedSetError::OutOfRange { index: -4, len: 3 },
        "index -4 is out of range for ordered set of length 3"
    )]
    #[case::key_not_found(OrderedSetError::KeyNotFound, "key not found in ordered set")]
    #[case::empty(OrderedSetError::Empty, "ordered set is empty")]
    #[case::invalid_argument(
        OrderedSetError::InvalidArgument("slice step cannot be zero"),
        "invalid argument: slice step cannot be zero"
    )]
    fn test_display(#[case] error: OrderedSetError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(OrderedSetError::Empty);
        assert_eq!(error.to_string(), "ordered set is empty");
    }
}
