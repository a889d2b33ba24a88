//! The immutable linked list and its exercises.
//!
//! - [`ImmutableList`]: never-empty singly-linked list
//! - [`Element`]: a leaf or a nested sublist, for [`flatten`](ImmutableList::flatten)
//! - [`Encoded`]: an entry of the modified run-length encoding
//!
//! # Examples
//!
//! ```rust
//! use ninety_nine_lists::list;
//!
//! let list = list![1, 1, 2, 3, 5, 8].unwrap();
//! assert_eq!(list.last(), &8);
//! assert_eq!(list.reverse().describe(), "[8, 5, 3, 2, 1, 1]");
//! assert!(!list.is_palindrome());
//!
//! let letters = list!['a', 'a', 'b'].unwrap();
//! assert_eq!(letters.encode().to_vec(), vec![(2, 'a'), (1, 'b')]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer linking the nodes.
///
/// When the `arc` feature is enabled this is `std::sync::Arc`, so lists
/// can be shared read-only between threads. Otherwise it is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod encoding;
mod immutable_list;
mod nested;
mod transform;

pub use encoding::Encoded;
pub use immutable_list::ImmutableList;
pub use immutable_list::ImmutableListIntoIterator;
pub use immutable_list::ImmutableListIterator;
pub use nested::Element;
pub use nested::Leaves;

/// Builds an [`ImmutableList`] from a comma-separated list of values.
///
/// Expands to [`ImmutableList::from_values`], so the result is an
/// `Option` that is `None` for `list![]`.
///
/// # Examples
///
/// ```rust
/// use ninety_nine_lists::list;
/// use ninety_nine_lists::list::ImmutableList;
///
/// assert_eq!(list![1, 2, 3].map(|list| list.describe()), Some("[1, 2, 3]".to_string()));
///
/// let empty: Option<ImmutableList<i32>> = list![];
/// assert!(empty.is_none());
/// ```
#[macro_export]
macro_rules! list {
    ($($element:expr),* $(,)?) => {
        $crate::list::ImmutableList::from_values([$($element),*])
    };
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
