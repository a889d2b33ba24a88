//! Immutable, never-empty singly-linked list.
//!
//! This module provides [`ImmutableList`], a cons-list whose head link is
//! not optional: a list, once constructed, always holds at least one
//! element. Construction from an empty sequence yields `None` instead of an
//! empty list.
//!
//! # Overview
//!
//! - O(1) prepend (`cons`), head and tail access
//! - O(1) length (cached as a [`NonZeroUsize`])
//! - O(n) indexed access, `last` and `penultimate`
//!
//! Nodes are never mutated after construction. `cons` and `tail` share the
//! existing nodes by reference counting, while every transform allocates a
//! fresh chain for its result.
//!
//! # Examples
//!
//! ```rust
//! use ninety_nine_lists::list::ImmutableList;
//!
//! let list = ImmutableList::from_values([1, 1, 2, 3, 5, 8]).unwrap();
//! assert_eq!(list.last(), &8);
//! assert_eq!(list.penultimate(), Some(&5));
//! assert_eq!(list.at(9), None);
//! assert_eq!(list.length().get(), 6);
//! assert_eq!(list.describe(), "[1, 1, 2, 3, 5, 8]");
//!
//! let empty: Option<ImmutableList<i32>> = ImmutableList::from_values([]);
//! assert!(empty.is_none());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use super::ReferenceCounter;
use crate::error::ListError;

/// Internal node structure for the list.
///
/// Each node owns its element and an optional reference to the next node.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the next node, `None` at the tail.
    next: Option<ReferenceCounter<Self>>,
}

// Unlinks the chain iteratively so that dropping a long list does not
// recurse once per node.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// An immutable singly-linked list holding at least one element.
///
/// # Time Complexity
///
/// | Operation     | Complexity |
/// |---------------|------------|
/// | `singleton`   | O(1)       |
/// | `cons`        | O(1)       |
/// | `head`        | O(1)       |
/// | `tail`        | O(1)       |
/// | `length`      | O(1)       |
/// | `at`          | O(n)       |
/// | `last`        | O(n)       |
/// | `penultimate` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use ninety_nine_lists::list::ImmutableList;
///
/// let list = ImmutableList::singleton(42);
/// assert_eq!(list.head(), &42);
/// assert_eq!(list.last(), &42);
/// ```
pub struct ImmutableList<T> {
    /// Reference to the head node.
    head: ReferenceCounter<Node<T>>,
    /// Cached length for O(1) access.
    length: NonZeroUsize,
}

impl<T> ImmutableList<T> {
    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::singleton("a");
    /// assert_eq!(list.length().get(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            head: ReferenceCounter::new(Node {
                element,
                next: None,
            }),
            length: NonZeroUsize::MIN,
        }
    }

    /// Builds a list from an ordered sequence of values.
    ///
    /// Returns `None` if the sequence is empty, since an `ImmutableList`
    /// cannot be empty. Otherwise the list holds the values in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values(vec!["a", "b"]).unwrap();
    /// assert_eq!(list.describe(), "[a, b]");
    ///
    /// assert!(ImmutableList::<u8>::from_values(Vec::new()).is_none());
    /// ```
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = values.into_iter().collect();
        let Some(last) = elements.pop() else {
            tracing::debug!("no list constructed from an empty sequence");
            return None;
        };
        Some(Self::from_init_and_last(elements, last))
    }

    /// Builds a list from every element but the last, followed by `last`.
    ///
    /// The chain is assembled back to front using `Vec::pop()`, so the
    /// result is never empty.
    pub(crate) fn from_init_and_last(mut init: Vec<T>, last: T) -> Self {
        let length = NonZeroUsize::MIN.saturating_add(init.len());
        let mut head = ReferenceCounter::new(Node {
            element: last,
            next: None,
        });
        while let Some(element) = init.pop() {
            head = ReferenceCounter::new(Node {
                element,
                next: Some(head),
            });
        }
        Self { head, length }
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new list shares every node of the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::singleton(3).cons(2).cons(1);
    /// assert_eq!(list.describe(), "[1, 2, 3]");
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: T) -> Self {
        Self {
            head: ReferenceCounter::new(Node {
                element,
                next: Some(ReferenceCounter::clone(&self.head)),
            }),
            length: self.length.saturating_add(1),
        }
    }

    /// Returns a reference to the first element.
    #[inline]
    #[must_use]
    pub fn head(&self) -> &T {
        &self.head.element
    }

    /// Returns the list without its first element.
    ///
    /// Returns `None` for a one-element list. The tail shares its nodes
    /// with the original list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values([1, 2, 3]).unwrap();
    /// assert_eq!(list.tail().map(|tail| tail.describe()), Some("[2, 3]".to_string()));
    /// assert!(ImmutableList::singleton(1).tail().is_none());
    /// ```
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        self.head
            .next
            .as_ref()
            .zip(NonZeroUsize::new(self.length.get() - 1))
            .map(|(next, length)| Self {
                head: ReferenceCounter::clone(next),
                length,
            })
    }

    /// Returns a reference to the value of the terminal node.
    ///
    /// # Complexity
    ///
    /// O(n), without recursion
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values([1, 1, 2, 3, 5, 8]).unwrap();
    /// assert_eq!(list.last(), &8);
    /// ```
    #[must_use]
    pub fn last(&self) -> &T {
        let mut current = &self.head;
        while let Some(next) = &current.next {
            current = next;
        }
        &current.element
    }

    /// Returns the element just before the last one.
    ///
    /// Returns `None` if the list has fewer than two elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values([1, 1, 2, 3, 5, 8]).unwrap();
    /// assert_eq!(list.penultimate(), Some(&5));
    /// assert_eq!(ImmutableList::singleton(1).penultimate(), None);
    /// ```
    #[must_use]
    pub fn penultimate(&self) -> Option<&T> {
        self.at(self.length.get().checked_sub(2)?)
    }

    /// Returns a reference to the element at the given zero-based index.
    ///
    /// Returns `None` if `index >= length`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values([1, 1, 2, 3, 5, 8]).unwrap();
    /// assert_eq!(list.at(0), Some(&1));
    /// assert_eq!(list.at(4), Some(&5));
    /// assert_eq!(list.at(9), None);
    /// ```
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Like [`at`](Self::at), but reports the failure as
    /// [`ListError::IndexOutOfRange`].
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= length`.
    pub fn try_at(&self, index: usize) -> Result<&T, ListError> {
        self.at(index).ok_or_else(|| {
            let length = self.length.get();
            tracing::debug!(index, length, "index out of range");
            ListError::IndexOutOfRange { index, length }
        })
    }

    /// Returns the number of elements in the list, which is at least 1.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> NonZeroUsize {
        self.length
    }

    /// Renders the list as `"[v0, v1, ..., vn]"`.
    ///
    /// This is the same text produced by the `Display` implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// assert_eq!(ImmutableList::singleton(1).describe(), "[1]");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ImmutableListIterator<'_, T> {
        ImmutableListIterator {
            current: Some(&self.head),
            remaining: self.length.get(),
        }
    }

    /// Iterates over every element except the last one.
    pub(crate) fn iter_init(&self) -> std::iter::Take<ImmutableListIterator<'_, T>> {
        self.iter().take(self.length.get() - 1)
    }

    /// Applies a function to each element, producing a new list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values([1, 2, 3]).unwrap();
    /// assert_eq!(list.map(|element| element * 10).describe(), "[10, 20, 30]");
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut function: F) -> ImmutableList<U>
    where
        F: FnMut(&T) -> U,
    {
        let init: Vec<U> = self.iter_init().map(&mut function).collect();
        let last = function(self.last());
        ImmutableList::from_init_and_last(init, last)
    }
}

impl<T: Clone> ImmutableList<T> {
    /// Appends another list to this one.
    ///
    /// The result is a fresh chain: no node of either input is reused.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let left = ImmutableList::from_values([1, 2]).unwrap();
    /// let right = ImmutableList::from_values([3, 4]).unwrap();
    /// assert_eq!(left.append(&right).describe(), "[1, 2, 3, 4]");
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let init = self.iter().chain(other.iter_init()).cloned().collect();
        Self::from_init_and_last(init, other.last().clone())
    }

    /// Copies the elements into a `Vec`, front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of an [`ImmutableList`].
pub struct ImmutableListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for ImmutableListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ImmutableListIterator<'_, T> {}

impl<T> Clone for ImmutableListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over elements of an [`ImmutableList`].
///
/// Elements are cloned out of the shared nodes.
pub struct ImmutableListIntoIterator<T> {
    list: Option<ImmutableList<T>>,
}

impl<T: Clone> Iterator for ImmutableListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list.take()?;
        let element = list.head().clone();
        self.list = list.tail();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.as_ref().map_or(0, |list| list.length.get());
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for ImmutableListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ImmutableList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: ReferenceCounter::clone(&self.head),
            length: self.length,
        }
    }
}

impl<T> TryFrom<Vec<T>> for ImmutableList<T> {
    type Error = ListError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_values(elements).ok_or(ListError::ConstructionEmpty)
    }
}

impl<T: Clone> TryFrom<&[T]> for ImmutableList<T> {
    type Error = ListError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Self::from_values(slice.iter().cloned()).ok_or(ListError::ConstructionEmpty)
    }
}

impl<T: Clone> IntoIterator for ImmutableList<T> {
    type Item = T;
    type IntoIter = ImmutableListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ImmutableListIntoIterator { list: Some(self) }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableList<T> {
    type Item = &'a T;
    type IntoIter = ImmutableListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for ImmutableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ImmutableList<T> {}

impl<T: Hash> Hash for ImmutableList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ImmutableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}", self.head())?;
        for element in self.iter().skip(1) {
            write!(formatter, ", {element}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(ImmutableList<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(ImmutableList<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmutableList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.length.get()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ImmutableListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ImmutableListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = ImmutableList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a non-empty sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        ImmutableList::from_values(elements)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &self))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmutableList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ImmutableListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn test_from_values_empty_is_none() {
        let list: Option<ImmutableList<i32>> = ImmutableList::from_values([]);
        assert!(list.is_none());
    }

    #[rstest]
    fn test_from_values_preserves_order() {
        let list = ImmutableList::from_values([1, 2, 3]).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(list.length().get(), 3);
    }

    #[rstest]
    fn test_singleton() {
        let list = ImmutableList::singleton(42);
        assert_eq!(list.head(), &42);
        assert_eq!(list.last(), &42);
        assert_eq!(list.length().get(), 1);
    }

    #[rstest]
    fn test_cons_does_not_modify_original() {
        let list = ImmutableList::singleton(2);
        let extended = list.cons(1);
        assert_eq!(list.to_vec(), vec![2]);
        assert_eq!(extended.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_tail_shares_nodes() {
        let list = ImmutableList::from_values([1, 2, 3]).unwrap();
        let tail = list.tail().unwrap();
        assert_eq!(tail.length().get(), 2);
        assert!(ReferenceCounter::ptr_eq(
            &tail.head,
            list.head.next.as_ref().unwrap()
        ));
    }

    #[rstest]
    fn test_try_from_empty_vec() {
        let result = ImmutableList::try_from(Vec::<i32>::new());
        assert_eq!(result, Err(ListError::ConstructionEmpty));
    }

    #[rstest]
    fn test_try_from_slice() {
        let list = ImmutableList::try_from(&[1, 2][..]).unwrap();
        assert_eq!(list.describe(), "[1, 2]");
    }

    // =========================================================================
    // Introspection Tests
    // =========================================================================

    #[rstest]
    fn test_at_and_try_at() {
        let list = ImmutableList::from_values([1, 1, 2, 3, 5, 8]).unwrap();
        assert_eq!(list.at(5), Some(&8));
        assert_eq!(list.at(6), None);
        assert_eq!(list.try_at(0), Ok(&1));
        assert_eq!(
            list.try_at(9),
            Err(ListError::IndexOutOfRange {
                index: 9,
                length: 6
            })
        );
    }

    #[rstest]
    fn test_penultimate_two_elements() {
        let list = ImmutableList::from_values([1, 2]).unwrap();
        assert_eq!(list.penultimate(), Some(&1));
    }

    #[rstest]
    fn test_iter_is_exact_size() {
        let list = ImmutableList::from_values([1, 2, 3]).unwrap();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[rstest]
    fn test_into_iter() {
        let list = ImmutableList::from_values([1, 2, 3]).unwrap();
        let collected: Vec<i32> = list.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_map_and_append() {
        let list = ImmutableList::from_values([1, 2]).unwrap();
        let doubled = list.map(|element| element * 2);
        assert_eq!(list.append(&doubled).to_vec(), vec![1, 2, 2, 4]);
    }

    // =========================================================================
    // Display / Debug Tests
    // =========================================================================

    #[rstest]
    fn test_display_single_element_list() {
        assert_eq!(format!("{}", ImmutableList::singleton(42)), "[42]");
    }

    #[rstest]
    fn test_display_multiple_elements_list() {
        let list = ImmutableList::from_values(["a", "b", "c"]).unwrap();
        assert_eq!(format!("{list}"), "[a, b, c]");
    }

    #[rstest]
    fn test_debug() {
        let list = ImmutableList::from_values(["a", "b"]).unwrap();
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }

    #[rstest]
    fn test_eq() {
        let list1 = ImmutableList::from_values([1, 2, 3]).unwrap();
        let list2 = ImmutableList::from_values([1, 2, 3]).unwrap();
        let list3 = ImmutableList::from_values([1, 2]).unwrap();
        assert_eq!(list1, list2);
        assert_ne!(list1, list3);
    }

    #[rstest]
    fn test_drop_long_list_does_not_overflow() {
        let list = ImmutableList::from_values(0..200_000).unwrap();
        assert_eq!(list.last(), &199_999);
        drop(list);
    }
}
