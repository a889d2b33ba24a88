//! Nested lists and flattening.
//!
//! An [`Element`] is either a [`Leaf`](Element::Leaf) value or a
//! [`Sublist`](Element::Sublist) of further elements, so a list of elements
//! can nest to any depth. Flattening collects the leaves depth-first, left
//! to right.
//!
//! # Examples
//!
//! ```rust
//! use ninety_nine_lists::list::Element;
//!
//! let nested = Element::sublist([
//!     Element::sublist([Element::leaf(1), Element::leaf(1)]).unwrap(),
//!     Element::leaf(2),
//!     Element::sublist([
//!         Element::leaf(3),
//!         Element::sublist([Element::leaf(5), Element::leaf(8)]).unwrap(),
//!     ])
//!     .unwrap(),
//! ])
//! .unwrap();
//!
//! assert_eq!(nested.to_string(), "[[1, 1], 2, [3, [5, 8]]]");
//! assert_eq!(nested.flatten().describe(), "[1, 1, 2, 3, 5, 8]");
//! ```

use std::fmt;

use super::{ImmutableList, ImmutableListIterator};

/// An element of a nested list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Element<T> {
    /// A plain value.
    Leaf(T),
    /// A nested list of elements.
    Sublist(ImmutableList<Element<T>>),
}

impl<T> Element<T> {
    /// Wraps a plain value.
    #[inline]
    #[must_use]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Builds a sublist from a sequence of elements.
    ///
    /// Returns `None` for an empty sequence, just like
    /// [`ImmutableList::from_values`].
    pub fn sublist<I>(elements: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        ImmutableList::from_values(elements).map(Self::Sublist)
    }

    /// Returns `true` for a [`Leaf`](Self::Leaf).
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Nesting depth: 0 for a leaf, one more than the deepest child for a
    /// sublist.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((element, level)) = stack.pop() {
            match element {
                Self::Leaf(_) => deepest = deepest.max(level),
                Self::Sublist(elements) => {
                    stack.extend(elements.iter().map(|child| (child, level + 1)));
                }
            }
        }
        deepest
    }

    /// The rightmost leaf value.
    fn last_leaf(&self) -> &T {
        let mut current = self;
        loop {
            match current {
                Self::Leaf(value) => return value,
                Self::Sublist(elements) => current = elements.last(),
            }
        }
    }

    /// Iterates over the leaf values, depth-first and left to right.
    #[must_use]
    pub fn leaves(&self) -> Leaves<'_, T> {
        match self {
            Self::Leaf(value) => Leaves {
                pending: Some(value),
                stack: Vec::new(),
            },
            Self::Sublist(elements) => elements.leaves(),
        }
    }
}

impl<T: Clone> Element<T> {
    /// Collects the leaf values into a flat list.
    ///
    /// A leaf flattens to a one-element list.
    #[must_use]
    pub fn flatten(&self) -> ImmutableList<T> {
        collect_leaves(self.leaves(), self.last_leaf())
    }
}

impl<T: fmt::Display> fmt::Display for Element<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(value) => write!(formatter, "{value}"),
            Self::Sublist(elements) => write!(formatter, "{elements}"),
        }
    }
}

impl<T> From<ImmutableList<Element<T>>> for Element<T> {
    fn from(elements: ImmutableList<Element<T>>) -> Self {
        Self::Sublist(elements)
    }
}

impl<T> ImmutableList<Element<T>> {
    /// Iterates over the leaf values of every element, depth-first and
    /// left to right.
    #[must_use]
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves {
            pending: None,
            stack: vec![self.iter()],
        }
    }
}

impl<T: Clone> ImmutableList<Element<T>> {
    /// Flattens a nested list into a list of its leaf values.
    ///
    /// A list without sublists flattens to a list of the same values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::{Element, ImmutableList};
    ///
    /// let list = ImmutableList::from_values([
    ///     Element::leaf('a'),
    ///     Element::sublist([Element::leaf('b'), Element::leaf('c')]).unwrap(),
    /// ])
    /// .unwrap();
    /// assert_eq!(list.flatten().describe(), "[a, b, c]");
    /// ```
    #[must_use]
    pub fn flatten(&self) -> ImmutableList<T> {
        collect_leaves(self.leaves(), self.last().last_leaf())
    }
}

/// Builds a list from `leaves`, whose final item is `last`.
fn collect_leaves<T: Clone>(leaves: Leaves<'_, T>, last: &T) -> ImmutableList<T> {
    let mut init: Vec<T> = leaves.cloned().collect();
    init.pop();
    ImmutableList::from_init_and_last(init, last.clone())
}

/// Depth-first iterator over the leaves of a nested list.
///
/// Uses an explicit stack, so deep nesting does not recurse.
pub struct Leaves<'a, T> {
    pending: Option<&'a T>,
    stack: Vec<ImmutableListIterator<'a, Element<T>>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.pending.take() {
            return Some(value);
        }
        loop {
            match self.stack.last_mut()?.next() {
                None => {
                    self.stack.pop();
                }
                Some(Element::Leaf(value)) => return Some(value),
                Some(Element::Sublist(elements)) => self.stack.push(elements.iter()),
            }
        }
    }
}
