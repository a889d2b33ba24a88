//! Structural transforms over [`ImmutableList`].
//!
//! Every transform here is a pure function of its receiver: the input
//! chain is only read, and the result is always a freshly allocated chain.

use std::convert::Infallible;
use std::num::NonZeroUsize;

use super::ImmutableList;
use crate::error::ListError;

const TWICE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(1);

/// A maximal run of adjacent equal elements, borrowed from a list.
pub(crate) struct Run<'a, T> {
    first: &'a T,
    rest: Vec<&'a T>,
}

impl<'a, T> Run<'a, T> {
    const fn new(first: &'a T) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// The first element of the run, which stands for the whole run.
    pub(crate) const fn first(&self) -> &'a T {
        self.first
    }

    pub(crate) fn count(&self) -> NonZeroUsize {
        NonZeroUsize::MIN.saturating_add(self.rest.len())
    }

    /// Copies the run into its own list.
    pub(crate) fn to_list(&self) -> ImmutableList<T>
    where
        T: Clone,
    {
        match self.rest.split_last() {
            Some((last, init)) => ImmutableList::from_init_and_last(
                std::iter::once(self.first)
                    .chain(init.iter().copied())
                    .cloned()
                    .collect(),
                (*last).clone(),
            ),
            None => ImmutableList::singleton(self.first.clone()),
        }
    }
}

impl<T> ImmutableList<T> {
    /// Maps every element to a list and concatenates the results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values([1, 2]).unwrap();
    /// let expanded = list.flat_map(|element| ImmutableList::singleton(*element).cons(0));
    /// assert_eq!(expanded.describe(), "[0, 1, 0, 2]");
    /// ```
    #[must_use]
    pub fn flat_map<U, F>(&self, mut function: F) -> ImmutableList<U>
    where
        U: Clone,
        F: FnMut(&T) -> ImmutableList<U>,
    {
        match self.try_flat_map(|element| Ok::<_, Infallible>(function(element))) {
            Ok(list) => list,
            Err(never) => match never {},
        }
    }

    /// Like [`flat_map`](Self::flat_map), stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn try_flat_map<U, E, F>(&self, mut function: F) -> Result<ImmutableList<U>, E>
    where
        U: Clone,
        F: FnMut(&T) -> Result<ImmutableList<U>, E>,
    {
        let mut init = Vec::new();
        for element in self.iter_init() {
            init.extend(function(element)?);
        }
        let last = function(self.last())?;
        init.extend(last.iter_init().cloned());
        Ok(ImmutableList::from_init_and_last(init, last.last().clone()))
    }
}

impl<T: Clone> ImmutableList<T> {
    /// Creates a list holding `count` copies of `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let count = NonZeroUsize::new(3).unwrap();
    /// assert_eq!(ImmutableList::replicate(count, 'x').describe(), "[x, x, x]");
    /// ```
    #[must_use]
    pub fn replicate(count: NonZeroUsize, element: T) -> Self {
        let init = std::iter::repeat_n(element.clone(), count.get() - 1).collect();
        Self::from_init_and_last(init, element)
    }

    /// Returns a new list with the elements in opposite order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values([1, 1, 2, 3, 5, 8]).unwrap();
    /// assert_eq!(list.reverse().describe(), "[8, 5, 3, 2, 1, 1]");
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::singleton(self.head().clone());
        for element in self.iter().skip(1) {
            result = result.cons(element.clone());
        }
        result
    }

    /// Repeats every element twice, adjacently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values(["a", "b", "c"]).unwrap();
    /// assert_eq!(list.duplicate().describe(), "[a, a, b, b, c, c]");
    /// ```
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.replicate_each(TWICE)
    }

    /// Repeats every element `times` times, adjacently.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::DuplicateTimesZero`] when `times` is zero, since
    /// the result would be empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::error::ListError;
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values(["a", "b"]).unwrap();
    /// assert_eq!(list.duplicate_times(3).unwrap().describe(), "[a, a, a, b, b, b]");
    /// assert_eq!(list.duplicate_times(0), Err(ListError::DuplicateTimesZero));
    /// ```
    pub fn duplicate_times(&self, times: usize) -> Result<Self, ListError> {
        let Some(times) = NonZeroUsize::new(times) else {
            tracing::debug!(
                length = self.length().get(),
                "refusing to duplicate elements zero times"
            );
            return Err(ListError::DuplicateTimesZero);
        };
        Ok(self.replicate_each(times))
    }

    fn replicate_each(&self, times: NonZeroUsize) -> Self {
        let result = self.flat_map(|element| Self::replicate(times, element.clone()));
        tracing::trace!(
            times = times.get(),
            length = result.length().get(),
            "replicated elements"
        );
        result
    }
}

impl<T: PartialEq> ImmutableList<T> {
    /// Returns `true` if the list reads the same forwards and backwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// assert!(ImmutableList::from_values([1, 2, 3, 2, 1]).unwrap().is_palindrome());
    /// assert!(!ImmutableList::from_values([1, 2, 3]).unwrap().is_palindrome());
    /// ```
    #[must_use]
    pub fn is_palindrome(&self) -> bool {
        let elements: Vec<&T> = self.iter().collect();
        elements.iter().eq(elements.iter().rev())
    }

    /// Splits the list into maximal runs and maps each run to one value.
    pub(crate) fn map_runs<'a, U, F>(&'a self, mut function: F) -> ImmutableList<U>
    where
        F: FnMut(&Run<'a, T>) -> U,
    {
        let mut finished = Vec::new();
        let mut run = Run::new(self.head());
        for element in self.iter().skip(1) {
            if element == run.first {
                run.rest.push(element);
            } else {
                finished.push(function(&run));
                run = Run::new(element);
            }
        }
        let last = function(&run);
        tracing::trace!(
            length = self.length().get(),
            runs = finished.len() + 1,
            "split list into runs"
        );
        ImmutableList::from_init_and_last(finished, last)
    }
}

impl<T: Clone + PartialEq> ImmutableList<T> {
    /// Collapses every run of adjacent equal elements to one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values(["a", "a", "a", "b", "c", "c"]).unwrap();
    /// assert_eq!(list.compress().describe(), "[a, b, c]");
    /// ```
    #[must_use]
    pub fn compress(&self) -> Self {
        self.map_runs(|run| run.first().clone())
    }

    /// Packs every run of adjacent equal elements into its own sub-list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let list = ImmutableList::from_values(["a", "a", "b", "c", "c"]).unwrap();
    /// assert_eq!(list.pack().describe(), "[[a, a], [b], [c, c]]");
    /// ```
    #[must_use]
    pub fn pack(&self) -> ImmutableList<Self> {
        self.map_runs(|run| run.to_list())
    }
}
