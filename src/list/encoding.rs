//! Run-length encoding and decoding.
//!
//! A run is a maximal stretch of adjacent equal elements. [`encode`]
//! turns each run into a `(count, value)` pair, and [`encode_modified`]
//! additionally collapses runs of length one to [`Encoded::Singleton`].
//! Both encodings can be expanded back with [`decode`] and
//! [`decode_modified`], which reject runs with a zero count.
//!
//! [`encode`]: ImmutableList::encode
//! [`encode_modified`]: ImmutableList::encode_modified
//! [`decode`]: ImmutableList::decode
//! [`decode_modified`]: ImmutableList::decode_modified
//!
//! # Examples
//!
//! ```rust
//! use ninety_nine_lists::list::{Encoded, ImmutableList};
//!
//! let list = ImmutableList::from_values("aaaabccaadeeee".chars()).unwrap();
//!
//! let encoded = list.encode();
//! assert_eq!(encoded.head(), &(4, 'a'));
//! assert_eq!(encoded.decode().unwrap(), list);
//!
//! let modified = list.encode_modified();
//! assert_eq!(modified.describe(), "[(4, a), b, (2, c), (2, a), d, (4, e)]");
//! assert_eq!(modified.at(1), Some(&Encoded::Singleton('b')));
//! ```

use std::fmt;
use std::num::NonZeroUsize;

use super::ImmutableList;
use crate::error::ListError;

/// One entry of the modified run-length encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoded<T> {
    /// A run of length one, stored as the bare value.
    Singleton(T),
    /// A run of `count` copies of the value.
    Run(usize, T),
}

impl<T> Encoded<T> {
    /// Number of elements this entry expands to.
    #[must_use]
    pub const fn count(&self) -> usize {
        match self {
            Self::Singleton(_) => 1,
            Self::Run(count, _) => *count,
        }
    }

    /// The value being repeated.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Singleton(value) | Self::Run(_, value) => value,
        }
    }
}

impl<T> From<(usize, T)> for Encoded<T> {
    fn from((count, value): (usize, T)) -> Self {
        if count == 1 {
            Self::Singleton(value)
        } else {
            Self::Run(count, value)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Encoded<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singleton(value) => write!(formatter, "{value}"),
            Self::Run(count, value) => write!(formatter, "({count}, {value})"),
        }
    }
}

impl<T: Clone + PartialEq> ImmutableList<T> {
    /// Run-length encodes the list as `(count, value)` pairs.
    ///
    /// This is [`pack`](Self::pack) followed by mapping each sub-list to its
    /// length and shared value.
    #[must_use]
    pub fn encode(&self) -> ImmutableList<(usize, T)> {
        self.pack()
            .map(|run| (run.length().get(), run.head().clone()))
    }

    /// Like [`encode`](Self::encode), but runs of length one become
    /// [`Encoded::Singleton`].
    #[must_use]
    pub fn encode_modified(&self) -> ImmutableList<Encoded<T>> {
        self.encode()
            .map(|(count, value)| Encoded::from((*count, value.clone())))
    }

    /// Builds the modified encoding straight from the runs, without
    /// packing them into sub-lists first.
    ///
    /// Always equal to [`encode_modified`](Self::encode_modified).
    #[must_use]
    pub fn encode_direct(&self) -> ImmutableList<Encoded<T>> {
        self.map_runs(|run| Encoded::from((run.count().get(), run.first().clone())))
    }
}

impl<T: Clone> ImmutableList<(usize, T)> {
    /// Expands `(count, value)` pairs back into the original list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MalformedEncoding`] for the first pair whose
    /// count is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ninety_nine_lists::error::ListError;
    /// use ninety_nine_lists::list::ImmutableList;
    ///
    /// let encoded: ImmutableList<(usize, char)> =
    ///     ImmutableList::from_values([(2, 'a'), (1, 'b')]).unwrap();
    /// assert_eq!(encoded.decode().unwrap().describe(), "[a, a, b]");
    ///
    /// let malformed: ImmutableList<(usize, char)> =
    ///     ImmutableList::from_values([(2, 'a'), (0, 'b')]).unwrap();
    /// assert_eq!(
    ///     malformed.decode(),
    ///     Err(ListError::MalformedEncoding { position: 1, count: 0 })
    /// );
    /// ```
    pub fn decode(&self) -> Result<ImmutableList<T>, ListError> {
        let mut position = 0;
        self.try_flat_map(|(count, value)| {
            let run = expand_run(position, *count, value);
            position += 1;
            run
        })
    }
}

impl<T: Clone> ImmutableList<Encoded<T>> {
    /// Expands the modified encoding back into the original list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::MalformedEncoding`] for the first
    /// [`Encoded::Run`] whose count is zero.
    pub fn decode_modified(&self) -> Result<ImmutableList<T>, ListError> {
        let mut position = 0;
        self.try_flat_map(|encoded| {
            let run = expand_run(position, encoded.count(), encoded.value());
            position += 1;
            run
        })
    }
}

fn expand_run<T: Clone>(
    position: usize,
    count: usize,
    value: &T,
) -> Result<ImmutableList<T>, ListError> {
    NonZeroUsize::new(count)
        .map(|count| ImmutableList::replicate(count, value.clone()))
        .ok_or_else(|| {
            tracing::debug!(position, count, "malformed run-length encoding");
            ListError::MalformedEncoding { position, count }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn symbols() -> ImmutableList<&'static str> {
        ImmutableList::from_values([
            "a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e",
        ])
        .unwrap()
    }

    #[rstest]
    fn test_encode(symbols: ImmutableList<&'static str>) {
        let expected =
            ImmutableList::from_values([(4, "a"), (1, "b"), (2, "c"), (2, "a"), (1, "d"), (4, "e")])
                .unwrap();
        assert_eq!(symbols.encode(), expected);
    }

    #[rstest]
    fn test_encode_modified(symbols: ImmutableList<&'static str>) {
        let expected = ImmutableList::from_values([
            Encoded::Run(4, "a"),
            Encoded::Singleton("b"),
            Encoded::Run(2, "c"),
            Encoded::Run(2, "a"),
            Encoded::Singleton("d"),
            Encoded::Run(4, "e"),
        ])
        .unwrap();
        assert_eq!(symbols.encode_modified(), expected);
    }

    #[rstest]
    fn test_encode_direct_matches_encode_modified(symbols: ImmutableList<&'static str>) {
        assert_eq!(symbols.encode_direct(), symbols.encode_modified());
    }

    #[rstest]
    fn test_decode_roundtrip(symbols: ImmutableList<&'static str>) {
        assert_eq!(symbols.encode().decode(), Ok(symbols.clone()));
        assert_eq!(symbols.encode_modified().decode_modified(), Ok(symbols));
    }

    #[rstest]
    #[case(vec![(0, 'a')], 0)]
    #[case(vec![(1, 'a'), (3, 'b'), (0, 'c'), (0, 'd')], 2)]
    fn test_decode_rejects_zero_count(#[case] pairs: Vec<(usize, char)>, #[case] position: usize) {
        let encoded = ImmutableList::try_from(pairs).unwrap();
        assert_eq!(
            encoded.decode(),
            Err(ListError::MalformedEncoding { position, count: 0 })
        );
    }

    #[rstest]
    fn test_decode_modified_rejects_zero_run() {
        let encoded =
            ImmutableList::from_values([Encoded::Singleton('a'), Encoded::Run(0, 'b')]).unwrap();
        assert_eq!(
            encoded.decode_modified(),
            Err(ListError::MalformedEncoding {
                position: 1,
                count: 0
            })
        );
    }

    #[rstest]
    #[case((1, 'x'), Encoded::Singleton('x'))]
    #[case((3, 'x'), Encoded::Run(3, 'x'))]
    fn test_encoded_from_pair(#[case] pair: (usize, char), #[case] expected: Encoded<char>) {
        assert_eq!(Encoded::from(pair), expected);
        assert_eq!(expected.count(), pair.0);
        assert_eq!(expected.value(), &pair.1);
    }

    #[rstest]
    fn test_encoded_display() {
        assert_eq!(Encoded::Singleton('b').to_string(), "b");
        assert_eq!(Encoded::Run(4, 'a').to_string(), "(4, a)");
    }
}
