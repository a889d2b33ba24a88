//! # ninety-nine-lists
//!
//! An immutable, never-empty singly-linked list with the classic list
//! exercises implemented on top of it.
//!
//! ## Overview
//!
//! - **List**: [`ImmutableList`](list::ImmutableList), built with
//!   [`from_values`](list::ImmutableList::from_values) or the [`list!`] macro.
//!   Construction from an empty sequence yields `None`.
//! - **Queries**: `last`, `penultimate`, `at`, `length`, `describe`
//! - **Transforms**: `reverse`, `is_palindrome`, `flatten`, `compress`,
//!   `pack`, `encode`, `encode_modified`, `decode`, `duplicate`,
//!   `duplicate_times`
//! - **Logic**: boolean gates and truth tables in [`logic`]
//!
//! Transforms never mutate their input. Each one returns a freshly built list.
//!
//! ## Feature Flags
//!
//! - `arc`: link nodes with `Arc` so lists are `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` for lists, nested elements and encodings
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ninety_nine_lists::prelude::*;
//!
//! let list = list!["a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e"].unwrap();
//! assert_eq!(list.compress().describe(), "[a, b, c, a, d, e]");
//! assert_eq!(list.encode().decode(), Ok(list.clone()));
//!
//! assert_eq!(list.duplicate_times(0), Err(ListError::DuplicateTimesZero));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ninety_nine_lists::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ListError;
    pub use crate::list;
    pub use crate::list::{Element, Encoded, ImmutableList};
    pub use crate::logic::*;
}

pub mod error;
pub mod list;
pub mod logic;
