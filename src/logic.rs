//! Boolean logic gates.
//!
//! Each gate is a total function over two booleans. [`truth_table`]
//! evaluates a gate on every input pair.
//!
//! # Examples
//!
//! ```rust
//! use ninety_nine_lists::logic::{implies, nand, truth_table};
//!
//! assert!(!implies(true, false));
//! assert_eq!(
//!     truth_table(nand),
//!     [
//!         (true, true, false),
//!         (true, false, true),
//!         (false, true, true),
//!         (false, false, true),
//!     ]
//! );
//! ```

/// Input pairs in truth-table order.
pub const INPUTS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

/// Logical conjunction.
#[inline]
#[must_use]
pub const fn and(left: bool, right: bool) -> bool {
    left && right
}

/// Logical disjunction.
#[inline]
#[must_use]
pub const fn or(left: bool, right: bool) -> bool {
    left || right
}

/// Negated conjunction.
#[inline]
#[must_use]
pub const fn nand(left: bool, right: bool) -> bool {
    !and(left, right)
}

/// Negated disjunction.
#[inline]
#[must_use]
pub const fn nor(left: bool, right: bool) -> bool {
    !or(left, right)
}

/// Exclusive or.
#[inline]
#[must_use]
pub const fn xor(left: bool, right: bool) -> bool {
    left != right
}

/// Material implication: false only when `left` holds and `right` does not.
#[inline]
#[must_use]
pub const fn implies(left: bool, right: bool) -> bool {
    !left || right
}

/// Equivalence.
#[inline]
#[must_use]
pub const fn equ(left: bool, right: bool) -> bool {
    left == right
}

/// Evaluates `gate` on every pair of [`INPUTS`], returning
/// `(left, right, output)` rows.
#[must_use]
pub fn truth_table<F>(gate: F) -> [(bool, bool, bool); 4]
where
    F: Fn(bool, bool) -> bool,
{
    INPUTS.map(|(left, right)| (left, right, gate(left, right)))
}
