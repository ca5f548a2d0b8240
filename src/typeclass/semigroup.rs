//! Semigroup type class - types with an associative binary operation.
//!
//! Every diagnostic payload a form carries is a semigroup: when two fields
//! are combined their payloads are merged with `combine`. Merging is
//! left-to-right; for sequences the left operand's entries come first.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use forms::typeclass::Semigroup;
//!
//! let errors = vec!["name is required"].combine(vec!["age must be a number"]);
//! assert_eq!(errors, vec!["name is required", "age must be a number"]);
//! ```

use std::collections::BTreeMap;
use std::ops::Add;

use super::wrappers::{Max, Min, Sum};

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use forms::typeclass::Semigroup;
///
/// assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Semigroup;
    ///
    /// let a = String::from("Hello, ");
    /// let b = String::from("World!");
    /// assert_eq!(a.combine_ref(&b), "Hello, World!");
    /// assert_eq!(a, "Hello, ");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements of an iterator, or returns `None` when it is empty.
    ///
    /// See [`Monoid::combine_all`](super::Monoid::combine_all) for a version
    /// that falls back to the identity element.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// BTreeMap Implementation
// =============================================================================

/// Maps merge key by key; values present on both sides are combined.
///
/// This is the natural payload for per-field diagnostics:
///
/// ```rust
/// use std::collections::BTreeMap;
/// use forms::typeclass::Semigroup;
///
/// let name = BTreeMap::from([("name", vec!["required"])]);
/// let more = BTreeMap::from([("name", vec!["too short"]), ("age", vec!["not a number"])]);
/// let merged = name.combine(more);
///
/// assert_eq!(merged["name"], vec!["required", "too short"]);
/// assert_eq!(merged["age"], vec!["not a number"]);
/// ```
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.combine(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// Option forms a semigroup when its inner type is a semigroup.
///
/// - `Some(a).combine(Some(b))` = `Some(a.combine(b))`
/// - `Some(a).combine(None)` = `Some(a)`
/// - `None.combine(Some(b))` = `Some(b)`
/// - `None.combine(None)` = `None`
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Unit Type Implementation
// =============================================================================

/// The unit type is the trivial payload: no diagnostics at all.
impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(vec![1]), Some(vec![2]), Some(vec![1, 2]))]
    #[case(Some(vec![1]), None, Some(vec![1]))]
    #[case(None, Some(vec![2]), Some(vec![2]))]
    #[case(None, None, None)]
    fn option_combine(
        #[case] left: Option<Vec<i32>>,
        #[case] right: Option<Vec<i32>>,
        #[case] expected: Option<Vec<i32>>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_zero_panics() {
        let _ = String::from("x").combine_n(0);
    }

    #[rstest]
    fn reduce_all_empty_is_none() {
        assert_eq!(String::reduce_all(Vec::new()), None);
    }

    #[rstest]
    fn tuple_combines_componentwise() {
        let left = (Sum(1), String::from("a"));
        let right = (Sum(2), String::from("b"));
        assert_eq!(left.combine(right), (Sum(3), String::from("ab")));
    }

    #[rstest]
    fn max_keeps_larger() {
        assert_eq!(Max(2).combine(Max(7)), Max(7));
        assert_eq!(Min(2).combine(Min(7)), Min(2));
    }

    proptest! {
        #[test]
        fn prop_btree_map_combine_is_associative(
            a in prop::collection::btree_map(0u8..4, prop::collection::vec(any::<u8>(), 0..3), 0..4),
            b in prop::collection::btree_map(0u8..4, prop::collection::vec(any::<u8>(), 0..3), 0..4),
            c in prop::collection::btree_map(0u8..4, prop::collection::vec(any::<u8>(), 0..3), 0..4),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
