//! Monoid type class - semigroups with an identity element.
//!
//! The identity element is the payload of a form that has nothing to say:
//! `FormResult::pure` and `FormResult::zero` both carry `M::empty()`.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(Self::empty()) == a
//! ```

use std::collections::BTreeMap;
use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Sum};

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use forms::typeclass::{Monoid, Semigroup};
///
/// let messages = vec![String::from("a"), String::from("b")];
/// assert_eq!(String::combine_all(messages), "ab");
/// assert_eq!(String::combine_all(Vec::new()), String::empty());
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from the identity element.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Monoid;
    ///
    /// assert!(Vec::<&str>::empty().is_empty_value());
    /// assert!(!vec!["required"].is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<K: Ord, V: Semigroup> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `None` is the identity, so any semigroup becomes a monoid under `Option`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// Max forms a monoid with the minimum bound as the identity.
impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

/// Min forms a monoid with the maximum bound as the identity.
impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid, B: Monoid, C: Monoid> Monoid for (A, B, C) {
    fn empty() -> Self {
        (A::empty(), B::empty(), C::empty())
    }
}
