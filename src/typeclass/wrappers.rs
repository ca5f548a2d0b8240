//! Newtype wrappers selecting a `Semigroup`/`Monoid` for a plain value.
//!
//! A diagnostic payload does not have to be a list of messages. Wrapping a
//! number picks how two payloads merge:
//!
//! - [`Sum`]: counts, e.g. the number of failing fields (identity: 0)
//! - [`Max`]: keeps the largest, e.g. the worst severity (identity: type minimum)
//! - [`Min`]: keeps the smallest (identity: type maximum)
//!
//! [`Bounded`] supplies the extreme values `Max` and `Min` need for their
//! identity elements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Sum Wrapper
// =============================================================================

/// The additive semigroup/monoid.
///
/// `Sum(a).combine(Sum(b))` is `Sum(a + b)` and the identity is `Sum(0)`.
///
/// # Examples
///
/// ```rust
/// use forms::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
/// assert_eq!(Sum::<u32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Extracts the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

// =============================================================================
// Max Wrapper
// =============================================================================

/// The semigroup keeping the larger of two values.
///
/// The monoid identity (requires [`Bounded`]) is `Max(A::MIN_VALUE)`.
///
/// # Examples
///
/// ```rust
/// use forms::typeclass::{Max, Monoid, Semigroup};
///
/// assert_eq!(Max::new(3).combine(Max::new(5)), Max::new(5));
/// assert_eq!(Max::<u8>::empty(), Max::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Max<A>(pub A);

impl<A> Max<A> {
    /// Creates a new `Max` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Extracts the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Max<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

// =============================================================================
// Min Wrapper
// =============================================================================

/// The semigroup keeping the smaller of two values.
///
/// The monoid identity (requires [`Bounded`]) is `Min(A::MAX_VALUE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Min<A>(pub A);

impl<A> Min<A> {
    /// Creates a new `Min` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Extracts the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Min<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

// =============================================================================
// Bounded
// =============================================================================

/// Types with a known minimum and maximum value.
///
/// ```rust
/// use forms::typeclass::{Bounded, Max, Monoid, Semigroup};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// enum Severity {
///     Info,
///     Warning,
///     Error,
/// }
///
/// impl Bounded for Severity {
///     const MIN_VALUE: Self = Severity::Info;
///     const MAX_VALUE: Self = Severity::Error;
/// }
///
/// let worst = Max::combine_all([Max(Severity::Warning), Max(Severity::Info)]);
/// assert_eq!(worst, Max(Severity::Warning));
/// assert_eq!(Max::<Severity>::empty(), Max(Severity::Info));
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Bounded for $integer {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

impl_bounded_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}
