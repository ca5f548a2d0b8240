//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is the input and output shape of the choice combinators
//! [`Form::left`](crate::form::Form::left) and
//! [`Form::right`](crate::form::Form::right): one branch is handled by the
//! wrapped form, the other passes through untouched.
//!
//! # Examples
//!
//! ```rust
//! use forms::control::Either;
//!
//! // A contact field that is either an email address or a phone number
//! let contact: Either<String, u64> = Either::Right(5_550_100);
//!
//! let description = contact.fold(
//!     |email| format!("email {email}"),
//!     |phone| format!("phone {phone}"),
//! );
//! assert_eq!(description, "phone 5550100");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Unlike `Result`, neither side carries a failure connotation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into an `Option<L>`, discarding a right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option<R>`, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies a function to the left value, leaving a right value unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, leaving a left value unchanged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the two alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::control::Either;
    ///
    /// let left: Either<i32, &str> = Either::Left(1);
    /// assert_eq!(left.swap(), Either::Right(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

/// `Ok(r)` becomes `Right(r)` and `Err(l)` becomes `Left(l)`.
impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

/// `Right(r)` becomes `Ok(r)` and `Left(l)` becomes `Err(l)`.
impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Either::Left(42), "Left(42)")]
    #[case(Either::Right("email".to_string()), "Right(email)")]
    fn display_names_the_branch(#[case] value: Either<i32, String>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn debug_matches_tuple_variant() {
        let value: Either<i32, &str> = Either::Right("x");
        assert_eq!(format!("{value:?}"), "Right(\"x\")");
    }

    #[rstest]
    fn result_conversion_roundtrip() {
        let failed: Result<i32, String> = Err("invalid".to_string());
        let either: Either<String, i32> = failed.clone().into();
        assert_eq!(either, Either::Left("invalid".to_string()));
        let back: Result<i32, String> = either.into();
        assert_eq!(back, failed);
    }

    #[rstest]
    fn map_left_leaves_right_untouched() {
        let right: Either<i32, &str> = Either::Right("kept");
        assert_eq!(right.map_left(|n| n * 2), Either::Right("kept"));
        assert_eq!(right.left_ref(), None);
        assert_eq!(right.right_ref(), Some(&"kept"));
    }
}
