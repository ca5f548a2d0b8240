//! Alternative type class - first-success choice on Applicative functors.
//!
//! `Alternative` extends [`Applicative`] with:
//!
//! - An empty element representing "no value" (`empty`)
//! - Choice between two candidates (`alt`)
//! - Conditional success (`guard`)
//! - Making a computation optional (`optional`)
//! - Choosing from many candidates (`choice`)
//!
//! For `FormResult<M, A>` with `M: Monoid`, `empty` is a result with the
//! empty payload and no value, and `alt` keeps the first result that has a
//! value. Diagnostics of a discarded candidate are dropped.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! For `FormResult` this holds for results whose payload is empty when the
//! value is absent (those built by `pure` and `empty`): an absent `x` is
//! replaced by `empty` together with its diagnostics.
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! ## Left Distributivity
//!
//! ```text
//! (fa.alt(fb)).fmap(f) == fa.fmap(f).alt(fb.fmap(f))
//! ```

use super::applicative::Applicative;

/// A type class for applicative functors with a choice operation.
///
/// # Examples
///
/// ```rust
/// use forms::typeclass::Alternative;
///
/// fn filter_positive(n: i32) -> Option<i32> {
///     Option::<()>::guard(n > 0).map(|_| n)
/// }
///
/// assert_eq!(filter_positive(5), Some(5));
/// assert_eq!(filter_positive(-3), None);
/// assert_eq!(None.alt(Some(2)), Some(2));
/// ```
pub trait Alternative: Applicative {
    /// Returns the empty element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Alternative;
    ///
    /// let nothing: Option<i32> = <Option<()>>::empty();
    /// assert_eq!(nothing, None);
    /// ```
    fn empty<A>() -> Self::WithType<A>;

    /// Chooses between two candidates, keeping the first one that succeeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Alternative;
    ///
    /// assert_eq!(Some(1).alt(Some(2)), Some(1));
    /// assert_eq!(None.alt(Some(2)), Some(2));
    /// ```
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` when the condition holds, otherwise returns `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Alternative;
    ///
    /// assert_eq!(<Option<()>>::guard(true), Some(()));
    /// assert_eq!(<Option<()>>::guard(false), None);
    /// ```
    #[inline]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Turns a failing computation into a successful one holding `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Alternative;
    ///
    /// assert_eq!(Some(5).optional(), Some(Some(5)));
    /// assert_eq!(None::<i32>.optional(), Some(None));
    /// ```
    fn optional(self) -> Self::WithType<Option<Self::Inner>>
    where
        Self: Sized;

    /// Returns the first candidate that succeeds, or `empty` when none does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Alternative;
    ///
    /// let result: Option<i32> = Option::choice(vec![None, Some(1), Some(2)]);
    /// assert_eq!(result, Some(1));
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized;
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B> {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn optional(self) -> Option<Self> {
        Some(self)
    }

    #[inline]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().find(Self::is_some).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some(2), Some(2))]
    #[case(Some(1), None, Some(1))]
    #[case(Some(1), Some(2), Some(1))]
    #[case(None, None, None)]
    fn option_alt_keeps_first_some(
        #[case] first: Option<i32>,
        #[case] second: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(first.alt(second), expected);
    }

    #[rstest]
    fn option_choice_empty_iterator() {
        let result: Option<i32> = Option::choice(Vec::new());
        assert_eq!(result, None);
    }
}
