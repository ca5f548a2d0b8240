//! Monad type class - sequencing dependent results.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, where the next step is
//! chosen from the value produced by the previous one.
//!
//! For `FormResult<M, A>` the continuation's result replaces the original
//! one entirely, including its diagnostics. Use `map2` or `ap` when both
//! sides' diagnostics should be kept.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use forms::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").flat_map(parse_positive).flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Laws
///
/// - Left identity: `Self::pure(a).flat_map(f) == f(a)`
/// - Right identity: `m.flat_map(Self::pure) == m`
/// - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub trait Monad: Applicative {
    /// Applies a function that returns a monadic value and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(Some(5).flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` matching `Option::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// A failure in `self` propagates and `next` is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_flat_map_none_short_circuits() {
        let mut called = false;
        let result = None::<i32>.flat_map(|n| {
            called = true;
            Some(n)
        });
        assert_eq!(result, None);
        assert!(!called);
    }

    #[rstest]
    fn result_flat_map_propagates_continuation_error() {
        let parsed: Result<i32, String> = Ok(5);
        let checked = parsed.flat_map(|n| {
            if n > 10 {
                Ok(n)
            } else {
                Err(format!("{n} is too small"))
            }
        });
        assert_eq!(checked, Err("5 is too small".to_string()));
    }

    #[rstest]
    fn result_then_ok() {
        let first: Result<i32, String> = Ok(1);
        assert_eq!(first.then(Ok::<_, String>("next")), Ok("next"));
    }
}
