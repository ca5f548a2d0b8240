//! Applicative type class - combining independent results.
//!
//! `Applicative` extends [`Functor`] with the ability to:
//!
//! - Lift pure values into the context (`pure`)
//! - Combine several values in the context using a function (`map2`, `map3`)
//! - Pair values up (`product`)
//!
//! For `FormResult<M, A>` with `M: Monoid` this is the instance that merges
//! diagnostics from every field: `map2` always combines both payloads, and
//! only produces a value when both sides have one.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use forms::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
//! assert_eq!(Some(1).product(Some("hello")), Some((1, "hello")));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Laws
///
/// - Identity: `pure(|x| x).apply(v) == v`
/// - Homomorphism: `pure(f).apply(pure(x)) == pure(f(x))`
/// - Interchange: `u.apply(pure(y)) == pure(|f| f(y)).apply(u)`
/// - Composition: `pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))`
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map3(Some(2), Some(3), |a, b, c| a + b + c), Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicative values, keeping only the first value.
    ///
    /// The context of both is still combined.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicative values, keeping only the second value.
    ///
    /// The context of both is still combined.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in this context to a value held in another.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    /// Short-circuits on the first error.
    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        let a = self?;
        let b = other?;
        Ok(function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        let a = self?;
        let b = second?;
        let c = third?;
        Ok(function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
