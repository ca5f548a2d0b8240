//! Bifunctor type class - mapping over two type parameters.
//!
//! A `Bifunctor` transforms `F<A, B>` into `F<C, D>`. `FormResult<M, A>` is a
//! bifunctor in its diagnostic payload (`first`) and its value (`second`).
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use forms::form_result::FormResult;
//! use forms::typeclass::Bifunctor;
//!
//! let parsed = FormResult::new(vec!["trimmed"], Some(" 42 "));
//! let normalized = parsed.bimap(|notes| notes.len(), str::trim);
//! assert_eq!(normalized, FormResult::new(1, Some("42")));
//! ```

use crate::control::Either;

/// A type class for types with two type parameters that can both be mapped.
///
/// # Laws
///
/// - Identity: `bf.bimap(|x| x, |y| y) == bf`
/// - Composition: `bf.bimap(f2 . f1, g2 . g1) == bf.bimap(f1, g1).bimap(f2, g2)`
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `FormResult<M, A>`, `Target<C, D> = FormResult<C, D>`.
    /// For `Result<T, E>` (implemented as `Bifunctor<E, T>`), `Target<C, D> = Result<D, C>`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::control::Either;
    /// use forms::typeclass::Bifunctor;
    ///
    /// let either: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(either.bimap(|x| x * 2, |s| s.len()), Either::Right(5));
    /// ```
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without consuming self.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Applies a function to a reference of the first type parameter.
    ///
    /// Requires `B: Clone` because the untransformed side must be cloned.
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, B::clone)
    }

    /// Applies a function to a reference of the second type parameter.
    ///
    /// Requires `A: Clone` because the untransformed side must be cloned.
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(A::clone, function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }
}

/// `Result<T, E>` is implemented as `Bifunctor<E, T>` so that `second`
/// agrees with `Functor::fmap`.
impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_first_only_touches_left() {
        let right: Either<i32, &str> = Either::Right("kept");
        assert_eq!(right.first(|x| x + 1), Either::Right("kept"));

        let left: Either<i32, &str> = Either::Left(1);
        assert_eq!(left.first(|x| x + 1), Either::Left(2));
    }

    #[rstest]
    fn result_first_maps_error() {
        let failed: Result<i32, &str> = Err("bad");
        assert_eq!(failed.first(str::len), Err(3));
    }

    #[rstest]
    fn second_ref_leaves_original_usable() {
        let either: Either<String, i32> = Either::Right(21);
        assert_eq!(either.second_ref(|n| n * 2), Either::Right(42));
        assert!(either.is_right());
    }
}
