//! Prism optics for focusing on one case of a sum type.
//!
//! A Prism can fail to extract its focus (`preview` returns `None` when the
//! source is a different case) but can always build a source from a focus
//! (`review`). The value slot of a form result is an `Option`, so the
//! [`some_prism`](super::some_prism) is what turns the result lens into the
//! affine `value` optic.
//!
//! # Laws
//!
//! 1. **PreviewReview**: `prism.preview(&prism.review(value)) == Some(&value)`
//! 2. **ReviewPreview**: when `prism.preview(source)` is `Some(a)`,
//!    `prism.review(a.clone()) == source`
//!
//! # Examples
//!
//! ```
//! use forms::control::Either;
//! use forms::optics::{Prism, left_prism};
//!
//! let email = left_prism::<String, u64>();
//!
//! let contact: Either<String, u64> = Either::Left(String::from("ada@example.com"));
//! assert_eq!(email.preview(&contact), Some(&String::from("ada@example.com")));
//! assert_eq!(email.preview(&Either::Right(5_550_100)), None);
//! ```

use std::marker::PhantomData;

/// An optic focusing on zero or one `A` that fully determines an `S`.
pub trait Prism<S, A> {
    /// Returns a reference to the focus when `source` is the matching case.
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Builds a source from a focus value.
    fn review(&self, value: A) -> S;

    /// Like [`Prism::preview`], but takes ownership of the source.
    fn preview_owned(&self, source: S) -> Option<A>;

    /// Modifies the focus if present, returning `None` otherwise.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview_owned(source)
            .map(|value| self.review(function(value)))
    }

    /// Modifies the focus if present, returning the source unchanged otherwise.
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        S: Clone,
    {
        self.modify_option(source.clone(), function)
            .unwrap_or(source)
    }
}

/// A prism built from preview, review and owned-preview functions.
pub struct FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    preview_function: Pr,
    review_function: Re,
    preview_owned_function: PrOwned,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, Pr, Re, PrOwned> FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    /// Creates a prism from its three functions.
    #[must_use]
    pub const fn new(
        preview_function: Pr,
        review_function: Re,
        preview_owned_function: PrOwned,
    ) -> Self {
        Self {
            preview_function,
            review_function,
            preview_owned_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, PrOwned> Prism<S, A> for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A> {
        (self.preview_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    fn preview_owned(&self, source: S) -> Option<A> {
        (self.preview_owned_function)(source)
    }
}

impl<S, A, Pr, Re, PrOwned> Clone for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A> + Clone,
    Re: Fn(A) -> S + Clone,
    PrOwned: Fn(S) -> Option<A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            preview_owned_function: self.preview_owned_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, PrOwned> std::fmt::Debug for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}
