//! Optional optics for focusing on a value that may be absent.
//!
//! An Optional is what a Lens composed with a Prism produces: a total path to
//! a slot, followed by a partial match inside it. Setting is affine: when the
//! focus is absent the source is returned unchanged, so an Optional never
//! invents presence the source did not already have.
//!
//! # Laws
//!
//! 1. **GetOptionSet**: when `optional.get_option(&source)` is `Some(a)`,
//!    `optional.set(source, a.clone()) == source`
//! 2. **SetGetOption**: when the focus is present,
//!    `optional.get_option(&optional.set(source, value)) == Some(&value)`
//! 3. **SetAbsent**: when the focus is absent, `optional.set(source, value) == source`
//!
//! # Examples
//!
//! ```
//! use forms::form_result::FormResult;
//! use forms::optics::Optional;
//!
//! let value = FormResult::<String, u32>::value_optional();
//!
//! let parsed = FormResult::new(String::new(), Some(36));
//! assert_eq!(value.get_option(&parsed), Some(&36));
//! assert_eq!(value.set(parsed, 37).result(), Some(&37));
//!
//! let failed = FormResult::<String, u32>::from_meta(String::from("required"));
//! assert_eq!(value.set(failed.clone(), 37), failed);
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::prism::Prism;

/// An optic focusing on zero or one `A` inside an `S`.
pub trait Optional<S, A> {
    /// Returns a reference to the focus, if present.
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Replaces the focus if present; returns `source` unchanged otherwise.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focus if present, returning `None` otherwise.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let maybe_value = self.get_option(&source).cloned();
        maybe_value.map(|value| self.set(source, function(value)))
    }

    /// Modifies the focus if present, returning the source unchanged otherwise.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        match self.get_option(&source).cloned() {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Returns whether the focus is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }
}

/// A lens followed by a prism.
pub struct LensPrismComposition<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<A>,
}

impl<L, P, A> LensPrismComposition<L, P, A> {
    /// Creates the composition of `lens` followed by `prism`.
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Optional<S, B> for LensPrismComposition<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
    A: 'static,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a B> {
        self.prism.preview(self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        if self.prism.preview(self.lens.get(&source)).is_none() {
            return source;
        }
        let new_intermediate = self.prism.review(value);
        self.lens.set(source, new_intermediate)
    }
}

impl<L: Clone, P: Clone, A> Clone for LensPrismComposition<L, P, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, P: std::fmt::Debug, A> std::fmt::Debug for LensPrismComposition<L, P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensPrismComposition")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

impl<S, A, L> LensComposeExtension<S, A> for L where L: Lens<S, A> {}

/// Adds [`compose_prism`](LensComposeExtension::compose_prism) to every lens.
pub trait LensComposeExtension<S, A>: Lens<S, A> {
    /// Composes this lens with a prism, producing an [`Optional`].
    fn compose_prism<B, P>(self, prism: P) -> LensPrismComposition<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        LensPrismComposition::new(self, prism)
    }
}
