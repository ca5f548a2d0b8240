//! Lens optics for focusing on struct fields.
//!
//! A Lens provides get/set access to one part of a larger structure without
//! mutating it in place. `#[derive(Lenses)]` generates a lens per named field;
//! [`FormResult`](crate::form_result::FormResult) uses it for its `meta` and
//! `result` fields.
//!
//! # Laws
//!
//! 1. **GetPut**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! # Examples
//!
//! ```
//! use forms::form_result::FormResult;
//! use forms::optics::Lens;
//!
//! let parsed = FormResult::new(vec!["trimmed"], Some(7));
//! let meta = FormResult::<Vec<&str>, i32>::meta_lens();
//!
//! assert_eq!(meta.get(&parsed), &vec!["trimmed"]);
//! let annotated = meta.modify(parsed, |mut notes| {
//!     notes.push("checked");
//!     notes
//! });
//! assert_eq!(annotated.meta(), &vec!["trimmed", "checked"]);
//! ```

use std::marker::PhantomData;

/// An optic focusing on exactly one `A` inside an `S`.
pub trait Lens<S, A> {
    /// Returns a reference to the focused value.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns a copy of `source` with the focused value replaced.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused value with the result of `function`.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Like [`Lens::modify`], but the function borrows the current value.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with another that focuses inside `A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forms::form_result::FormResult;
    /// use forms::optics::{FunctionLens, Lens};
    ///
    /// let first = FunctionLens::new(
    ///     |pair: &(String, u8)| &pair.0,
    ///     |pair: (String, u8), first: String| (first, pair.1),
    /// );
    /// let meta_first = FormResult::<(String, u8), ()>::meta_lens().compose(first);
    ///
    /// let result = FormResult::new((String::from("a"), 1), None);
    /// assert_eq!(meta_first.get(&result), "a");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens built from a getter and a setter function.
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a lens from a getter and a setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Two lenses applied one after the other.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates the composition of `first` followed by `second`.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.second.get(self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
