//! Prisms for the standard sum types.
//!
//! These are the building blocks the rest of the crate composes with lenses:
//! [`some_prism`] turns the `result` lens of a form result into its `value`
//! optional, and [`left_prism`]/[`right_prism`] focus on one branch of the
//! input handled by the choice combinators.

use super::{FunctionPrism, Prism};
use crate::control::Either;

/// A prism focusing on the `Some` case of an `Option`.
///
/// # Example
///
/// ```
/// use forms::optics::{Prism, some_prism};
///
/// let prism = some_prism::<i32>();
/// assert_eq!(prism.preview(&Some(42)), Some(&42));
/// assert_eq!(prism.preview(&None), None);
/// assert_eq!(prism.review(7), Some(7));
/// ```
#[must_use]
pub fn some_prism<A>() -> impl Prism<Option<A>, A> + Clone {
    FunctionPrism::new(Option::as_ref, Some, |source: Option<A>| source)
}

/// A prism focusing on the `Left` case of an [`Either`].
#[must_use]
pub fn left_prism<L, R>() -> impl Prism<Either<L, R>, L> + Clone {
    FunctionPrism::new(Either::left_ref, Either::Left, Either::left)
}

/// A prism focusing on the `Right` case of an [`Either`].
///
/// # Example
///
/// ```
/// use forms::control::Either;
/// use forms::optics::{Prism, right_prism};
///
/// let phone = right_prism::<String, u64>();
/// assert_eq!(phone.review(5_550_100), Either::Right(5_550_100));
/// ```
#[must_use]
pub fn right_prism<L, R>() -> impl Prism<Either<L, R>, R> + Clone {
    FunctionPrism::new(Either::right_ref, Either::Right, Either::right)
}
