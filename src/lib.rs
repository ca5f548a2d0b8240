//! # forms
//!
//! Composable validating forms for Rust.
//!
//! ## Overview
//!
//! The crate is built around two types:
//!
//! - [`FormResult<M, A>`](form_result::FormResult): a parsed value that may be
//!   absent, together with a diagnostic payload `M` describing what happened
//!   while producing it
//! - [`Form<I, M, A>`](form::Form): a reusable function from an input `I` to a
//!   `FormResult<M, A>`
//!
//! Independent results are combined with [`map2`](form_result::FormResult::map2)
//! and [`ap`](form_result::FormResult::ap), which always merge both payloads
//! through the payload's [`Semigroup`](typeclass::Semigroup). Choice with
//! [`alt`](form_result::FormResult::alt) keeps the first present value.
//! Validation steps ([`parse`](form_result::FormResult::parse),
//! [`filter`](form_result::FormResult::filter),
//! [`refine`](form_result::FormResult::refine)) turn a rejected value into
//! absence plus a diagnostic supplied by the caller.
//!
//! Failures are data: no operation returns an error or panics on an absent
//! value.
//!
//! ## Modules
//!
//! - [`typeclass`]: Functor, Applicative, Monad, Alternative, Bifunctor,
//!   Semigroup and Monoid, with instances for `FormResult`
//! - [`optics`]: Lens, Prism and Optional, plus `#[derive(Lenses)]`
//! - [`control`]: [`Either`](control::Either), the input shape of the choice
//!   combinators
//! - [`view`]: a tree-shaped diagnostic payload
//!
//! ## Feature Flags
//!
//! - `view` (default): the [`view`] payload
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `tracing`: trace-level events when `parse` rejects a value and when `alt`
//!   falls back to its alternative
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use forms::prelude::*;
//!
//! fn non_empty(raw: &str) -> FormResult<Vec<String>, String> {
//!     FormResult::pure(raw.trim().to_string()).filter(
//!         "must not be empty".to_string(),
//!         append_on_error(|error: String| vec![error]),
//!         |text: &String| !text.is_empty(),
//!     )
//! }
//!
//! let both = non_empty("Ada").map2(non_empty("  "), |first, last| format!("{first} {last}"));
//! assert_eq!(both, FormResult::from_meta(vec!["must not be empty".to_string()]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

extern crate self as forms;

/// Emits a trace-level event with target `forms` when the `tracing` feature is
/// enabled, and nothing otherwise.
macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!(target: "forms", $($argument)*);
        }
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use forms::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::form::*;
    pub use crate::form_result::*;
    pub use crate::optics::*;
    pub use crate::typeclass::*;

    pub use forms_derive::Lenses;

    #[cfg(feature = "view")]
    pub use crate::view::*;
}

pub mod control;
pub mod form;
pub mod form_result;
pub mod optics;
pub mod typeclass;

#[cfg(feature = "view")]
pub mod view;

pub use forms_derive::Lenses;

static_assertions::assert_impl_all!(form_result::FormResult<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(form::Form<i32, String, i32>: Clone);
static_assertions::assert_not_impl_any!(form::Form<i32, String, i32>: Send, Sync);
