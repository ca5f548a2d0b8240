//! Type class traits for the form algebra.
//!
//! This module provides the traits that describe the algebraic structure of
//! [`FormResult`](crate::form_result::FormResult) and of the diagnostic
//! payloads it carries:
//!
//! - [`Functor`]: Mapping over the successfully-parsed value
//! - [`Applicative`]: Combining independent results while merging diagnostics
//! - [`Monad`]: Sequencing dependent results
//! - [`Alternative`]: First-success choice with an empty element
//! - [`Bifunctor`]: Mapping the diagnostic and value channels independently
//! - [`Semigroup`]: Associative merging of diagnostic payloads
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what lets `FormResult<M, _>` be a `Functor` in its value while
//! keeping its diagnostic type `M` fixed.
//!
//! ## Instances selected by the payload
//!
//! `ap`, `pure`, `flat_map` and `empty` need to build or merge diagnostics,
//! so `FormResult<M, A>` only implements [`Applicative`], [`Monad`] and
//! [`Alternative`] when `M: Monoid`. Choosing a different `Monoid` for the
//! payload (for example [`Sum`] to count failures, or [`Max`] to keep the
//! worst severity) chooses a different instance.
//!
//! # Examples
//!
//! ```rust
//! use forms::typeclass::{Monoid, Semigroup, Sum};
//!
//! // String concatenation
//! let errors = String::from("required; ").combine(String::from("too short"));
//! assert_eq!(errors, "required; too short");
//!
//! // Counting with an additive monoid
//! let failures = vec![Sum::new(1), Sum::new(0), Sum::new(1)];
//! assert_eq!(Sum::combine_all(failures), Sum::new(2));
//! ```
//!
//! ```rust
//! use forms::form_result::FormResult;
//! use forms::typeclass::Applicative;
//!
//! let name = FormResult::new(String::from("name ok; "), Some("Ada"));
//! let age = FormResult::new(String::from("age ok"), Some(36));
//! let person = name.map2(age, |name, age| format!("{name} ({age})"));
//!
//! assert_eq!(person.meta(), "name ok; age ok");
//! assert_eq!(person.result(), Some(&"Ada (36)".to_string()));
//! ```

mod alternative;
mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use alternative::Alternative;
pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Sum};
