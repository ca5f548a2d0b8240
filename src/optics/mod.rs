//! Optics for reading and rebuilding immutable values.
//!
//! Form results are never mutated; these optics give get/set access to their
//! parts by returning a new value.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens + Prism = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a field that is always present (get/set)
//! - [`Prism`]: Focus on one case of a sum type (preview/review)
//! - [`Optional`]: Focus on a value that may be absent (get_option/affine set)
//!
//! `#[derive(Lenses)]` generates a `<field>_lens()` constructor for every
//! named field of a struct.
//!
//! # Example
//!
//! ```
//! use forms::form_result::FormResult;
//! use forms::optics::{Lens, Optional};
//!
//! let parsed = FormResult::new(String::from("ok"), Some(42));
//!
//! let meta = FormResult::<String, i32>::meta_lens();
//! let result = FormResult::<String, i32>::result_lens();
//! let value = FormResult::<String, i32>::value_optional();
//!
//! assert_eq!(meta.get(&parsed), "ok");
//! assert_eq!(result.get(&parsed), &Some(42));
//! assert_eq!(value.get_option(&parsed), Some(&42));
//!
//! let cleared = result.set(parsed, None);
//! assert_eq!(value.set(cleared.clone(), 1), cleared);
//! ```

mod lens;
mod optional;
mod prism;
mod standard_optics;

pub use lens::{ComposedLens, FunctionLens, Lens};
pub use optional::{LensComposeExtension, LensPrismComposition, Optional};
pub use prism::{FunctionPrism, Prism};
pub use standard_optics::{left_prism, right_prism, some_prism};
