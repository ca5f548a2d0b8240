//! Derive macro for `forms` optics.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates one lens constructor per named struct field
//!
//! # Example
//!
//! ```rust,ignore
//! use forms::optics::Lens;
//! use forms_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Field {
//!     label: String,
//!     touched: bool,
//! }
//!
//! // Generated methods:
//! // - Field::label_lens() -> impl Lens<Field, String> + Clone
//! // - Field::touched_lens() -> impl Lens<Field, bool> + Clone
//!
//! let field = Field { label: "email".to_string(), touched: false };
//! let touched = Field::touched_lens().set(field, true);
//! assert!(touched.touched);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating a lens constructor for every field of a struct.
///
/// For each field `foo: T` of `Struct`, generates
///
/// ```rust,ignore
/// impl Struct {
///     pub fn foo_lens() -> impl forms::optics::Lens<Struct, T> + Clone { ... }
/// }
/// ```
///
/// The constructors share the struct's own visibility, so a public struct
/// with private fields still exposes its lenses. Generic structs are
/// supported; the lenses are generated inside an impl block carrying the
/// struct's generics and where clause.
///
/// # Requirements
///
/// - The struct must have named fields (no tuple or unit structs)
/// - The `forms` crate must be reachable as `::forms`
///
/// # Example
///
/// ```rust,ignore
/// use forms::optics::Lens;
/// use forms_derive::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Pair<A, B> {
///     left: A,
///     right: B,
/// }
///
/// let pair = Pair { left: 1, right: "one" };
/// assert_eq!(*Pair::<i32, &str>::left_lens().get(&pair), 1);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
