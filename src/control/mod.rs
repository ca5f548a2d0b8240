//! Control structures used by the form combinators.
//!
//! - [`Either`]: A value that is one of two alternatives, the input and output
//!   shape of the choice combinators on [`Form`](crate::form::Form)

mod either;

pub use either::Either;
