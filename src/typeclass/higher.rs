//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` or
//! `FormResult<M, _>` directly. [`TypeConstructor`] names the constructor's
//! current argument (`Inner`) and lets a trait re-apply the constructor to a
//! different argument (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use forms::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int: Option<i32> = Some(42);
//! let none_string: Option<String> = transform_type(some_int);
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// For `FormResult<M, A>`, `Inner` is the value type `A` and `WithType<B>` is
/// `FormResult<M, B>`: the diagnostic type is part of the constructor.
///
/// # Laws
///
/// **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_result::FormResult;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn result_with_type_preserves_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
    }

    #[test]
    fn form_result_with_type_preserves_meta_type() {
        fn assert_form_result_with_type<M, A, B>()
        where
            FormResult<M, A>: TypeConstructor<Inner = A, WithType<B> = FormResult<M, B>>,
        {
        }

        assert_form_result_with_type::<String, i32, bool>();
        assert_form_result_with_type::<Vec<String>, (), u8>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <FormResult<String, i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool_result<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool_result::<Step2>();
    }
}
