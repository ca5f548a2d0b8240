//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the value(s) inside a container while
//! preserving the container's shape. For a form result the shape is the
//! diagnostic payload together with the presence or absence of a value:
//! mapping never touches the payload and never invents a value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use forms::form_result::FormResult;
//! use forms::typeclass::Functor;
//!
//! let parsed = FormResult::new(String::new(), Some(5));
//! assert_eq!(parsed.fmap(|n| n + 1), FormResult::new(String::new(), Some(6)));
//!
//! // An absent value stays absent, diagnostics untouched
//! let failed: FormResult<String, i32> = FormResult::from_meta("required".to_string());
//! assert_eq!(failed.fmap(|n| n + 1), FormResult::from_meta("required".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// - Identity: `fa.fmap(|x| x) == fa`
/// - Composition: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
///
/// # Examples
///
/// ```rust
/// use forms::typeclass::Functor;
///
/// let x: Option<i32> = Some(5);
/// let y: Option<String> = x.fmap(|n| n.to_string());
/// assert_eq!(y, Some("5".to_string()));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n * 2), Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the original available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Functor;
    ///
    /// let x: Option<String> = Some("hello".to_string());
    /// let y: Option<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Some(5));
    /// assert_eq!(x, Some("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Useful for a form result whose diagnostics matter but whose parsed
    /// value does not.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}
