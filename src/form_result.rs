//! FormResult - a value together with the diagnostics produced computing it.
//!
//! A `FormResult<M, A>` pairs an accumulated diagnostic payload `meta: M`
//! with an optional parsed value `result: Option<A>`. Failure is data: a
//! failed validation is a result without a value whose payload says why.
//!
//! The two channels are deliberately decoupled:
//!
//! - Combining independent results ([`FormResult::zip_with`], [`FormResult::ap`],
//!   [`FormResult::map2`]) **always** merges both payloads, and produces a
//!   value only when both sides have one.
//! - [`FormResult::alt`] keeps the first result that has a value and drops
//!   the payload of the branch it does not take.
//! - [`FormResult::chain`] replaces the payload with the continuation's.
//!
//! # Examples
//!
//! ```rust
//! use forms::form_result::{FormResult, append_on_error};
//!
//! fn age(raw: &str) -> FormResult<Vec<String>, u8> {
//!     FormResult::pure(raw).parse(
//!         append_on_error(|error: std::num::ParseIntError| vec![format!("age: {error}")]),
//!         str::parse::<u8>,
//!     )
//! }
//!
//! fn name(raw: &str) -> FormResult<Vec<String>, String> {
//!     FormResult::pure(raw.trim().to_string()).filter(
//!         "name: required".to_string(),
//!         append_on_error(|error: String| vec![error]),
//!         |name| !name.is_empty(),
//!     )
//! }
//!
//! let person = name("Ada").map2(age("36"), |name, age| (name, age));
//! assert_eq!(person.result(), Some(&("Ada".to_string(), 36)));
//! assert!(person.meta().is_empty());
//!
//! // Every field reports, even though the first one already failed
//! let person = name("  ").map2(age("old"), |name, age| (name, age));
//! assert_eq!(person.result(), None);
//! assert_eq!(
//!     person.meta(),
//!     &vec![
//!         "name: required".to_string(),
//!         "age: invalid digit found in string".to_string(),
//!     ]
//! );
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::optics::{LensComposeExtension, Optional, some_prism};
use crate::typeclass::{
    Alternative, Applicative, Bifunctor, Functor, Monad, Monoid, Semigroup, TypeConstructor,
};
use forms_derive::Lenses;

/// An immutable pair of a diagnostic payload and an optional value.
///
/// Equality, ordering and hashing are structural: `meta` first, then
/// `result`, with `None < Some(_)`.
///
/// # Examples
///
/// ```rust
/// use forms::form_result::FormResult;
///
/// let parsed = FormResult::new(String::new(), Some(5));
/// assert_eq!(parsed.map(|n| n + 1), FormResult::new(String::new(), Some(6)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormResult<M, A> {
    meta: M,
    result: Option<A>,
}

impl<M, A> FormResult<M, A> {
    // =========================================================================
    // Construction and Access
    // =========================================================================

    /// Builds a result from both fields.
    #[inline]
    pub const fn new(meta: M, result: Option<A>) -> Self {
        Self { meta, result }
    }

    /// Builds a result carrying only diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form_result::FormResult;
    ///
    /// let missing: FormResult<&str, i32> = FormResult::from_meta("required");
    /// assert_eq!(missing, FormResult::new("required", None));
    /// ```
    #[inline]
    pub const fn from_meta(meta: M) -> Self {
        Self { meta, result: None }
    }

    /// Returns the diagnostic payload.
    #[inline]
    pub const fn meta(&self) -> &M {
        &self.meta
    }

    /// Returns the value, if one was produced.
    #[inline]
    pub const fn result(&self) -> Option<&A> {
        self.result.as_ref()
    }

    /// Returns `true` when a value is present.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Splits the result into its payload and value.
    #[inline]
    pub fn into_parts(self) -> (M, Option<A>) {
        (self.meta, self.result)
    }

    /// Discards the payload, keeping the value.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.result
    }

    /// An optional focusing on the value: `set` only replaces a value that
    /// is already present.
    #[must_use]
    pub fn value_optional() -> impl Optional<Self, A> + Clone
    where
        M: 'static,
        A: 'static,
    {
        Self::result_lens().compose_prism(some_prism())
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to the value if present, leaving the payload untouched.
    #[inline]
    pub fn map<B, F>(self, function: F) -> FormResult<M, B>
    where
        F: FnOnce(A) -> B,
    {
        FormResult::new(self.meta, self.result.map(function))
    }

    /// Transforms the payload and the value independently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form_result::FormResult;
    ///
    /// let parsed = FormResult::new(vec!["trimmed"], Some(" 42 "));
    /// let normalized = parsed.bimap(|notes| notes.len(), str::trim);
    /// assert_eq!(normalized, FormResult::new(1, Some("42")));
    /// ```
    #[inline]
    pub fn bimap<N, B, F, G>(self, meta_function: F, value_function: G) -> FormResult<N, B>
    where
        F: FnOnce(M) -> N,
        G: FnOnce(A) -> B,
    {
        FormResult::new(meta_function(self.meta), self.result.map(value_function))
    }

    /// Transforms the payload only.
    #[inline]
    pub fn map_meta<N, F>(self, function: F) -> FormResult<N, A>
    where
        F: FnOnce(M) -> N,
    {
        FormResult::new(function(self.meta), self.result)
    }

    // =========================================================================
    // Choice and Combination
    // =========================================================================

    /// Returns `self` if it has a value, otherwise the result of `alternative`.
    ///
    /// `alternative` is only called when `self` has no value. Its payload
    /// replaces `self`'s payload; the two are not merged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form_result::FormResult;
    ///
    /// let seen = FormResult::new("seen", Some(1));
    /// let chosen = seen.alt(|| unreachable!("never evaluated"));
    /// assert_eq!(chosen, FormResult::new("seen", Some(1)));
    ///
    /// let missing = FormResult::new("missing", None);
    /// assert_eq!(missing.alt(|| FormResult::new("fallback", Some(2))), FormResult::new("fallback", Some(2)));
    /// ```
    pub fn alt<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.result.is_some() {
            self
        } else {
            trace_event!(
                value_type = std::any::type_name::<A>(),
                "primary result is empty; evaluating alternative"
            );
            alternative()
        }
    }

    /// Combines two results.
    ///
    /// The payloads are always merged with `merge_meta`. The values are merged
    /// with `merge_value` only when both are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form_result::FormResult;
    ///
    /// let first = FormResult::new(String::from("A"), Some(1));
    /// let second = FormResult::new(String::from("B"), None);
    /// let combined = first.zip_with(second, |m, n| m + &n, |a: i32, b: i32| a + b);
    /// assert_eq!(combined, FormResult::new(String::from("AB"), None));
    /// ```
    pub fn zip_with<N, O, B, C, F, G>(
        self,
        other: FormResult<N, B>,
        merge_meta: F,
        merge_value: G,
    ) -> FormResult<O, C>
    where
        F: FnOnce(M, N) -> O,
        G: FnOnce(A, B) -> C,
    {
        let meta = merge_meta(self.meta, other.meta);
        let result = match (self.result, other.result) {
            (Some(a), Some(b)) => Some(merge_value(a, b)),
            _ => None,
        };
        FormResult::new(meta, result)
    }

    /// Pairs two results, tupling both the payloads and the values.
    #[inline]
    pub fn zip<N, B>(self, other: FormResult<N, B>) -> FormResult<(M, N), (A, B)> {
        self.zip_with(other, |m, n| (m, n), |a, b| (a, b))
    }

    /// Continues with a result computed from the value.
    ///
    /// Without a value the payload is kept and `function` is not called.
    /// With a value, the continuation's result is returned as is and the
    /// current payload is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form_result::FormResult;
    ///
    /// let chained = FormResult::new("X", Some(2)).chain(|n| FormResult::new("Y", Some(n * 10)));
    /// assert_eq!(chained, FormResult::new("Y", Some(20)));
    /// ```
    pub fn chain<B, F>(self, function: F) -> FormResult<M, B>
    where
        F: FnOnce(A) -> FormResult<M, B>,
    {
        match self.result {
            Some(value) => function(value),
            None => FormResult::from_meta(self.meta),
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Runs a fallible conversion on the value.
    ///
    /// `merge_meta` is always applied to the payload. It receives
    /// `Some(error)` only when `function` rejected the value; when there was
    /// no value, or the conversion succeeded, it receives `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form_result::FormResult;
    ///
    /// let positive = |n: i32| if n > 0 { Ok(n) } else { Err("neg") };
    /// let mark = |error: Option<&str>, meta: String| if error.is_some() { meta + "ERR" } else { meta };
    ///
    /// assert_eq!(
    ///     FormResult::new(String::new(), Some(-1)).parse(mark, positive),
    ///     FormResult::new(String::from("ERR"), None)
    /// );
    /// assert_eq!(
    ///     FormResult::new(String::new(), Some(3)).parse(mark, positive),
    ///     FormResult::new(String::new(), Some(3))
    /// );
    /// ```
    pub fn parse<B, E, G, F>(self, merge_meta: G, function: F) -> FormResult<M, B>
    where
        G: FnOnce(Option<E>, M) -> M,
        F: FnOnce(A) -> Result<B, E>,
    {
        match self.result.map(function) {
            None => FormResult::from_meta(merge_meta(None, self.meta)),
            Some(Ok(value)) => FormResult::new(merge_meta(None, self.meta), Some(value)),
            Some(Err(error)) => {
                trace_event!(
                    value_type = std::any::type_name::<A>(),
                    "parse rejected the current value"
                );
                FormResult::from_meta(merge_meta(Some(error), self.meta))
            }
        }
    }

    /// Like [`FormResult::parse`], with `error` reported when `function` returns `None`.
    pub fn parse_opt<B, E, G, F>(self, error: E, merge_meta: G, function: F) -> FormResult<M, B>
    where
        G: FnOnce(Option<E>, M) -> M,
        F: FnOnce(A) -> Option<B>,
    {
        self.parse(merge_meta, |value| function(value).ok_or(error))
    }

    /// Keeps the value only if it satisfies `predicate`, reporting `error` otherwise.
    pub fn filter<E, G, P>(self, error: E, merge_meta: G, predicate: P) -> Self
    where
        G: FnOnce(Option<E>, M) -> M,
        P: FnOnce(&A) -> bool,
    {
        self.parse_opt(error, merge_meta, |value| {
            if predicate(&value) { Some(value) } else { None }
        })
    }

    /// Narrows the value to `B` through `TryFrom`, reporting `error` when the
    /// conversion fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form_result::{FormResult, append_on_error};
    ///
    /// let small: FormResult<Vec<&str>, u8> = FormResult::new(vec![], Some(300_i32))
    ///     .refine("out of range", append_on_error(|error: &'static str| vec![error]));
    /// assert_eq!(small, FormResult::new(vec!["out of range"], None));
    /// ```
    pub fn refine<B, E, G>(self, error: E, merge_meta: G) -> FormResult<M, B>
    where
        B: TryFrom<A>,
        G: FnOnce(Option<E>, M) -> M,
    {
        self.parse_opt(error, merge_meta, |value| B::try_from(value).ok())
    }
}

// =============================================================================
// Monoid-payload Constructors
// =============================================================================

impl<M: Monoid, A> FormResult<M, A> {
    /// A successful result with the empty payload.
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::new(M::empty(), Some(value))
    }

    /// A result with neither diagnostics nor a value.
    #[inline]
    pub fn zero() -> Self {
        Self::new(M::empty(), None)
    }

    /// Lifts an optional value with the empty payload.
    #[inline]
    pub fn from_result(result: Option<A>) -> Self {
        Self::new(M::empty(), result)
    }
}

impl<M: Monoid, A> FormResult<M, Vec<A>> {
    /// Collects many results into one.
    ///
    /// Every payload is merged, in order. The value is present only when
    /// every element had a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form_result::FormResult;
    ///
    /// let fields = vec![
    ///     FormResult::new(vec!["a ok"], Some(1)),
    ///     FormResult::new(vec!["b missing"], None),
    ///     FormResult::new(vec!["c ok"], Some(3)),
    /// ];
    /// let all = FormResult::sequence(fields);
    /// assert_eq!(all, FormResult::new(vec!["a ok", "b missing", "c ok"], None));
    /// ```
    pub fn sequence<I>(results: I) -> Self
    where
        I: IntoIterator<Item = FormResult<M, A>>,
    {
        results
            .into_iter()
            .fold(Self::pure(Vec::new()), |accumulator, element| {
                accumulator.zip_with(element, M::combine, |mut values, value| {
                    values.push(value);
                    values
                })
            })
    }
}

impl<M: Monoid, A> FromIterator<FormResult<M, A>> for FormResult<M, Vec<A>> {
    fn from_iter<I: IntoIterator<Item = FormResult<M, A>>>(iterator: I) -> Self {
        Self::sequence(iterator)
    }
}

// =============================================================================
// Semigroup-payload Application
// =============================================================================

impl<M: Semigroup, A> FormResult<M, A> {
    /// Applies the function held in `self` to the value held in `argument`,
    /// merging both payloads.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form_result::FormResult;
    ///
    /// let function = FormResult::new(String::from("f;"), Some(|n: i32| n * 2));
    /// let applied = function.ap(FormResult::new(String::from("x;"), Some(21)));
    /// assert_eq!(applied, FormResult::new(String::from("f;x;"), Some(42)));
    /// ```
    #[inline]
    pub fn ap<B, C>(self, argument: FormResult<M, B>) -> FormResult<M, C>
    where
        A: FnOnce(B) -> C,
    {
        self.zip_with(argument, M::combine, |function, value| function(value))
    }

    /// Combines two results with `function`, merging both payloads.
    #[inline]
    pub fn map2<B, C, F>(self, other: FormResult<M, B>, function: F) -> FormResult<M, C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, M::combine, function)
    }
}

/// Builds the `merge_meta` callback that appends `render(error)` to the payload
/// on failure and leaves it untouched otherwise.
///
/// # Examples
///
/// ```rust
/// use forms::form_result::{FormResult, append_on_error};
///
/// let merge = append_on_error(|error: &str| format!("[{error}]"));
/// let checked = FormResult::new(String::from("age"), Some(-4))
///     .filter("must be positive", merge, |age| *age > 0);
/// assert_eq!(checked, FormResult::new(String::from("age[must be positive]"), None));
/// ```
pub fn append_on_error<M, E, R>(render: R) -> impl Fn(Option<E>, M) -> M + Clone
where
    M: Semigroup,
    R: Fn(E) -> M + Clone,
{
    move |error, meta| match error {
        Some(error) => meta.combine(render(error)),
        None => meta,
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<M: fmt::Display, A: fmt::Display> fmt::Display for FormResult<M, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Some(value) => write!(
                formatter,
                "FormResult {{ meta: {}, result: Some({value}) }}",
                self.meta
            ),
            None => write!(formatter, "FormResult {{ meta: {}, result: None }}", self.meta),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<M, A> TypeConstructor for FormResult<M, A> {
    type Inner = A;
    type WithType<B> = FormResult<M, B>;
}

impl<M: Clone, A> Functor for FormResult<M, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> FormResult<M, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> FormResult<M, B>
    where
        F: FnOnce(&A) -> B,
    {
        FormResult::new(self.meta.clone(), self.result.as_ref().map(function))
    }
}

impl<M: Monoid + Clone, A> Applicative for FormResult<M, A> {
    #[inline]
    fn pure<B>(value: B) -> FormResult<M, B> {
        FormResult::pure(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: FormResult<M, B>, function: F) -> FormResult<M, C>
    where
        F: FnOnce(A, B) -> C,
    {
        Self::map2(self, other, function)
    }

    fn map3<B, C, D, F>(
        self,
        second: FormResult<M, B>,
        third: FormResult<M, C>,
        function: F,
    ) -> FormResult<M, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Self::map2(self, second, |a, b| (a, b)).map2(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: FormResult<M, B>) -> FormResult<M, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<M: Monoid + Clone, A> Monad for FormResult<M, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> FormResult<M, B>
    where
        F: FnOnce(A) -> FormResult<M, B>,
    {
        self.chain(function)
    }
}

impl<M: Monoid + Clone, A> Alternative for FormResult<M, A> {
    #[inline]
    fn empty<B>() -> FormResult<M, B> {
        FormResult::zero()
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        Self::alt(self, move || alternative)
    }

    fn optional(self) -> FormResult<M, Option<A>> {
        self.map(Some).alt(|| FormResult::pure(None))
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .fold(Self::zero(), |accumulator, candidate| {
                Self::alt(accumulator, move || candidate)
            })
    }
}

impl<M, A> Bifunctor<M, A> for FormResult<M, A> {
    type Target<C, D> = FormResult<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> FormResult<C, D>
    where
        F: FnOnce(M) -> C,
        G: FnOnce(A) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> FormResult<C, D>
    where
        F: FnOnce(&M) -> C,
        G: FnOnce(&A) -> D,
    {
        FormResult::new(
            first_function(&self.meta),
            self.result.as_ref().map(second_function),
        )
    }
}

/// Payloads combine with `M`'s semigroup and values with `Option<A>`'s:
/// two values are combined, a single value is kept.
impl<M: Semigroup, A: Semigroup> Semigroup for FormResult<M, A> {
    fn combine(self, other: Self) -> Self {
        Self::new(
            self.meta.combine(other.meta),
            self.result.combine(other.result),
        )
    }
}

impl<M: Monoid, A: Semigroup> Monoid for FormResult<M, A> {
    fn empty() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::Lens;
    use crate::typeclass::Sum;
    use rstest::rstest;

    fn mark_error(error: Option<&str>, meta: String) -> String {
        if error.is_some() { meta + "ERR" } else { meta }
    }

    fn positive(n: i32) -> Result<i32, &'static str> {
        if n > 0 { Ok(n) } else { Err("neg") }
    }

    #[rstest]
    fn map_increments_value() {
        let result = FormResult::new(String::new(), Some(5)).map(|x| x + 1);
        assert_eq!(result, FormResult::new(String::new(), Some(6)));
    }

    #[rstest]
    fn zip_with_merges_meta_without_values() {
        let combined = FormResult::new(String::from("A"), Some(1)).zip_with(
            FormResult::new(String::from("B"), None),
            |m, n| m + &n,
            |a: i32, b: i32| a + b,
        );
        assert_eq!(combined, FormResult::new(String::from("AB"), None));
    }

    #[rstest]
    #[case(Some(-1), FormResult::new(String::from("ERR"), None))]
    #[case(Some(3), FormResult::new(String::new(), Some(3)))]
    #[case(None, FormResult::new(String::new(), None))]
    fn parse_three_cases(#[case] value: Option<i32>, #[case] expected: FormResult<String, i32>) {
        assert_eq!(FormResult::new(String::new(), value).parse(mark_error, positive), expected);
    }

    #[rstest]
    fn parse_calls_merge_meta_without_value() {
        let counted: FormResult<Sum<u32>, i32> = FormResult::new(Sum(0), None)
            .parse(|_: Option<&str>, meta: Sum<u32>| meta.combine(Sum(1)), positive);
        assert_eq!(counted, FormResult::new(Sum(1), None));
    }

    #[rstest]
    fn parse_opt_reports_default_error() {
        let parsed = FormResult::new(String::new(), Some("x"))
            .parse_opt("not a number", mark_error, |raw: &str| raw.parse::<i32>().ok());
        assert_eq!(parsed, FormResult::new(String::from("ERR"), None));
    }

    #[rstest]
    fn filter_keeps_passing_value() {
        let kept = FormResult::new(String::new(), Some(10)).filter("small", mark_error, |n| *n > 5);
        assert_eq!(kept, FormResult::new(String::new(), Some(10)));
    }

    #[rstest]
    fn refine_narrows_type() {
        let narrowed: FormResult<String, u8> =
            FormResult::new(String::new(), Some(200_i64)).refine("range", mark_error);
        assert_eq!(narrowed, FormResult::new(String::new(), Some(200_u8)));
    }

    #[rstest]
    fn alt_never_evaluates_alternative_on_success() {
        let chosen = FormResult::new("seen", Some(1)).alt(|| {
            panic!("alternative must not be evaluated");
        });
        assert_eq!(chosen, FormResult::new("seen", Some(1)));
    }

    #[rstest]
    fn alt_replaces_meta_on_fallback() {
        let chosen = FormResult::new("first", None).alt(|| FormResult::new("second", None::<i32>));
        assert_eq!(chosen, FormResult::new("second", None));
    }

    #[rstest]
    fn chain_discards_antecedent_meta() {
        let chained = FormResult::new("X", Some(2)).chain(|n| FormResult::new("Y", Some(n * 10)));
        assert_eq!(chained, FormResult::new("Y", Some(20)));
    }

    #[rstest]
    fn chain_keeps_meta_without_value() {
        let chained = FormResult::<_, i32>::new("X", None).chain(|n| FormResult::new("Y", Some(n)));
        assert_eq!(chained, FormResult::new("X", None));
    }

    #[rstest]
    fn ap_merges_in_order() {
        let function = FormResult::new(vec!["f"], Some(|n: i32| n + 1));
        let applied = function.ap(FormResult::new(vec!["x"], Some(1)));
        assert_eq!(applied, FormResult::new(vec!["f", "x"], Some(2)));
    }

    #[rstest]
    fn collect_into_vec_result() {
        let all: FormResult<Vec<&str>, Vec<i32>> = vec![
            FormResult::pure(1),
            FormResult::new(vec!["two"], Some(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(all, FormResult::new(vec!["two"], Some(vec![1, 2])));
    }

    #[rstest]
    fn sequence_of_nothing_is_empty_success() {
        let none: Vec<FormResult<String, i32>> = Vec::new();
        assert_eq!(FormResult::sequence(none), FormResult::pure(Vec::new()));
    }

    #[rstest]
    fn lenses_focus_each_field() {
        let result = FormResult::new(String::from("m"), Some(1));
        assert_eq!(FormResult::<String, i32>::meta_lens().get(&result), "m");
        assert_eq!(FormResult::<String, i32>::result_lens().get(&result), &Some(1));

        let replaced = FormResult::<String, i32>::meta_lens().set(result, String::from("n"));
        assert_eq!(replaced, FormResult::new(String::from("n"), Some(1)));
    }

    #[rstest]
    fn value_optional_is_affine() {
        let value = FormResult::<String, i32>::value_optional();
        let absent = FormResult::from_meta(String::from("m"));
        assert_eq!(value.set(absent.clone(), 9), absent);
        assert_eq!(value.get_option(&absent), None);
    }

    #[rstest]
    #[case(FormResult::new(String::from("ok"), Some(1)), "FormResult { meta: ok, result: Some(1) }")]
    #[case(FormResult::new(String::from("bad"), None), "FormResult { meta: bad, result: None }")]
    fn display_shows_both_fields(#[case] result: FormResult<String, i32>, #[case] expected: &str) {
        assert_eq!(result.to_string(), expected);
    }

    #[rstest]
    fn ordering_compares_meta_then_result() {
        assert!(FormResult::new(1, Some(0)) < FormResult::new(2, None));
        assert!(FormResult::new(1, None::<i32>) < FormResult::new(1, Some(0)));
    }

    #[rstest]
    fn alternative_optional_recovers_absence() {
        let missing: FormResult<String, i32> = FormResult::from_meta(String::from("gone"));
        assert_eq!(missing.optional(), FormResult::pure(None));
    }

    #[rstest]
    fn alternative_choice_picks_first_success() {
        let picked = <FormResult<String, i32> as Alternative>::choice(vec![
            FormResult::from_meta(String::from("a")),
            FormResult::new(String::from("b"), Some(2)),
            FormResult::new(String::from("c"), Some(3)),
        ]);
        assert_eq!(picked, FormResult::new(String::from("b"), Some(2)));
    }

    #[rstest]
    fn semigroup_combines_meta_and_values() {
        let left = FormResult::new(String::from("a"), Some(vec![1]));
        let right = FormResult::new(String::from("b"), None);
        assert_eq!(left.combine(right), FormResult::new(String::from("ab"), Some(vec![1])));
    }
}
