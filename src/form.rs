//! Form - a reusable validation from an input to a [`FormResult`].
//!
//! A `Form<I, M, A>` wraps a function `I -> FormResult<M, A>`. It has no state:
//! it can be run any number of times, and every run produces a fresh result.
//! Every [`FormResult`] combinator is available on `Form`, applied to the
//! result of running the form; `ap` and `map2` run both forms on the same
//! input.
//!
//! On top of those, a form can adapt to the shape of a larger input:
//!
//! - [`Form::promap`] / [`Form::contramap`]: read the form's input out of a
//!   different input type
//! - [`Form::first`] / [`Form::second`]: handle one half of a pair and pass the
//!   other half through
//! - [`Form::left`] / [`Form::right`]: handle one branch of an [`Either`] and
//!   pass the other branch through without running the form
//!
//! # Note on Type Classes
//!
//! Like the reader it is modeled on, `Form` provides `map`, `ap`, `map2`,
//! `chain` and friends as inherent methods rather than implementing the
//! `Functor`/`Applicative`/`Monad` traits: the wrapped `Rc<dyn Fn>` needs
//! `'static` bounds the traits do not carry. `Form` does implement
//! [`Semigroup`] and [`Monoid`], pointwise.
//!
//! # Examples
//!
//! ```rust
//! use forms::form::Form;
//! use forms::form_result::{FormResult, append_on_error};
//!
//! #[derive(Clone)]
//! struct Signup {
//!     name: String,
//!     age: String,
//! }
//!
//! fn report(error: String) -> Vec<String> {
//!     vec![error]
//! }
//!
//! let name = Form::asks(|signup: Signup| signup.name).filter(
//!     "name is required".to_string(),
//!     append_on_error(report),
//!     |name: &String| !name.is_empty(),
//! );
//! let age = Form::asks(|signup: Signup| signup.age).parse(
//!     append_on_error(report),
//!     |age: String| age.parse::<u8>().map_err(|_| format!("{age:?} is not an age")),
//! );
//! let signup = name.map2(age, |name, age| format!("{name} ({age})"));
//!
//! let accepted = signup.run(Signup { name: "Ada".into(), age: "36".into() });
//! assert_eq!(accepted, FormResult::pure("Ada (36)".to_string()));
//!
//! let rejected = signup.run(Signup { name: String::new(), age: "old".into() });
//! assert_eq!(
//!     rejected,
//!     FormResult::from_meta(vec![
//!         "name is required".to_string(),
//!         "\"old\" is not an age".to_string(),
//!     ])
//! );
//! ```

use std::fmt;
use std::rc::Rc;

use crate::control::Either;
use crate::form_result::FormResult;
use crate::typeclass::{Monoid, Semigroup};

/// A reusable function from an input `I` to a `FormResult<M, A>`.
///
/// Cloning a form is cheap: clones share the wrapped function.
pub struct Form<I, M, A>
where
    I: 'static,
    M: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(I) -> FormResult<M, A>>,
}

impl<I, M, A> Form<I, M, A>
where
    I: 'static,
    M: 'static,
    A: 'static,
{
    // =========================================================================
    // Construction and Running
    // =========================================================================

    /// Creates a form from a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form::Form;
    /// use forms::form_result::FormResult;
    ///
    /// let form: Form<i32, String, i32> = Form::new(|n| FormResult::new(String::new(), Some(n * 2)));
    /// assert_eq!(form.run(21).result(), Some(&42));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(I) -> FormResult<M, A> + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the form on an input.
    pub fn run(&self, input: I) -> FormResult<M, A> {
        (self.run_function)(input)
    }

    /// A form that ignores its input and always returns `result`.
    pub fn from_form_result(result: FormResult<M, A>) -> Self
    where
        M: Clone,
        A: Clone,
    {
        Self::new(move |_| result.clone())
    }

    /// A form that ignores its input and reports only `meta`.
    pub fn from_meta(meta: M) -> Self
    where
        M: Clone,
    {
        Self::new(move |_| FormResult::from_meta(meta.clone()))
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to the produced value.
    pub fn map<B, F>(self, function: F) -> Form<I, M, B>
    where
        F: Fn(A) -> B + 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input| (original_function)(input).map(&function))
    }

    /// Transforms the produced payload.
    pub fn map_meta<N, F>(self, function: F) -> Form<I, N, A>
    where
        F: Fn(M) -> N + 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input| (original_function)(input).map_meta(&function))
    }

    /// Transforms the produced payload and value independently.
    pub fn bimap<N, B, F, G>(self, meta_function: F, value_function: G) -> Form<I, N, B>
    where
        F: Fn(M) -> N + 'static,
        G: Fn(A) -> B + 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input| (original_function)(input).bimap(&meta_function, &value_function))
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Runs [`FormResult::parse`] on every produced result.
    pub fn parse<B, E, G, F>(self, merge_meta: G, function: F) -> Form<I, M, B>
    where
        G: Fn(Option<E>, M) -> M + 'static,
        F: Fn(A) -> Result<B, E> + 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input| (original_function)(input).parse(&merge_meta, &function))
    }

    /// Runs [`FormResult::parse_opt`] on every produced result.
    pub fn parse_opt<B, E, G, F>(self, error: E, merge_meta: G, function: F) -> Form<I, M, B>
    where
        E: Clone + 'static,
        G: Fn(Option<E>, M) -> M + 'static,
        F: Fn(A) -> Option<B> + 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input| {
            (original_function)(input).parse_opt(error.clone(), &merge_meta, &function)
        })
    }

    /// Runs [`FormResult::filter`] on every produced result.
    pub fn filter<E, G, P>(self, error: E, merge_meta: G, predicate: P) -> Self
    where
        E: Clone + 'static,
        G: Fn(Option<E>, M) -> M + 'static,
        P: Fn(&A) -> bool + 'static,
    {
        let original_function = self.run_function;
        Self::new(move |input| {
            (original_function)(input).filter(error.clone(), &merge_meta, &predicate)
        })
    }

    /// Runs [`FormResult::refine`] on every produced result.
    pub fn refine<B, E, G>(self, error: E, merge_meta: G) -> Form<I, M, B>
    where
        B: TryFrom<A>,
        E: Clone + 'static,
        G: Fn(Option<E>, M) -> M + 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input| (original_function)(input).refine(error.clone(), &merge_meta))
    }

    // =========================================================================
    // Choice and Sequencing
    // =========================================================================

    /// Runs `self`, and only when it produces no value runs the form built by
    /// `alternative` on the same input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form::Form;
    /// use forms::form_result::FormResult;
    ///
    /// let from_flag: Form<&str, String, bool> = Form::new(|raw: &str| match raw {
    ///     "on" => FormResult::pure(true),
    ///     _ => FormResult::from_meta(format!("{raw:?} is not a flag")),
    /// });
    /// let default_off = from_flag.alt(|| Form::pure(false));
    ///
    /// assert_eq!(default_off.run("on"), FormResult::pure(true));
    /// assert_eq!(default_off.run("maybe"), FormResult::pure(false));
    /// ```
    pub fn alt<F>(self, alternative: F) -> Self
    where
        I: Clone,
        F: Fn() -> Self + 'static,
    {
        let original_function = self.run_function;
        Self::new(move |input: I| {
            (original_function)(input.clone()).alt(|| alternative().run(input))
        })
    }

    /// Runs `self`, then the form chosen from its value on the same input.
    ///
    /// As with [`FormResult::chain`], the first payload is discarded when a
    /// value was produced.
    pub fn chain<B, F>(self, function: F) -> Form<I, M, B>
    where
        I: Clone,
        F: Fn(A) -> Form<I, M, B> + 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input: I| {
            (original_function)(input.clone()).chain(|value| function(value).run(input))
        })
    }

    // =========================================================================
    // Input Adaptation
    // =========================================================================

    /// Reads the input from a `J` and maps the produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::form::Form;
    ///
    /// let length: Form<String, String, usize> = Form::asks(|text: String| text.len());
    /// let shout = length.promap(|n: u32| "!".repeat(n as usize), |len| len * 10);
    /// assert_eq!(shout.run(3).result(), Some(&30));
    /// ```
    pub fn promap<J, B, F, G>(self, input_function: F, value_function: G) -> Form<J, M, B>
    where
        F: Fn(J) -> I + 'static,
        G: Fn(A) -> B + 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input| (original_function)(input_function(input)).map(&value_function))
    }

    /// Reads the input from a `J`.
    pub fn contramap<J, F>(self, input_function: F) -> Form<J, M, A>
    where
        F: Fn(J) -> I + 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input| (original_function)(input_function(input)))
    }

    /// Runs the form on the first half of a pair, passing the second half
    /// through next to the produced value.
    pub fn first<C>(self) -> Form<(I, C), M, (A, C)>
    where
        C: 'static,
    {
        let original_function = self.run_function;
        Form::new(move |(input, passed): (I, C)| {
            (original_function)(input).map(move |value| (value, passed))
        })
    }

    /// Runs the form on the second half of a pair, passing the first half
    /// through next to the produced value.
    pub fn second<C>(self) -> Form<(C, I), M, (C, A)>
    where
        C: 'static,
    {
        let original_function = self.run_function;
        Form::new(move |(passed, input): (C, I)| {
            (original_function)(input).map(move |value| (passed, value))
        })
    }
}

// =============================================================================
// Monoid-payload Operations
// =============================================================================

impl<I, M, A> Form<I, M, A>
where
    I: 'static,
    M: Monoid + 'static,
    A: 'static,
{
    /// A form that ignores its input and succeeds with `value`.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| FormResult::pure(value.clone()))
    }

    /// A form that ignores its input and produces neither payload nor value.
    pub fn zero() -> Self {
        Self::new(|_| FormResult::zero())
    }

    /// A form that ignores its input and produces `result` with the empty payload.
    pub fn from_result(result: Option<A>) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| FormResult::from_result(result.clone()))
    }

    /// A form succeeding with a projection of its input.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(I) -> A + 'static,
    {
        Self::new(move |input| FormResult::pure(projection(input)))
    }

    /// Runs the form on the left branch of an [`Either`]; a right input is
    /// passed through as a successful `Right` without running the form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use forms::control::Either;
    /// use forms::form::Form;
    /// use forms::form_result::FormResult;
    ///
    /// let email: Form<String, Vec<String>, String> = Form::asks(|raw: String| raw.to_lowercase());
    /// let contact = email.left::<u64>();
    ///
    /// assert_eq!(
    ///     contact.run(Either::Left("Ada@Example.com".to_string())),
    ///     FormResult::pure(Either::Left("ada@example.com".to_string()))
    /// );
    /// assert_eq!(contact.run(Either::Right(5_550_100)), FormResult::pure(Either::Right(5_550_100)));
    /// ```
    pub fn left<C>(self) -> Form<Either<I, C>, M, Either<A, C>>
    where
        C: 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input: Either<I, C>| match input {
            Either::Left(input) => (original_function)(input).map(Either::Left),
            Either::Right(passed) => FormResult::pure(Either::Right(passed)),
        })
    }

    /// Runs the form on the right branch of an [`Either`]; a left input is
    /// passed through as a successful `Left` without running the form.
    pub fn right<C>(self) -> Form<Either<C, I>, M, Either<C, A>>
    where
        C: 'static,
    {
        let original_function = self.run_function;
        Form::new(move |input: Either<C, I>| match input {
            Either::Left(passed) => FormResult::pure(Either::Left(passed)),
            Either::Right(input) => (original_function)(input).map(Either::Right),
        })
    }
}

impl<I, M> Form<I, M, I>
where
    I: 'static,
    M: Monoid + 'static,
{
    /// A form succeeding with its own input.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(FormResult::pure)
    }
}

// =============================================================================
// Semigroup-payload Combination
// =============================================================================

impl<I, M, A> Form<I, M, A>
where
    I: Clone + 'static,
    M: Semigroup + 'static,
    A: 'static,
{
    /// Runs both forms on the same input and applies the function produced by
    /// `self` to the value produced by `argument`, merging both payloads.
    #[must_use]
    pub fn ap<B, C>(self, argument: Form<I, M, B>) -> Form<I, M, C>
    where
        A: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
    {
        self.map2(argument, |function, value| function(value))
    }

    /// Runs both forms on the same input and combines their values with
    /// `function`, merging both payloads.
    pub fn map2<B, C, F>(self, other: Form<I, M, B>, function: F) -> Form<I, M, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Form::new(move |input: I| {
            let first = (self_function)(input.clone());
            let second = (other_function)(input);
            first.map2(second, &function)
        })
    }

    /// Runs both forms on the same input and pairs their values.
    #[must_use]
    pub fn product<B>(self, other: Form<I, M, B>) -> Form<I, M, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Clone, Display and Debug
// =============================================================================

impl<I, M, A> Clone for Form<I, M, A>
where
    I: 'static,
    M: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<I, M, A> fmt::Display for Form<I, M, A>
where
    I: 'static,
    M: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Form>")
    }
}

impl<I, M, A> fmt::Debug for Form<I, M, A>
where
    I: 'static,
    M: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Form").finish_non_exhaustive()
    }
}

// =============================================================================
// Semigroup and Monoid
// =============================================================================

/// Runs both forms on the same input and combines their results.
impl<I, M, A> Semigroup for Form<I, M, A>
where
    I: Clone + 'static,
    M: Semigroup + 'static,
    A: Semigroup + 'static,
{
    fn combine(self, other: Self) -> Self {
        let self_function = self.run_function;
        let other_function = other.run_function;
        Self::new(move |input: I| {
            (self_function)(input.clone()).combine((other_function)(input))
        })
    }
}

impl<I, M, A> Monoid for Form<I, M, A>
where
    I: Clone + 'static,
    M: Monoid + 'static,
    A: Semigroup + 'static,
{
    fn empty() -> Self {
        Self::zero()
    }
}
