//! Property-based tests for the laws `Form` satisfies.
//!
//! Forms are compared by running both sides on the same generated input and
//! comparing the resulting `FormResult`s.
//!
//! ## Functor
//! - `map(id) == id`, `map(g . f) == map(f).map(g)`
//!
//! ## Applicative
//! - Identity, homomorphism, `map(f) == pure(f).ap(_)`
//!
//! ## Alt / Alternative
//! - Associativity, identities of `zero` on lifted forms
//!
//! ## Profunctor / Strong / Choice
//! - `promap(id, id) == id`, composition of `promap`
//! - `first().map(fst) == contramap(fst)`, `left` agrees with `run` on `Left`
//!
//! ## Semigroup / Monoid
//! - Pointwise associativity and identity

use forms::control::Either;
use forms::form::Form;
use forms::form_result::FormResult;
use forms::typeclass::{Monoid, Semigroup};
use proptest::prelude::*;

type Diagnostics = Vec<String>;

/// A form whose behaviour depends on its input: it rejects inputs divisible
/// by `modulus` and otherwise offsets them.
fn input_dependent(modulus: i32, offset: i32) -> Form<i32, Diagnostics, i32> {
    Form::new(move |input: i32| {
        if input % modulus == 0 {
            FormResult::from_meta(vec![format!("{input} is divisible by {modulus}")])
        } else {
            FormResult::new(vec![format!("saw {input}")], Some(input.wrapping_add(offset)))
        }
    })
}

fn form_strategy() -> impl Strategy<Value = Form<i32, Diagnostics, i32>> {
    (2i32..6, -10i32..10).prop_map(|(modulus, offset)| input_dependent(modulus, offset))
}

/// Forms built only from `pure` and `zero`.
fn lifted_form_strategy() -> impl Strategy<Value = Form<i32, Diagnostics, i32>> {
    proptest::option::of(-10i32..10).prop_map(Form::from_result)
}

fn text_form(modulus: i32) -> Form<i32, Diagnostics, String> {
    input_dependent(modulus, 0).map(|value| value.to_string())
}

// =============================================================================
// Functor
// =============================================================================

proptest! {
    #[test]
    fn prop_form_functor_identity(form in form_strategy(), input in -100i32..100) {
        prop_assert_eq!(form.clone().map(|x| x).run(input), form.run(input));
    }

    #[test]
    fn prop_form_functor_composition(form in form_strategy(), input in -100i32..100) {
        let function1 = |x: i32| x.wrapping_mul(3);
        let function2 = |x: i32| x.to_string();

        let left = form.clone().map(function1).map(function2);
        let right = form.map(move |x| function2(function1(x)));
        prop_assert_eq!(left.run(input), right.run(input));
    }
}

// =============================================================================
// Applicative
// =============================================================================

proptest! {
    #[test]
    fn prop_form_applicative_identity(form in form_strategy(), input in -100i32..100) {
        let identity: Form<i32, Diagnostics, fn(i32) -> i32> = Form::pure(|x| x);
        prop_assert_eq!(identity.ap(form.clone()).run(input), form.run(input));
    }

    #[test]
    fn prop_form_applicative_homomorphism(value in -100i32..100, input in -100i32..100) {
        let function: fn(i32) -> i32 = |x| x.wrapping_sub(1);
        let left: Form<i32, Diagnostics, i32> = Form::pure(function).ap(Form::pure(value));
        let right: Form<i32, Diagnostics, i32> = Form::pure(function(value));
        prop_assert_eq!(left.run(input), right.run(input));
    }

    #[test]
    fn prop_form_map_is_pure_ap(form in form_strategy(), input in -100i32..100) {
        let function: fn(i32) -> i32 = |x| x.wrapping_add(2);
        let left = form.clone().map(function);
        let right = Form::pure(function).ap(form);
        prop_assert_eq!(left.run(input), right.run(input));
    }

    #[test]
    fn prop_form_map2_is_pointwise(first in form_strategy(), second in form_strategy(), input in -100i32..100) {
        let expected = first.run(input).map2(second.run(input), i32::wrapping_add);
        let combined = first.map2(second, i32::wrapping_add);
        prop_assert_eq!(combined.run(input), expected);
    }
}

// =============================================================================
// Alt / Alternative
// =============================================================================

proptest! {
    #[test]
    fn prop_form_alt_associativity(
        first in form_strategy(),
        second in form_strategy(),
        third in form_strategy(),
        input in -100i32..100
    ) {
        let (second_clone, third_clone) = (second.clone(), third.clone());
        let left = first.clone()
            .alt(move || second_clone.clone())
            .alt(move || third_clone.clone());
        let right = first.alt(move || {
            let third = third.clone();
            second.clone().alt(move || third.clone())
        });
        prop_assert_eq!(left.run(input), right.run(input));
    }

    #[test]
    fn prop_form_zero_left_identity(form in form_strategy(), input in -100i32..100) {
        let alternative = form.clone();
        let left = Form::zero().alt(move || alternative.clone());
        prop_assert_eq!(left.run(input), form.run(input));
    }

    #[test]
    fn prop_form_zero_right_identity(form in lifted_form_strategy(), input in -100i32..100) {
        let right = form.clone().alt(Form::zero);
        prop_assert_eq!(right.run(input), form.run(input));
    }
}

// =============================================================================
// Profunctor / Strong / Choice
// =============================================================================

proptest! {
    #[test]
    fn prop_promap_identity(form in form_strategy(), input in -100i32..100) {
        let mapped = form.clone().promap(|x: i32| x, |a| a);
        prop_assert_eq!(mapped.run(input), form.run(input));
    }

    #[test]
    fn prop_promap_composition(form in form_strategy(), input in -100i32..100) {
        let before1 = |x: i64| i32::try_from(x).unwrap_or(0);
        let before2 = |x: i16| i64::from(x) * 2;
        let after1 = |a: i32| i64::from(a) + 1;
        let after2 = |a: i64| a.to_string();

        let left = form.clone().promap(before1, after1).promap(before2, after2);
        let right = form.promap(move |x: i16| before1(before2(x)), move |a| after2(after1(a)));
        let input = i16::try_from(input).unwrap_or(0);
        prop_assert_eq!(left.run(input), right.run(input));
    }

    #[test]
    fn prop_first_then_project_is_contramap(form in form_strategy(), input in -100i32..100, passed in any::<u8>()) {
        let left = form.clone().first::<u8>().map(|(value, _)| value);
        let right = form.contramap(|(input, _): (i32, u8)| input);
        prop_assert_eq!(left.run((input, passed)), right.run((input, passed)));
    }

    #[test]
    fn prop_second_keeps_passed_component(form in form_strategy(), input in -100i32..100, passed in any::<u8>()) {
        let result = form.clone().second::<u8>().run((passed, input));
        let expected = form.run(input).map(|value| (passed, value));
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_left_runs_only_on_left(form in form_strategy(), input in -100i32..100, passed in any::<char>()) {
        let choice = form.clone().left::<char>();
        prop_assert_eq!(choice.run(Either::Left(input)), form.run(input).map(Either::Left));
        prop_assert_eq!(choice.run(Either::Right(passed)), FormResult::pure(Either::Right(passed)));
    }

    #[test]
    fn prop_right_runs_only_on_right(form in form_strategy(), input in -100i32..100, passed in any::<char>()) {
        let choice = form.clone().right::<char>();
        prop_assert_eq!(choice.run(Either::Right(input)), form.run(input).map(Either::Right));
        prop_assert_eq!(choice.run(Either::Left(passed)), FormResult::pure(Either::Left(passed)));
    }
}

// =============================================================================
// Semigroup / Monoid
// =============================================================================

proptest! {
    #[test]
    fn prop_form_semigroup_associativity(
        first in 2i32..6,
        second in 2i32..6,
        third in 2i32..6,
        input in -100i32..100
    ) {
        let left = text_form(first).combine(text_form(second)).combine(text_form(third));
        let right = text_form(first).combine(text_form(second).combine(text_form(third)));
        prop_assert_eq!(left.run(input), right.run(input));
    }

    #[test]
    fn prop_form_monoid_identity(modulus in 2i32..6, input in -100i32..100) {
        let left = Form::empty().combine(text_form(modulus));
        let right = text_form(modulus).combine(Form::empty());
        prop_assert_eq!(left.run(input), text_form(modulus).run(input));
        prop_assert_eq!(right.run(input), text_form(modulus).run(input));
    }
}
