//! Property-based tests for Functor laws.
//!
//! This module verifies that the Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

#![cfg(feature = "data")]

use kleisli::data::{Either, Maybe};
use kleisli::typeclass::Functor;
use proptest::prelude::*;

fn any_maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn any_maybe_string() -> impl Strategy<Value = Maybe<String>> {
    any::<Option<String>>().prop_map(Maybe::from)
}

fn any_either_string_i32() -> impl Strategy<Value = Either<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Either::from)
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Maybe<i32>: fmap with identity function returns the original value
    #[test]
    fn prop_maybe_identity_law(value in any_maybe_i32()) {
        let result = value.fmap(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Maybe<i32>: mapping composed functions equals composing maps
    #[test]
    fn prop_maybe_composition_law(value in any_maybe_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// Identity Law for Maybe<String>
    #[test]
    fn prop_maybe_string_identity_law(value in any_maybe_string()) {
        let result = value.clone().fmap(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Maybe<String>: mapping length then doubling
    #[test]
    fn prop_maybe_string_composition_law(value in any_maybe_string()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// fmap agrees with the inherent map on Maybe
    #[test]
    fn prop_maybe_fmap_agrees_with_map(value in any_maybe_i32()) {
        let by_fmap = value.fmap(|n| n.wrapping_mul(3));
        let by_map = value.map(|n| n.wrapping_mul(3));
        prop_assert_eq!(by_fmap, by_map);
    }
}

// =============================================================================
// Either<L, R> Property Tests
// =============================================================================

proptest! {
    /// Identity Law for Either<String, i32>
    #[test]
    fn prop_either_identity_law(value in any_either_string_i32()) {
        let result = value.clone().fmap(|x| x);
        prop_assert_eq!(result, value);
    }

    /// Composition Law for Either<String, i32>
    #[test]
    fn prop_either_composition_law(value in any_either_string_i32()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    /// fmap never touches the Left channel
    #[test]
    fn prop_either_fmap_preserves_left(error in any::<String>()) {
        let value: Either<String, i32> = Either::Left(error.clone());
        let result = value.fmap(|n| n.wrapping_mul(2));
        prop_assert_eq!(result, Either::Left(error));
    }
}
