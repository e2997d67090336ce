//! Property-based tests for Semigroup and Monoid laws.
//!
//! This module verifies the algebraic structure of the library types:
//!
//! - **Associativity**: `(a.combine(b)).combine(c) == a.combine(b.combine(c))`
//! - **Monoid identity**: `T::empty().combine(a) == a == a.combine(T::empty())`
//! - **Left absorption for Either**: combining a `Left` with a `Right` in
//!   either order yields that `Left`, unchanged.

#![cfg(feature = "data")]

use kleisli::data::{Either, Maybe};
use kleisli::typeclass::{Monoid, Semigroup};
use proptest::prelude::*;

fn any_maybe_string() -> impl Strategy<Value = Maybe<String>> {
    any::<Option<String>>().prop_map(Maybe::from)
}

fn any_either_string_string() -> impl Strategy<Value = Either<String, String>> {
    prop::result::maybe_ok(any::<String>(), any::<String>()).prop_map(Either::from)
}

// =============================================================================
// Payload Algebras (String, Vec)
// =============================================================================

proptest! {
    /// Associativity law for String
    #[test]
    fn prop_string_associativity_law(a in any::<String>(), b in any::<String>(), c in any::<String>()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    /// Identity laws for the String monoid
    #[test]
    fn prop_string_identity_laws(a in any::<String>()) {
        prop_assert_eq!(String::empty().combine(a.clone()), a.clone());
        prop_assert_eq!(a.clone().combine(String::empty()), a);
    }

    /// Associativity law for Vec<i32>
    #[test]
    fn prop_vec_associativity_law(
        a in any::<Vec<i32>>(),
        b in any::<Vec<i32>>(),
        c in any::<Vec<i32>>(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Maybe<A> Algebra
// =============================================================================

proptest! {
    /// Associativity law for Maybe<String>
    #[test]
    fn prop_maybe_associativity_law(
        a in any_maybe_string(),
        b in any_maybe_string(),
        c in any_maybe_string(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    /// Nothing is the identity element of the Maybe monoid
    #[test]
    fn prop_maybe_nothing_is_identity(a in any_maybe_string()) {
        prop_assert_eq!(<Maybe<String>>::empty().combine(a.clone()), a.clone());
        prop_assert_eq!(a.clone().combine(<Maybe<String>>::empty()), a);
    }

    /// Combining two Just values combines their payloads
    #[test]
    fn prop_maybe_just_combines_payloads(a in any::<String>(), b in any::<String>()) {
        let combined = Maybe::Just(a.clone()).combine(Maybe::Just(b.clone()));
        prop_assert_eq!(combined, Maybe::Just(a.combine(b)));
    }
}

// =============================================================================
// Either<L, R> Algebra
// =============================================================================

proptest! {
    /// Associativity law for Either<String, String>
    #[test]
    fn prop_either_associativity_law(
        a in any_either_string_string(),
        b in any_either_string_string(),
        c in any_either_string_string(),
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    /// Combining two Rights combines their payloads and stays Right
    #[test]
    fn prop_either_right_combines_payloads(a in any::<String>(), b in any::<String>()) {
        let combined = Either::<String, String>::Right(a.clone())
            .combine(Either::Right(b.clone()));
        prop_assert_eq!(combined, Either::Right(a.combine(b)));
    }

    /// Combining two Lefts combines their payloads and stays Left
    #[test]
    fn prop_either_left_combines_payloads(a in any::<String>(), b in any::<String>()) {
        let combined = Either::<String, String>::Left(a.clone())
            .combine(Either::Left(b.clone()));
        prop_assert_eq!(combined, Either::Left(a.combine(b)));
    }

    /// A Left absorbs a Right in either order, unchanged
    #[test]
    fn prop_either_left_absorbs_right(error in any::<String>(), success in any::<String>()) {
        let left: Either<String, String> = Either::Left(error.clone());
        let right: Either<String, String> = Either::Right(success);

        prop_assert_eq!(
            left.clone().combine(right.clone()),
            Either::Left(error.clone()),
        );
        prop_assert_eq!(right.combine(left), Either::Left(error));
    }
}

// =============================================================================
// Combining Helpers
// =============================================================================

#[test]
fn combine_all_collapses_maybes_from_identity() {
    let values = vec![
        Maybe::Just("a".to_string()),
        Maybe::Nothing,
        Maybe::Just("b".to_string()),
    ];
    assert_eq!(
        <Maybe<String>>::combine_all(values),
        Maybe::Just("ab".to_string()),
    );
}

#[test]
fn reduce_all_of_eithers_keeps_first_left_payloads_combined() {
    let values: Vec<Either<String, String>> = vec![
        Either::Right("ok".to_string()),
        Either::Left("first".to_string()),
        Either::Left("second".to_string()),
    ];
    assert_eq!(
        <Either<String, String>>::reduce_all(values),
        Some(Either::Left("firstsecond".to_string())),
    );
}
