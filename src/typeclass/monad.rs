//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! the ability to sequence computations where each step can depend on the
//! result of the previous step.
//!
//! A `Monad` is one of the most powerful abstractions in functional programming,
//! often described as a "programmable semicolon" because it controls how
//! computations are sequenced.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! Lifting a pure value and binding a function is the same as applying the function:
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! Binding `pure` to a monad returns the original monad:
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! The order of binding operations can be reassociated:
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Monad;
//! use kleisli::data::Maybe;
//!
//! // Using flat_map to chain Maybe computations
//! let x = Maybe::Just(5);
//! let y = x.flat_map(|n| if n > 0 { Maybe::Just(n * 2) } else { Maybe::Nothing });
//! assert_eq!(y, Maybe::Just(10));
//!
//! // Chain of computations with potential failure
//! fn parse_positive(s: &str) -> Maybe<i32> {
//!     Maybe::from_option(s.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::Just("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::Just(n * 2));
//! assert_eq!(result, Maybe::Just(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`, which allows the result
/// of one computation to determine what computation to perform next.
/// This enables short-circuiting chains: once a terminal variant is reached
/// (`Nothing`, `Left`), downstream computations are skipped.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Monad;
/// use kleisli::data::Either;
///
/// let x: Either<String, i32> = Either::Right(1);
/// let result = x
///     .flat_map(|_| Either::Left("Error".to_string()))
///     .flat_map(|b: i32| Either::<String, i32>::Right(b + 1));
/// assert_eq!(result, Either::Left("Error".to_string()));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// This is the fundamental operation of the Monad type class. It takes a
    /// function that returns a new monad and "flattens" the nested result.
    ///
    /// In Haskell, this is `>>=` (bind). In Rust's standard library, this is
    /// similar to `and_then` on `Option` and `Result`.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns a new monad
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    /// use kleisli::data::Maybe;
    ///
    /// let x = Maybe::Just(5);
    /// let y = x.flat_map(|n| Maybe::Just(n * 2));
    /// assert_eq!(y, Maybe::Just(10));
    ///
    /// let z = Maybe::Just(5);
    /// let w = z.flat_map(|n| if n > 10 { Maybe::Just(n) } else { Maybe::Nothing });
    /// assert_eq!(w, Maybe::Nothing);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    ///
    /// This method is provided for familiarity with Rust's `Option::and_then`
    /// and `Result::and_then` methods.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    /// use kleisli::data::Maybe;
    ///
    /// let x = Maybe::Just(5);
    /// let y = x.and_then(|n| Maybe::Just(n * 2));
    /// assert_eq!(y, Maybe::Just(10));
    /// ```
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// This evaluates `self`, ignores its value, and returns `next`.
    /// In Haskell, this is the `>>` operator.
    ///
    /// Note: If `self` represents a failure (e.g., `Nothing` or `Left`),
    /// the failure propagates and `next` is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Monad;
    /// use kleisli::data::Maybe;
    ///
    /// let x = Maybe::Just(5);
    /// let y = x.then(Maybe::Just("hello"));
    /// assert_eq!(y, Maybe::Just("hello"));
    ///
    /// let z: Maybe<i32> = Maybe::Nothing;
    /// let w = z.then(Maybe::Just("hello"));
    /// assert_eq!(w, Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

#[cfg(all(test, feature = "data"))]
mod tests {
    use super::*;
    use crate::data::{Either, Maybe};
    use rstest::rstest;

    // =========================================================================
    // Maybe<A> Tests
    // =========================================================================

    #[rstest]
    fn maybe_flat_map_just() {
        let result = Maybe::Just(1).flat_map(|a| Maybe::Just(a + 1));
        assert_eq!(result, Maybe::Just(2));
    }

    #[rstest]
    fn maybe_flat_map_nothing() {
        let nothing: Maybe<i32> = Maybe::Nothing;
        let result = nothing.flat_map(|a| Maybe::Just(a + 1));
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn maybe_then_discards_first_value() {
        assert_eq!(Maybe::Just(5).then(Maybe::Just("hello")), Maybe::Just("hello"));

        let nothing: Maybe<i32> = Maybe::Nothing;
        assert_eq!(nothing.then(Maybe::Just("hello")), Maybe::Nothing);
    }

    // =========================================================================
    // Either<L, R> Tests
    // =========================================================================

    #[rstest]
    fn either_flat_map_short_circuits_on_left() {
        let result: Either<String, i32> = Either::Right(1)
            .flat_map(|_| Either::Left("Error".to_string()))
            .flat_map(|b: i32| Either::Right(b + 1));
        assert_eq!(result, Either::Left("Error".to_string()));
    }

    #[rstest]
    fn either_flat_map_chains_rights() {
        let result: Either<String, i32> = Either::Right(1)
            .flat_map(|a| Either::Right(a + 1))
            .flat_map(|b| Either::Right(b * 10));
        assert_eq!(result, Either::Right(20));
    }

    // =========================================================================
    // Law Tests (Unit Tests)
    // =========================================================================

    /// Left identity: pure(a).flat_map(f) == f(a)
    #[rstest]
    fn maybe_left_identity_law() {
        let function = |n: i32| Maybe::Just(n + 1);
        let left = <Maybe<()>>::pure(5).flat_map(function);
        assert_eq!(left, function(5));
    }

    /// Right identity: m.flat_map(pure) == m
    #[rstest]
    fn maybe_right_identity_law() {
        let just_value = Maybe::Just(5);
        assert_eq!(just_value.flat_map(<Maybe<i32>>::pure), just_value);

        let nothing_value: Maybe<i32> = Maybe::Nothing;
        assert_eq!(nothing_value.flat_map(<Maybe<i32>>::pure), nothing_value);
    }

    /// Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
    #[rstest]
    fn maybe_associativity_law() {
        let function1 = |n: i32| Maybe::Just(n + 1);
        let function2 = |n: i32| Maybe::Just(n * 2);

        let left = Maybe::Just(5).flat_map(function1).flat_map(function2);
        let right = Maybe::Just(5).flat_map(|x| function1(x).flat_map(function2));

        assert_eq!(left, right);
    }

    #[rstest]
    fn either_left_identity_law() {
        let function = |n: i32| Either::<String, i32>::Right(n + 1);
        let left = <Either<String, ()>>::pure(5).flat_map(function);
        assert_eq!(left, function(5));
    }

    #[rstest]
    fn either_associativity_law() {
        let function1 = |n: i32| Either::<String, i32>::Right(n + 1);
        let function2 = |n: i32| {
            if n > 10 {
                Either::<String, i32>::Left("too large".to_string())
            } else {
                Either::Right(n * 2)
            }
        };

        let left = Either::<String, i32>::Right(5)
            .flat_map(function1)
            .flat_map(function2);
        let right =
            Either::<String, i32>::Right(5).flat_map(|x| function1(x).flat_map(function2));

        assert_eq!(left, right);
    }
}
