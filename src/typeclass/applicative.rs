//! Applicative type class - applying functions within a context.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to lift pure values into the context and to combine multiple
//! independent computations.
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Applicative;
//! use kleisli::data::Maybe;
//!
//! // Pure lifts a value into the context
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::Just(42));
//!
//! // map2 combines two values
//! let a = Maybe::Just(1);
//! let b = Maybe::Just(2);
//! let sum = a.map2(b, |x, y| x + y);
//! assert_eq!(sum, Maybe::Just(3));
//! ```

use super::functor::Functor;

/// A type class for functors that support lifting values and combining
/// independent computations.
///
/// `Applicative` sits between `Functor` and `Monad` in the hierarchy: it can
/// combine multiple computations, but unlike `Monad` no computation can
/// depend on the result of another.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Applicative;
/// use kleisli::data::{Either, Maybe};
///
/// let sum = Maybe::Just(3).map2(Maybe::Just(4), |x, y| x + y);
/// assert_eq!(sum, Maybe::Just(7));
///
/// // For Either, the first Left wins
/// let first: Either<String, i32> = Either::Left("first".to_string());
/// let second: Either<String, i32> = Either::Left("second".to_string());
/// assert_eq!(
///     first.map2(second, |x, y| x + y),
///     Either::Left("first".to_string()),
/// );
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to lift into the context
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::data::{Either, Maybe};
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::Just(42));
    ///
    /// let y: Either<String, i32> = <Either<String, ()>>::pure(42);
    /// assert_eq!(y, Either::Right(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// This is the primary way to combine multiple independent computations
    /// within an applicative context. If either computation fails (in the
    /// sense appropriate to the specific applicative), the result fails.
    ///
    /// # Arguments
    ///
    /// * `other` - The second applicative value
    /// * `function` - A function that takes both inner values and produces a result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::data::Maybe;
    ///
    /// let a = Maybe::Just(1);
    /// let b = Maybe::Just(2);
    /// assert_eq!(a.map2(b, |x, y| x + y), Maybe::Just(3));
    ///
    /// let a = Maybe::Just(1);
    /// let b: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(a.map2(b, |x, y| x + y), Maybe::Nothing);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::data::Maybe;
    ///
    /// let a = Maybe::Just(1);
    /// let b = Maybe::Just(2);
    /// let c = Maybe::Just(3);
    /// assert_eq!(a.map3(b, c, |x, y, z| x + y + z), Maybe::Just(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::data::Maybe;
    ///
    /// let a = Maybe::Just(1);
    /// let b = Maybe::Just("hello");
    /// assert_eq!(a.product(b), Maybe::Just((1, "hello")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::data::Maybe;
    ///
    /// let a = Maybe::Just(1);
    /// let b = Maybe::Just(2);
    /// assert_eq!(a.product_left(b), Maybe::Just(1));
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::data::Maybe;
    ///
    /// let a = Maybe::Just(1);
    /// let b = Maybe::Just(2);
    /// assert_eq!(a.product_right(b), Maybe::Just(2));
    ///
    /// let a: Maybe<i32> = Maybe::Nothing;
    /// let b = Maybe::Just(2);
    /// assert_eq!(a.product_right(b), Maybe::Nothing);
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// This method is available when `Self` contains a function type. It applies
    /// the contained function to the value in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    /// use kleisli::data::Maybe;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::Just(|x| x + 1);
    /// let value = Maybe::Just(5);
    /// assert_eq!(function.apply(value), Maybe::Just(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}
