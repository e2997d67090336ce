//! Either type - a disjoint union with an error channel and a success channel.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. By convention the type is
//! right-biased: `Left` carries errors or failures, `Right` carries
//! successes, and the combinators (`map`, `flat_map`, `get_or_else`, ...)
//! operate on the `Right` channel while passing `Left` through unchanged.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::data::Either;
//!
//! // Creating Either values
//! let failure: Either<String, i32> = Either::Left("error".to_string());
//! let success: Either<String, i32> = Either::Right(42);
//!
//! // Right-biased mapping
//! assert_eq!(success.map(|x| x * 2), Either::Right(84));
//!
//! // Using fold to handle both cases
//! let result = failure.fold(
//!     |error| format!("failed: {}", error),
//!     |value| format!("succeeded: {}", value),
//! );
//! assert_eq!(result, "failed: error");
//! ```

use std::fmt;

use super::maybe::Maybe;
use crate::typeclass::{
    Applicative, Bifunctor, Foldable, Functor, Monad, Semigroup, TypeConstructor,
};

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` represents failure, error, or the first alternative
/// - `Right` represents success or the second alternative
///
/// The combinators are biased toward `Right`: `map` and `flat_map` transform
/// the success channel and short-circuit on `Left`. The `Left` channel is
/// reached through `map_left`, `bimap`, `swap`, `get_or_handle`, and `fold`.
///
/// # Type Parameters
///
/// * `L` - The type of the left (error) value
/// * `R` - The type of the right (success) value
///
/// # Examples
///
/// ```rust
/// use kleisli::data::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// // Map over the right value
/// let doubled = success.map(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
///
/// // Left passes through untouched
/// let doubled = failure.map(|x| x * 2);
/// assert_eq!(doubled, Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the first alternative.
    Left(L),
    /// The right variant, conventionally representing success or the second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Constructs an `Either` from a boolean test, ternary style.
    ///
    /// Returns `Right(if_true())` when `test` holds, `Left(if_false())`
    /// otherwise. Only the selected thunk is evaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let accepted: Either<String, i32> = Either::cond(true, || 42, || "rejected".to_string());
    /// assert_eq!(accepted, Either::Right(42));
    ///
    /// let rejected: Either<String, i32> = Either::cond(false, || 42, || "rejected".to_string());
    /// assert_eq!(rejected, Either::Left("rejected".to_string()));
    /// ```
    #[inline]
    pub fn cond<T, F>(test: bool, if_true: T, if_false: F) -> Self
    where
        T: FnOnce() -> R,
        F: FnOnce() -> L,
    {
        if test {
            Self::Right(if_true())
        } else {
            Self::Left(if_false())
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into a `Maybe<L>`, consuming the either.
    ///
    /// Returns `Just(l)` if this is `Left(l)`, otherwise `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::{Either, Maybe};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Maybe::Just(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Converts into a `Maybe<R>`, consuming the either.
    ///
    /// Returns `Just(r)` if this is `Right(r)`, otherwise `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::{Either, Maybe};
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Maybe::Just("hello".to_string()));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.right(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Returns the right value, or a lazily computed default.
    ///
    /// The default is only evaluated when this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.get_or_else(|| 0), 42);
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(left.get_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else<D>(self, default: D) -> R
    where
        D: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => default(),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, or maps the left value through a handler.
    ///
    /// Unlike [`Either::get_or_else`], the handler receives the `Left`
    /// payload, so the recovery value can depend on the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let right: Either<String, usize> = Either::Right(42);
    /// assert_eq!(right.get_or_handle(|error| error.len()), 42);
    ///
    /// let left: Either<String, usize> = Either::Left("error".to_string());
    /// assert_eq!(left.get_or_handle(|error| error.len()), 5);
    /// ```
    #[inline]
    pub fn get_or_handle<H>(self, handle: H) -> R
    where
        H: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => handle(value),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_left(|x: i32| x * 2), Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.bimap(|x| x * 2, |s: String| s.len());
    /// assert_eq!(result, Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.bimap(|x: i32| x * 2, |s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Applies a function returning an `Either` to the right value and
    /// flattens the result.
    ///
    /// This enables short-circuiting chains: once a `Left` is reached,
    /// downstream functions are not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let result: Either<String, i32> = Either::Right(1)
    ///     .flat_map(|_| Either::Left("Error".to_string()))
    ///     .flat_map(|b: i32| Either::Right(b + 1));
    /// assert_eq!(result, Either::Left("Error".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Filtering Operations
    // =========================================================================

    /// Keeps the right value only if the predicate holds, otherwise converts
    /// to a `Left` built from the `zero` thunk.
    ///
    /// A `Left` input is returned unchanged regardless of the predicate, and
    /// neither closure is invoked for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(
    ///     right.clone().filter_or_else(|&x| x > 0, || "not positive".to_string()),
    ///     Either::Right(42),
    /// );
    /// assert_eq!(
    ///     right.filter_or_else(|&x| x > 100, || "too small".to_string()),
    ///     Either::Left("too small".to_string()),
    /// );
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(
    ///     left.filter_or_else(|&x| x > 100, || "too small".to_string()),
    ///     Either::Left("error".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn filter_or_else<P, Z>(self, predicate: P, zero: Z) -> Self
    where
        P: FnOnce(&R) -> bool,
        Z: FnOnce() -> L,
    {
        match self {
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(zero())
                }
            }
            Self::Left(value) => Self::Left(value),
        }
    }

    // =========================================================================
    // Predicate Operations
    // =========================================================================

    /// Returns `true` if this is `Right` and its value equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert!(right.contains(&42));
    /// assert!(!right.contains(&43));
    ///
    /// let left: Either<i32, i32> = Either::Left(42);
    /// assert!(!left.contains(&42));
    /// ```
    #[inline]
    pub fn contains(&self, value: &R) -> bool
    where
        R: PartialEq,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(contained) => contained == value,
        }
    }

    /// Returns `true` if this is `Right` and its value satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert!(right.exists(|&x| x > 0));
    /// assert!(!right.exists(|&x| x > 100));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(value) => predicate(value),
        }
    }

    /// Returns `true` if this is `Left`, or the right value satisfies the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert!(left.forall(|&x| x > 100));
    /// ```
    #[inline]
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => true,
            Self::Right(value) => predicate(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// This is also known as "case analysis" or "pattern matching" as a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.fold(|x| x.to_string(), |s| s);
    /// assert_eq!(result, "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.fold(|x: i32| x.to_string(), |s| s);
    /// assert_eq!(result, "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.swap(), Either::Left("hello".to_string()));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.unwrap_left(), 42);
    /// ```
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.unwrap_right(), "hello".to_string());
    /// ```
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `Maybe<R>`, discarding the left value.
    ///
    /// `Right(r)` becomes `Just(r)`, and `Left(l)` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::{Either, Maybe};
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.to_maybe(), Maybe::Just(42));
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(left.to_maybe(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<R> {
        self.right()
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::Right(42));
    ///
    /// let err: Result<i32, String> = Err("error".to_string());
    /// let either: Either<String, i32> = err.into();
    /// assert_eq!(either, Either::Left("error".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// let result: Result<i32, String> = right.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Self::Left(error), _, _) => Either::Left(error),
            (_, Either::Left(error), _) => Either::Left(error),
            (_, _, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Right(function), Either::Right(b)) => Either::Right(function(b)),
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(value) => Either::Left(first_function(value)),
            Self::Right(value) => Either::Right(second_function(value)),
        }
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(element) => function(init, element),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(element) => function(element, init),
        }
    }

    /// Optimized implementation for Either.
    #[inline]
    fn is_empty(&self) -> bool {
        self.is_left()
    }

    /// Optimized implementation for Either.
    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

/// Either forms a semigroup when both channels are semigroups.
///
/// The combination follows these rules:
/// - `Right(a).combine(Right(b))` = `Right(a.combine(b))`
/// - `Left(a).combine(Left(b))` = `Left(a.combine(b))`
/// - Combining a `Left` with a `Right` in either order yields the `Left`
///   unchanged: `Left` is absorbing, not an identity.
impl<L: Semigroup, R: Semigroup> Semigroup for Either<L, R> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Left(left), Self::Left(right)) => Self::Left(left.combine(right)),
            (Self::Right(left), Self::Right(right)) => Self::Right(left.combine(right)),
            (Self::Left(value), Self::Right(_)) | (Self::Right(_), Self::Left(value)) => {
                Self::Left(value)
            }
        }
    }
}
