//! Maybe type - optional values without nullable access patterns.
//!
//! This module provides the `Maybe<A>` type, which represents a value that is
//! either present (`Just(a)`) or absent (`Nothing`). It is the library's
//! rendition of the optional-value algebraic data type, with a total
//! combinator suite (`map`, `flat_map`, `fold`, `get_or_else`, ...) intended
//! to replace direct, failure-prone access.
//!
//! Deferred arguments are a hard contract here: `get_or_else`, `or_else`,
//! `to_right`, and `to_left` take thunks that are invoked at most once,
//! synchronously, and only when the empty branch is selected.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::data::Maybe;
//!
//! // Creating Maybe values
//! let present: Maybe<i32> = Maybe::Just(42);
//! let absent: Maybe<i32> = Maybe::Nothing;
//!
//! // Pattern matching
//! match present {
//!     Maybe::Just(n) => println!("Got value: {}", n),
//!     Maybe::Nothing => println!("Got nothing"),
//! }
//!
//! // Using fold to handle both cases
//! let result = absent.fold(|| "empty".to_string(), |n| format!("value: {}", n));
//! assert_eq!(result, "empty");
//! ```

use std::fmt;

use super::either::Either;
use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Semigroup, TypeConstructor,
};

/// A value that is either present or absent.
///
/// `Maybe<A>` represents an optional value: `Just(a)` when a value is
/// present, `Nothing` when it is absent. Exactly one variant is active, and
/// `Nothing` never carries a payload.
///
/// Prefer the total combinators (`fold`, `get_or_else`, `map`, `flat_map`)
/// over [`Maybe::unwrap`], which panics on `Nothing`.
///
/// # Type Parameters
///
/// * `A` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use kleisli::data::Maybe;
///
/// let present: Maybe<i32> = Maybe::Just(42);
/// let doubled = present.map(|x| x * 2);
/// assert_eq!(doubled, Maybe::Just(84));
///
/// let absent: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// The empty variant, carrying no value.
    Nothing,
    /// The present variant, carrying a value of type `A`.
    Just(A),
}

impl<A> Maybe<A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(absent.is_empty());
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(!present.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert!(present.is_defined());
    /// ```
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value if present.
    ///
    /// If this is `Just(a)`, returns `Just(function(a))`.
    /// If this is `Nothing`, returns `Nothing` and `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(5);
    /// assert_eq!(present.map(|x| x * 2), Maybe::Just(10));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.map(|x| x * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a function returning a `Maybe` and flattens the result.
    ///
    /// This enables short-circuiting chains: once `Nothing` is reached,
    /// downstream functions are not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let result = Maybe::Just(1).flat_map(|a| Maybe::Just(a + 1));
    /// assert_eq!(result, Maybe::Just(2));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.flat_map(|a| Maybe::Just(a + 1)), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Filtering Operations
    // =========================================================================

    /// Keeps the value only if present and the predicate holds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(4);
    /// assert_eq!(present.filter(|&x| x % 2 == 0), Maybe::Just(4));
    /// assert_eq!(present.filter(|&x| x > 10), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    /// Keeps the value only if present and the predicate does NOT hold.
    ///
    /// This is the logical complement of [`Maybe::filter`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(4);
    /// assert_eq!(present.filter_not(|&x| x > 10), Maybe::Just(4));
    /// assert_eq!(present.filter_not(|&x| x % 2 == 0), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    // =========================================================================
    // Elimination Operations
    // =========================================================================

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// Exactly one branch is invoked: `on_empty` for `Nothing`, `on_value`
    /// for `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// let result = present.fold(|| "empty".to_string(), |n| n.to_string());
    /// assert_eq!(result, "42");
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// let result = absent.fold(|| "empty".to_string(), |n| n.to_string());
    /// assert_eq!(result, "empty");
    /// ```
    #[inline]
    pub fn fold<B, D, F>(self, on_empty: D, on_value: F) -> B
    where
        D: FnOnce() -> B,
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => on_value(value),
            Self::Nothing => on_empty(),
        }
    }

    /// Returns the contained value, or a lazily computed default.
    ///
    /// The default is only evaluated when this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert_eq!(present.get_or_else(|| 0), 42);
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.get_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn get_or_else<D>(self, default: D) -> A
    where
        D: FnOnce() -> A,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Returns self if non-empty, otherwise a lazily computed alternative.
    ///
    /// The alternative is only evaluated when this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert_eq!(present.or_else(|| Maybe::Just(0)), Maybe::Just(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert_eq!(absent.or_else(|| Maybe::Just(0)), Maybe::Just(0));
    /// ```
    #[inline]
    pub fn or_else<D>(self, alternative: D) -> Self
    where
        D: FnOnce() -> Self,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => alternative(),
        }
    }

    // =========================================================================
    // Predicate Operations
    // =========================================================================

    /// Returns `true` if a value is present and satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(4);
    /// assert!(present.exists(|&x| x % 2 == 0));
    /// assert!(!present.exists(|&x| x > 10));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(!absent.exists(|&x| x % 2 == 0));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) => predicate(value),
            Self::Nothing => false,
        }
    }

    /// Returns `true` if the value is absent or satisfies the predicate.
    ///
    /// The universal counterpart of [`Maybe::exists`]: `Nothing` vacuously
    /// satisfies every predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(4);
    /// assert!(present.forall(|&x| x % 2 == 0));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// assert!(absent.forall(|&x| x > 10));
    /// ```
    #[inline]
    pub fn forall<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) => predicate(value),
            Self::Nothing => true,
        }
    }

    /// Returns `true` if a value is present and equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(4);
    /// assert!(present.contains(&4));
    /// assert!(!present.contains(&5));
    /// ```
    #[inline]
    pub fn contains(&self, value: &A) -> bool
    where
        A: PartialEq,
    {
        match self {
            Self::Just(contained) => contained == value,
            Self::Nothing => false,
        }
    }

    // =========================================================================
    // Unsafe Access
    // =========================================================================

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// This is the explicit escape hatch out of the total combinator suite;
    /// prefer [`Maybe::fold`] or [`Maybe::get_or_else`], which never panic.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// assert_eq!(present.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::unwrap()` on a `Nothing` value"),
        }
    }

    // =========================================================================
    // Reference Operations
    // =========================================================================

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// let present: Maybe<String> = Maybe::Just("hello".to_string());
    /// let length = present.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::Just(5));
    /// // present is still available here
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `Vec` with zero or one element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).to_vec(), vec![42]);
    /// assert_eq!(Maybe::<i32>::Nothing.to_vec(), Vec::<i32>::new());
    /// ```
    #[inline]
    pub fn to_vec(self) -> Vec<A> {
        match self {
            Self::Just(value) => vec![value],
            Self::Nothing => Vec::new(),
        }
    }

    /// Converts into an `Either`, placing the value on the `Right` channel.
    ///
    /// The `left` thunk supplies the opposite channel and is only evaluated
    /// when this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::{Either, Maybe};
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// let either: Either<String, i32> = present.to_right(|| "missing".to_string());
    /// assert_eq!(either, Either::Right(42));
    ///
    /// let absent: Maybe<i32> = Maybe::Nothing;
    /// let either: Either<String, i32> = absent.to_right(|| "missing".to_string());
    /// assert_eq!(either, Either::Left("missing".to_string()));
    /// ```
    #[inline]
    pub fn to_right<X, F>(self, left: F) -> Either<X, A>
    where
        F: FnOnce() -> X,
    {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(left()),
        }
    }

    /// Converts into an `Either`, placing the value on the `Left` channel.
    ///
    /// The `right` thunk supplies the opposite channel and is only evaluated
    /// when this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::{Either, Maybe};
    ///
    /// let present: Maybe<i32> = Maybe::Just(42);
    /// let either: Either<i32, String> = present.to_left(|| "fallback".to_string());
    /// assert_eq!(either, Either::Left(42));
    /// ```
    #[inline]
    pub fn to_left<X, F>(self, right: F) -> Either<A, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Self::Just(value) => Either::Left(value),
            Self::Nothing => Either::Right(right()),
        }
    }

    /// Lifts a nullable standard-library `Option` into a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// assert_eq!(Maybe::from_option(Some(42)), Maybe::Just(42));
    /// assert_eq!(Maybe::<i32>::from_option(None), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn from_option(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    /// Converts into a standard-library `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::data::Maybe;
    ///
    /// assert_eq!(Maybe::Just(42).into_option(), Some(42));
    /// assert_eq!(Maybe::<i32>::Nothing.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<A> Default for Maybe<A> {
    /// Returns `Nothing`.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<A> From<Option<A>> for Maybe<A> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(a)` becomes `Just(a)`, and `None` becomes `Nothing`.
    #[inline]
    fn from(option: Option<A>) -> Self {
        Self::from_option(option)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Just(a)` becomes `Some(a)`, and `Nothing` becomes `None`.
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    /// Iterates over the zero or one contained element.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = std::option::IntoIter<&'a A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Just(function), Maybe::Just(b)) => Maybe::Just(function(b)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Just(element) => function(init, element),
            Self::Nothing => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Just(element) => function(element, init),
            Self::Nothing => init,
        }
    }

    /// Optimized implementation for Maybe.
    #[inline]
    fn is_empty(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Optimized implementation for Maybe.
    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_defined())
    }
}

/// Maybe forms a semigroup when its inner type is a semigroup.
///
/// The combination follows these rules:
/// - `Just(a).combine(Just(b))` = `Just(a.combine(b))`
/// - `Just(a).combine(Nothing)` = `Just(a)`
/// - `Nothing.combine(Just(b))` = `Just(b)`
/// - `Nothing.combine(Nothing)` = `Nothing`
impl<A: Semigroup> Semigroup for Maybe<A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.combine(right)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

/// Maybe forms a monoid when its inner type is a semigroup.
/// The identity element is `Nothing`.
impl<A: Semigroup> Monoid for Maybe<A> {
    fn empty() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Maybe<A> {
    /// Serializes exactly like `Option`: `Nothing` as none, `Just` as some.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Just(value) => serializer.serialize_some(value),
            Self::Nothing => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
    assert_impl_all!(Maybe<String>: Send, Sync, Clone);

    #[rstest]
    fn maybe_just_construction() {
        let value: Maybe<i32> = Maybe::Just(42);
        assert!(value.is_defined());
        assert!(!value.is_empty());
    }

    #[rstest]
    fn maybe_nothing_construction() {
        let value: Maybe<i32> = Maybe::Nothing;
        assert!(value.is_empty());
        assert!(!value.is_defined());
    }

    #[rstest]
    fn maybe_default_is_nothing() {
        let value: Maybe<i32> = Maybe::default();
        assert_eq!(value, Maybe::Nothing);
    }

    #[rstest]
    fn maybe_debug_format() {
        assert_eq!(format!("{:?}", Maybe::Just(42)), "Just(42)");
        assert_eq!(format!("{:?}", Maybe::<i32>::Nothing), "Nothing");
    }

    #[rstest]
    fn option_conversion_roundtrip() {
        let present: Maybe<i32> = Some(42).into();
        assert_eq!(present, Maybe::Just(42));
        assert_eq!(Option::from(present), Some(42));

        let absent: Maybe<i32> = None.into();
        assert_eq!(absent, Maybe::Nothing);
        assert_eq!(Option::from(absent), None::<i32>);
    }

    #[rstest]
    fn maybe_iterates_zero_or_one_element() {
        let present: Maybe<i32> = Maybe::Just(42);
        assert_eq!(present.into_iter().collect::<Vec<_>>(), vec![42]);

        let absent: Maybe<i32> = Maybe::Nothing;
        assert_eq!(absent.into_iter().count(), 0);

        let borrowed: Maybe<String> = Maybe::Just("hello".to_string());
        let lengths: Vec<usize> = (&borrowed).into_iter().map(|s| s.len()).collect();
        assert_eq!(lengths, vec![5]);
    }
}
