//! Foldable type class - folding over data structures.
//!
//! This module provides the `Foldable` trait, which represents types that can
//! have their elements reduced (folded) into a single value.
//!
//! For the container types in this library the structure holds zero or one
//! element: `Maybe` folds over its `Just` payload, and `Either` folds over
//! its `Right` channel.
//!
//! # Laws
//!
//! While `Foldable` does not have formal laws as strict as other type classes,
//! implementations should satisfy these properties:
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().into_iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Foldable;
//! use kleisli::data::Maybe;
//!
//! let just_value = Maybe::Just(10);
//! let result = just_value.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 15);
//!
//! let nothing_value: Maybe<i32> = Maybe::Nothing;
//! let result = nothing_value.fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(result, 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// # Provided Methods
///
/// All other methods have default implementations based on `fold_left`:
///
/// - `fold_map`: Map each element to a `Monoid` and combine results
/// - `is_empty`: Check if the structure has no elements
/// - `length`: Count the number of elements
/// - `to_list`: Convert to a `Vec`
/// - `find`: Find the first element matching a predicate
/// - `exists`: Check if any element matches a predicate
/// - `for_all`: Check if all elements match a predicate
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Foldable;
/// use kleisli::data::{Either, Maybe};
///
/// // A Maybe holds zero or one element
/// assert_eq!(Maybe::Just(42).to_list(), vec![42]);
/// assert_eq!(Maybe::<i32>::Nothing.to_list(), Vec::<i32>::new());
///
/// // Either folds over the right channel only
/// let right: Either<String, i32> = Either::Right(3);
/// assert_eq!(right.fold_left(10, |accumulator, element| accumulator + element), 13);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// This is equivalent to Rust's `Iterator::fold` method.
    ///
    /// # Arguments
    ///
    /// * `init` - The initial accumulator value
    /// * `function` - A function that takes the accumulator and an element,
    ///   returning a new accumulator value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::data::Maybe;
    ///
    /// let value = Maybe::Just(3);
    /// let sum = value.fold_left(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 3);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// For the zero-or-one element containers in this library this differs
    /// from `fold_left` only in the argument order of `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::data::Maybe;
    ///
    /// let value = Maybe::Just(1);
    /// let result = value.fold_right(String::from("!"), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "1!");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::data::Maybe;
    ///
    /// let value = Maybe::Just(42);
    /// let rendered: String = value.fold_map(|element| element.to_string());
    /// assert_eq!(rendered, "42");
    ///
    /// let nothing: Maybe<i32> = Maybe::Nothing;
    /// let rendered: String = nothing.fold_map(|element| element.to_string());
    /// assert_eq!(rendered, "");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::data::Maybe;
    ///
    /// assert!(!Foldable::is_empty(&Maybe::Just(5)));
    /// assert!(Foldable::is_empty(&Maybe::<i32>::Nothing));
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::data::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).length(), 1);
    /// assert_eq!(Maybe::<i32>::Nothing.length(), 0);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` containing all elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::data::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.to_list(), vec![42]);
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(left.to_list(), Vec::<i32>::new());
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element satisfying a predicate.
    ///
    /// Returns `Some(element)` if found, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::data::Maybe;
    ///
    /// let value = Maybe::Just(4);
    /// assert_eq!(value.find(|element| *element > 3), Some(4));
    /// assert_eq!(value.find(|element| *element > 10), None);
    /// ```
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::data::Maybe;
    ///
    /// assert!(Foldable::exists(&Maybe::Just(5), |element| *element > 3));
    /// assert!(!Foldable::exists(&Maybe::<i32>::Nothing, |element| *element > 3));
    /// ```
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate.
    ///
    /// Returns `true` if all elements match (or if the structure is empty),
    /// `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Foldable;
    /// use kleisli::data::Maybe;
    ///
    /// assert!(Foldable::for_all(&Maybe::Just(4), |element| *element % 2 == 0));
    ///
    /// // Empty structure returns true
    /// assert!(Foldable::for_all(&Maybe::<i32>::Nothing, |element| *element > 100));
    /// ```
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
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
    fn maybe_fold_left_just() {
        let result = Maybe::Just(10).fold_left(5, |accumulator, element| accumulator + element);
        assert_eq!(result, 15);
    }

    #[rstest]
    fn maybe_fold_left_nothing() {
        let nothing: Maybe<i32> = Maybe::Nothing;
        let result = nothing.fold_left(5, |accumulator, element| accumulator + element);
        assert_eq!(result, 5);
    }

    #[rstest]
    fn maybe_fold_right_just() {
        let result = Maybe::Just(1).fold_right(String::from("!"), |element, accumulator| {
            format!("{element}{accumulator}")
        });
        assert_eq!(result, "1!");
    }

    #[rstest]
    fn maybe_fold_map_combines_into_monoid() {
        let rendered: String = Maybe::Just(42).fold_map(|element| element.to_string());
        assert_eq!(rendered, "42");
    }

    #[rstest]
    fn maybe_length_counts_elements() {
        assert_eq!(Maybe::Just(5).length(), 1);
        assert_eq!(Maybe::<i32>::Nothing.length(), 0);
    }

    #[rstest]
    fn maybe_to_list_has_zero_or_one_element() {
        assert_eq!(Maybe::Just(42).to_list(), vec![42]);
        assert_eq!(Maybe::<i32>::Nothing.to_list(), Vec::<i32>::new());
    }

    #[rstest]
    fn maybe_find_matching_element() {
        assert_eq!(Maybe::Just(4).find(|element| *element > 3), Some(4));
        assert_eq!(Maybe::Just(2).find(|element| *element > 3), None);
    }

    // =========================================================================
    // Either<L, R> Tests
    // =========================================================================

    #[rstest]
    fn either_fold_left_right_channel() {
        let right: Either<String, i32> = Either::Right(3);
        let result = right.fold_left(10, |accumulator, element| accumulator + element);
        assert_eq!(result, 13);
    }

    #[rstest]
    fn either_fold_left_skips_left_channel() {
        let left: Either<String, i32> = Either::Left("error".to_string());
        let result = left.fold_left(10, |accumulator, element| accumulator + element);
        assert_eq!(result, 10);
    }

    #[rstest]
    fn either_to_list_right_channel_only() {
        let right: Either<String, i32> = Either::Right(42);
        assert_eq!(right.to_list(), vec![42]);

        let left: Either<String, i32> = Either::Left("error".to_string());
        assert_eq!(left.to_list(), Vec::<i32>::new());
    }

    #[rstest]
    fn either_length_counts_right_only() {
        let right: Either<String, i32> = Either::Right(42);
        assert_eq!(right.length(), 1);

        let left: Either<String, i32> = Either::Left("error".to_string());
        assert_eq!(left.length(), 0);
    }
}
