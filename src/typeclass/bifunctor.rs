//! Bifunctor type class - mapping over two type parameters.
//!
//! This module provides the `Bifunctor` trait, which represents types with
//! two type parameters that can both have functions mapped over them.
//!
//! A `Bifunctor` is a generalization of `Functor` for types with two type
//! parameters. While `Functor` transforms `F<A>` to `F<B>`, `Bifunctor`
//! transforms `F<A, B>` to `F<C, D>`.
//!
//! # Laws
//!
//! All `Bifunctor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping identity functions over a bifunctor should return an equivalent bifunctor:
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! Mapping composed functions should be equivalent to mapping them in sequence:
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! bimap is equivalent to composing first and second:
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Bifunctor;
//! use kleisli::data::Either;
//!
//! // Either as a Bifunctor
//! let left: Either<i32, String> = Either::Left(42);
//! let mapped = left.bimap(|x| x * 2, |s: String| s.len());
//! assert_eq!(mapped, Either::Left(84));
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! let mapped = right.bimap(|x: i32| x * 2, |s| s.len());
//! assert_eq!(mapped, Either::Right(5));
//! ```
//!
//! # Relationship with Functor
//!
//! For right-biased types like `Either`, `Bifunctor::second` is equivalent
//! to `Functor::fmap`, and `Bifunctor::first` to the inherent `map_left`.
//!
//! # Design Note: Trait Constraints
//!
//! Unlike `Functor`, `Bifunctor` does not require `TypeConstructor` or `'static`
//! constraints. `Bifunctor` uses GAT (`type Target<C, D>`) to express the
//! result type, and the default implementations of `first` and `second` only
//! use identity closures that move values without capturing any references.

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See module-level documentation for laws and detailed examples.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Bifunctor;
/// use kleisli::data::Either;
///
/// let either: Either<i32, String> = Either::Left(42);
/// let result = either.bimap(|x| x * 2, |s: String| s.len());
/// assert_eq!(result, Either::Left(84));
/// ```
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `Either<L, R>`, `Target<C, D> = Either<C, D>`.
    /// For `(A, B)`, `Target<C, D> = (C, D)`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Bifunctor;
    ///
    /// let tuple = (42, "hello".to_string());
    /// let result = tuple.bimap(|x| x * 2, |s| s.len());
    /// assert_eq!(result, (84, 5));
    /// ```
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Bifunctor;
    /// use kleisli::data::Either;
    ///
    /// let either: Either<i32, String> = Either::Left(42);
    /// let result = either.first(|x| x.to_string());
    /// assert_eq!(result, Either::Left("42".to_string()));
    /// ```
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Bifunctor;
    /// use kleisli::data::Either;
    ///
    /// let either: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = either.second(|s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }
}

// =============================================================================
// Tuple Implementation
// =============================================================================

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Tuple Tests
    // =========================================================================

    #[rstest]
    fn tuple_bimap_transforms_both() {
        let tuple = (42, "hello".to_string());
        let result = tuple.bimap(|x| x * 2, |s| s.len());
        assert_eq!(result, (84, 5));
    }

    #[rstest]
    fn tuple_first_transforms_first_only() {
        let tuple = (42, "hello");
        assert_eq!(tuple.first(|x| x.to_string()), ("42".to_string(), "hello"));
    }

    #[rstest]
    fn tuple_second_transforms_second_only() {
        let tuple = (42, "hello");
        assert_eq!(tuple.second(str::len), (42, 5));
    }

    /// Identity law for tuples: bimap(id, id) == id
    #[rstest]
    fn tuple_identity_law() {
        let tuple = (1, "a");
        assert_eq!(tuple.bimap(|x| x, |y| y), tuple);
    }

    /// Consistency law: bimap(f, g) == first(f).second(g)
    #[rstest]
    fn tuple_consistency_law() {
        let function1 = |x: i32| x + 1;
        let function2 = |s: &str| s.len();

        let by_bimap = (1, "hello").bimap(function1, function2);
        let by_composition = (1, "hello").first(function1).second(function2);

        assert_eq!(by_bimap, by_composition);
    }
}
