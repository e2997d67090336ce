//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types (HKT)
//! in Rust using Generic Associated Types (GAT). This is essential for defining
//! type class traits like Functor, Applicative, and Monad.
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. For example, we cannot
//! write a trait that abstracts over `Maybe<_>` and `Either<L, _>` as type
//! constructors. This module uses GAT to work around this limitation without
//! introducing a separate `Kind<F, A>` witness layer.
//!
//! # Example
//!
//! ```rust
//! use kleisli::typeclass::TypeConstructor;
//! use kleisli::data::Maybe;
//!
//! // Maybe implements TypeConstructor
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let just_int: Maybe<i32> = Maybe::Just(42);
//! let nothing_string: Maybe<String> = transform_type(just_int);
//! assert_eq!(nothing_string, Maybe::Nothing);
//! ```

/// A trait representing a type constructor.
///
/// This trait emulates Higher-Kinded Types (HKT) using Generic Associated Types.
/// It allows abstracting over type constructors like `Maybe<_>` and
/// `Either<L, _>`.
///
/// # Type Parameters
///
/// The implementing type should be a type constructor applied to some type `A`,
/// for example `Maybe<A>` or `Either<L, A>`.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// For two-parameter types like `Either<L, R>`, `Inner` is the biased channel:
/// `Either<L, R>::Inner` is `R`, and `WithType<B>` is `Either<L, B>`, so the
/// `Left` channel is carried through unchanged by every type class operation.
///
/// # Laws
///
/// For any `F: TypeConstructor`:
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` should be
///    equivalent to `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use kleisli::typeclass::TypeConstructor;
/// use kleisli::data::Maybe;
///
/// // Maybe<i32> implements TypeConstructor
/// fn example<T: TypeConstructor<Inner = i32>>() {
///     // T::WithType<String> would be the same constructor with String
/// }
///
/// example::<Maybe<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For example, for `Maybe<i32>`, `WithType<String>` would be `Maybe<String>`.
    ///
    /// The constraint `TypeConstructor<Inner = B>` ensures that the resulting
    /// type is also a valid type constructor, maintaining the ability to
    /// chain transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}
