//! # kleisli
//!
//! Functional programming primitives for Rust: algebraic data types with
//! lawful type classes.
//!
//! ## Overview
//!
//! This library provides two small, immutable algebraic data types together
//! with the type class hierarchy that makes them composable:
//!
//! - **`Maybe<A>`**: presence (`Just`) or absence (`Nothing`) of a value,
//!   with a total combinator suite that replaces error-prone direct access
//! - **`Either<L, R>`**: a disjoint union of an error channel (`Left`) and a
//!   success channel (`Right`), with right-biased combinators
//! - **Type Classes**: Functor, Applicative, Monad, Bifunctor, Foldable,
//!   Semigroup, Monoid
//!
//! All combinators are pure functions over immutable values. Deferred
//! arguments (defaults, alternatives, missing channels) are taken as thunks
//! and evaluated at most once, only when their branch is selected.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `data`: The `Maybe` and `Either` data types (implies `typeclass`)
//! - `serde`: Serialization support for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kleisli::data::{Either, Maybe};
//!
//! let parsed: Either<String, i32> = Either::cond(
//!     true,
//!     || 42,
//!     || "rejected".to_string(),
//! );
//! let doubled = parsed.map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(84));
//!
//! let found: Maybe<i32> = doubled.to_maybe();
//! assert_eq!(found.get_or_else(|| 0), 84);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "data")]
pub mod data;
