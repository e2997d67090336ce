//! Algebraic data types.
//!
//! This module provides the two core data types of the library:
//!
//! - [`Maybe`]: Presence or absence of a value
//! - [`Either`]: A disjoint union of an error channel and a success channel
//!
//! Both are immutable value types: every combinator consumes its input and
//! returns a new value, and deferred arguments (defaults, alternatives,
//! missing channels) are supplied as thunks that run at most once, only when
//! their branch is selected.
//!
//! # Examples
//!
//! ## Short-circuiting chains
//!
//! ```rust
//! use kleisli::data::Maybe;
//!
//! let result = Maybe::Just(1).flat_map(|a| Maybe::Just(a + 1));
//! assert_eq!(result, Maybe::Just(2));
//!
//! let nothing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(nothing.flat_map(|a| Maybe::Just(a + 1)), Maybe::Nothing);
//! ```
//!
//! ## Crossing between the two types
//!
//! ```rust
//! use kleisli::data::{Either, Maybe};
//!
//! let present = Maybe::Just(42);
//! let either: Either<String, i32> = present.to_right(|| "missing".to_string());
//! assert_eq!(either, Either::Right(42));
//!
//! assert_eq!(either.to_maybe(), Maybe::Just(42));
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::Maybe;
