//! Matchx - ad-hoc match expressions built from predicate/transform cases.
//!
//! This crate provides:
//! - `Match<T>`, an immutable wrapper that dispatches a held value against an
//!   ordered list of cases
//! - `Case` and the `Casable` trait describing a single case
//! - Case builders (`is`, `case`, `otherwise`) and predicate combinators
//!   (`equals`, `negate`)
//! - `Value`, a dynamically-typed value with a closed set of kind tags, and
//!   `Decimal`, an arbitrary-precision number whose equality ignores scale
//!
//! # Evaluation
//!
//! ```
//! use matchx::{case, matching, otherwise};
//!
//! let label = matching(5).of([
//!     case(|v: &i32| *v < 0, |_| "neg"),
//!     case(|v: &i32| *v == 5, |_| "five"),
//!     otherwise(|| "other"),
//! ]);
//! assert_eq!(label, Some("five"));
//! ```
//!
//! The first case whose predicate holds wins. Default cases are only
//! consulted once every predicate case has failed; when several defaults
//! are supplied, the last one in sequence order is used. With no match and
//! no default the result is `None`.

mod case;
mod expr;
mod predicate;
mod value;

pub use case::{case, is, otherwise, Casable, Case, Tagged};
pub use expr::{matching, Match};
pub use predicate::{equals, negate};
pub use value::{Decimal, DecimalError, Value, ValueKind};
