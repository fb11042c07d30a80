//! Core types for two-track computation.
//!
//! This module provides the railway's vocabulary: the [`Outcome`] container,
//! the [`Context`] diagnostic record it carries, and the [`Unit`] marker for
//! steps that produce no value.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Context, Outcome};
//!
//! let outcome = Outcome::success_with(42, Context::new("loaded from cache"))
//!     .then(|n| Outcome::success(n * 2));
//!
//! assert_eq!(outcome.value(), Some(&84));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod context;
pub mod outcome;
pub mod unit;

pub use context::*;
pub use outcome::*;
pub use unit::*;

use crate::types::alloc_type::String;

/// SmallVec-backed collection holding a context's parameters.
///
/// Uses inline storage for up to 2 entries to avoid heap allocations in the
/// common case where a context carries only a couple of parameters.
pub type ParamVec = SmallVec<[(String, ParamValue); 2]>;

/// Outcome of a step that produces no value.
///
/// This is what the side-effecting combinators
/// ([`then_do`](Outcome::then_do), [`then_do_else`](Outcome::then_do_else))
/// return.
///
/// # Examples
///
/// ```
/// use outcome_rail::types::{Outcome, UnitOutcome};
///
/// fn flush() -> UnitOutcome {
///     Outcome::done()
/// }
///
/// assert!(flush().is_success());
/// ```
pub type UnitOutcome = Outcome<Unit>;
