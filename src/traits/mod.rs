//! Core traits for building and entering the railway.
//!
//! This module defines the conversion seams that keep call sites terse:
//!
//! - [`IntoContext`]: Accepts anything describable as diagnostic context
//! - [`OutcomeExt`]: Lifts `Result<T, E: Display>` values into [`Outcome`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoContext, OutcomeExt};
//! use outcome_rail::Outcome;
//!
//! // IntoContext lets factories take plain strings.
//! let failed: Outcome<i32> = Outcome::failure("quota exceeded");
//! assert_eq!(failed.context().message(), "quota exceeded");
//!
//! // OutcomeExt bridges from the Result world.
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed.value(), Some(&42));
//! ```
//!
//! [`Outcome`]: crate::Outcome

pub mod into_context;
pub mod outcome_ext;

pub use into_context::IntoContext;
pub use outcome_ext::OutcomeExt;
