//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`context!`], [`failure!`]
//! - **Types**: [`Outcome`], [`Context`], [`ParamValue`], [`Unit`], [`UnitOutcome`]
//! - **Traits**: [`OutcomeExt`], [`IntoContext`]
//!
//! # Examples
//!
//! ## 30-Second Quick Start
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>()
//!         .outcome_ctx("parsing listen port")
//!         .then(|port| {
//!             if port >= 1024 {
//!                 Outcome::success(port)
//!             } else {
//!                 failure!("port {} is reserved", port)
//!             }
//!         })
//! }
//!
//! assert_eq!(parse_port("8080").value(), Some(&8080));
//! assert!(parse_port("80").is_failure());
//! ```

// Macros
pub use crate::{context, failure};

// Core types
pub use crate::types::{Context, Outcome, ParamValue, Unit, UnitOutcome};

// Traits
pub use crate::traits::{IntoContext, OutcomeExt};
