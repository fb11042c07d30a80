//! Railway-oriented composition for fallible pipelines.
//!
//! An [`Outcome`] is either a success or a failure, and both tracks carry a
//! [`Context`] describing what happened. Steps are chained with
//! [`then`](Outcome::then) and friends: successes flow forward, failures
//! short-circuit past every remaining step while keeping their diagnostics.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Steps
//!
//! ```
//! use outcome_rail::{failure, Outcome};
//!
//! fn reserve(stock: u32, wanted: u32) -> Outcome<u32> {
//!     if wanted <= stock {
//!         Outcome::success(stock - wanted)
//!     } else {
//!         failure!("insufficient stock"; "stock" => stock, "wanted" => wanted)
//!     }
//! }
//!
//! let remaining = reserve(10, 3).then(|left| reserve(left, 4));
//! assert_eq!(remaining.value(), Some(&3));
//!
//! let failed = reserve(10, 3).then(|left| reserve(left, 20));
//! assert!(failed.is_failure());
//! assert_eq!(failed.context().message(), "insufficient stock");
//! ```
//!
//! ## Recovering on the Failure Track
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let fallback = Outcome::<i32>::failure("primary endpoint down").then_else(
//!     |value| Outcome::success(value * 2),
//!     |failed| {
//!         assert_eq!(failed.context().message(), "primary endpoint down");
//!         Outcome::success(0)
//!     },
//! );
//! assert_eq!(fallback.value(), Some(&0));
//! ```
//!
//! ## Entering from Result
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn shard_for(key: &str) -> Outcome<u32> {
//!     key.rsplit('-')
//!         .next()
//!         .unwrap_or("")
//!         .parse::<u32>()
//!         .outcome_ctx_with(|| context!("computing shard"; "key" => key))
//! }
//!
//! assert_eq!(shard_for("user-42").value(), Some(&42));
//! assert!(shard_for("user-?").is_failure());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome`, `Result`, and `Option`
pub mod convert;
/// Macros for inline context and failure construction
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion traits for entering the railway
pub mod traits;
/// Outcome, Context, and Unit core structures
pub mod types;

// Re-export common items at root, but encourage using the prelude.
pub use convert::*;
pub use traits::*;
pub use types::{Context, Outcome, ParamValue, ParamVec, Unit, UnitOutcome};

// Macro support. Not public API.
#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
