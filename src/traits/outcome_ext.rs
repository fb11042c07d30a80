//! Extension trait for lifting `Result` values onto the railway.
//!
//! This module provides [`OutcomeExt`], which converts any
//! `Result<T, E: Display>` into an [`Outcome<T>`] without verbose matching
//! at every call site.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::OutcomeExt;
//! use outcome_rail::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32> {
//!     input.parse::<i32>().outcome_ctx("parsing count")
//! }
//!
//! let failed = parse("not a number");
//! assert!(failed.is_failure());
//! assert_eq!(failed.context().message(), "parsing count");
//! ```

use crate::traits::IntoContext;
use crate::types::{Context, Outcome};
use core::fmt::Display;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

/// Converts `Result` values into [`Outcome`] values ergonomically.
///
/// The error type only needs `Display`; its rendering becomes the failure's
/// message ([`into_outcome`][OutcomeExt::into_outcome]) or is preserved
/// under the `cause` parameter when a caller supplies its own context
/// ([`outcome_ctx`][OutcomeExt::outcome_ctx]).
///
/// # Performance
///
/// [`outcome_ctx_with`](OutcomeExt::outcome_ctx_with) evaluates its closure
/// only when the result is actually an `Err`, so success paths never pay for
/// context construction.
pub trait OutcomeExt<T, E> {
    /// Converts `Ok` into a success and `Err` into a failure whose context
    /// message is the rendered error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OutcomeExt;
    ///
    /// let outcome = "17".parse::<i32>().into_outcome();
    /// assert_eq!(outcome.value(), Some(&17));
    ///
    /// let failed = "x".parse::<i32>().into_outcome();
    /// assert!(failed.is_failure());
    /// assert!(!failed.context().message().is_empty());
    /// ```
    fn into_outcome(self) -> Outcome<T>;

    /// Converts `Err` into a failure with the supplied context, recording the
    /// rendered error under the `cause` parameter.
    ///
    /// # Arguments
    ///
    /// * `context` - What the caller was doing when the error occurred
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OutcomeExt;
    /// use outcome_rail::ParamValue;
    ///
    /// let failed = "x".parse::<i32>().outcome_ctx("reading shard count");
    /// assert_eq!(failed.context().message(), "reading shard count");
    /// assert!(matches!(failed.context().param("cause"), Some(ParamValue::Str(_))));
    /// ```
    fn outcome_ctx<C: IntoContext>(self, context: C) -> Outcome<T>;

    /// Lazily-evaluated variant of [`outcome_ctx`][OutcomeExt::outcome_ctx].
    ///
    /// The closure runs only on `Err`, so an expensive context build costs
    /// nothing on the success path.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OutcomeExt;
    /// use outcome_rail::Context;
    ///
    /// let shard = 12;
    /// let failed = "x"
    ///     .parse::<i32>()
    ///     .outcome_ctx_with(|| Context::new("reading shard").with_param("shard", shard));
    /// assert_eq!(failed.context().message(), "reading shard");
    /// ```
    fn outcome_ctx_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Context;
}

impl<T, E: Display> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(Context::new(error.to_string())),
        }
    }

    #[inline]
    fn outcome_ctx<C: IntoContext>(self, context: C) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => {
                Outcome::failure(context.into_context().with_param("cause", error.to_string()))
            }
        }
    }

    #[inline]
    fn outcome_ctx_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce() -> Context,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(f().with_param("cause", error.to_string())),
        }
    }
}
