//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail`
//! incrementally by lifting legacy results onto the railway or by flattening
//! outcomes back into core types when interacting with external APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! // Lift a Result onto the railway.
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! // Flatten an outcome back into a Result.
//! let failed: Outcome<i32> = Outcome::failure("no quota");
//! assert!(outcome_to_result(failed).is_err());
//! ```

use crate::traits::{IntoContext, OutcomeExt};
use crate::types::alloc_type::Vec;
use crate::types::{Context, Outcome};
use core::fmt::Display;

/// Converts an `Outcome` to a `Result`, keeping only the context on failure.
///
/// A success's context is discarded: `Result` has nowhere to carry it. A
/// failure's partial value (if any) is likewise dropped.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Returns
///
/// * `Ok(value)` if the outcome is a success
/// * `Err(context)` if the outcome is a failure
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let success = Outcome::success(42);
/// assert_eq!(outcome_to_result(success), Ok(42));
///
/// let failure: Outcome<i32> = Outcome::failure("not found");
/// let err = outcome_to_result(failure).unwrap_err();
/// assert_eq!(err.message(), "not found");
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Context> {
    match outcome {
        Outcome::Success { value, .. } => Ok(value),
        Outcome::Failure { context, .. } => Err(context),
    }
}

/// Converts a `Result` to an `Outcome`, rendering the error as the failure
/// message.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * A success if the result is `Ok`
/// * A failure whose context message is the rendered error if `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome("7".parse::<i32>());
/// assert_eq!(outcome.value(), Some(&7));
///
/// let failed = result_to_outcome("x".parse::<i32>());
/// assert!(failed.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<T, E: Display>(result: Result<T, E>) -> Outcome<T> {
    result.into_outcome()
}

/// Converts an `Option` to an `Outcome`, attaching the given context when the
/// value is absent.
///
/// # Arguments
///
/// * `option` - The option to convert
/// * `context` - Context describing what a `None` means here
///
/// # Returns
///
/// * A success if the option is `Some`
/// * A failure carrying `context` if `None`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
///
/// let outcome = option_to_outcome(Some(3), "missing index");
/// assert_eq!(outcome.value(), Some(&3));
///
/// let failed = option_to_outcome::<i32, _>(None, "missing index");
/// assert_eq!(failed.context().message(), "missing index");
/// ```
#[inline]
pub fn option_to_outcome<T, C: IntoContext>(option: Option<T>, context: C) -> Outcome<T> {
    match option {
        Some(value) => Outcome::success(value),
        None => Outcome::failure(context),
    }
}

/// Collects an iterator of outcomes into a single `Outcome<Vec<T>>`.
///
/// Short-circuits on the first failure, threading its context; remaining
/// items are not consumed.
///
/// # Arguments
///
/// * `outcomes` - An iterator of outcomes to collect
///
/// # Returns
///
/// * A success holding every value, in order, if all items succeed
/// * The first failure's context otherwise
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::collect_outcomes;
/// use outcome_rail::Outcome;
///
/// let all_good = vec![Outcome::success(1), Outcome::success(2)];
/// assert_eq!(collect_outcomes(all_good).value(), Some(&vec![1, 2]));
///
/// let mixed = vec![
///     Outcome::success(1),
///     Outcome::failure("bad record"),
///     Outcome::success(3),
/// ];
/// let failed = collect_outcomes(mixed);
/// assert_eq!(failed.context().message(), "bad record");
/// ```
pub fn collect_outcomes<T, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    let iter = outcomes.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for outcome in iter {
        match outcome {
            Outcome::Success { value, .. } => values.push(value),
            Outcome::Failure { context, .. } => {
                return Outcome::Failure {
                    value: None,
                    context,
                }
            }
        }
    }
    Outcome::success(values)
}

impl<T> From<Outcome<T>> for Result<T, Context> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome_to_result(outcome)
    }
}

impl<T, E: Display> From<Result<T, E>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.into_outcome()
    }
}
