//! The two-variant outcome container at the heart of the railway.
//!
//! An [`Outcome<T>`] is either a success carrying a value or a failure
//! carrying diagnostic [`Context`]. The `then` family of combinators chains
//! outcome-producing steps so that a pipeline never branch-checks by hand:
//! successes flow into the next step, failures skip every remaining
//! success-path step and thread their context forward.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn half(n: i32) -> Outcome<i32> {
//!     if n % 2 == 0 {
//!         Outcome::success(n / 2)
//!     } else {
//!         Outcome::failure("odd input")
//!     }
//! }
//!
//! let ok = Outcome::success(8).then(half).then(half);
//! assert_eq!(ok.value(), Some(&2));
//!
//! let failed = Outcome::success(20).then(half).then(half).then(half);
//! assert!(failed.is_failure());
//! assert_eq!(failed.context().message(), "odd input");
//! ```

use crate::traits::IntoContext;
use crate::types::{Context, Unit, UnitOutcome};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a fallible pipeline step: a success carrying a value, or a
/// failure carrying diagnostic context.
///
/// Both variants always hold a [`Context`] (the empty context when none was
/// supplied). The failure variant may additionally carry a partially-computed
/// value for diagnostics; `None` is structurally distinct from a zero or
/// empty value. Outcomes are immutable value objects: the variant tag is
/// fixed at construction, and every combinator consumes the receiver and
/// produces a fresh outcome.
///
/// "Success with no meaningful value" is spelled [`Outcome<Unit>`] (aliased
/// as [`UnitOutcome`]), never a defaulted `T`.
///
/// # Type Parameters
///
/// * `T` - The carried value type
///
/// # Examples
///
/// A pipeline that fails midway skips the remaining success-path steps and
/// surfaces the failing step's context:
///
/// ```
/// use outcome_rail::Outcome;
///
/// let result = Outcome::success(5)
///     .then(|x| Outcome::success(x * 2))
///     .then(|_y| Outcome::<i32>::failure("too big"))
///     .then(|z| Outcome::success(z + 1));
///
/// assert!(result.is_failure());
/// assert_eq!(result.context().message(), "too big");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// A successful computation: the value it produced plus its context.
    Success {
        /// The computed value.
        value: T,
        /// Diagnostic context attached at construction.
        context: Context,
    },
    /// A failed computation: diagnostic context plus, optionally, a
    /// partially-computed value kept for inspection.
    Failure {
        /// A partial result worth surfacing in diagnostics, if any.
        value: Option<T>,
        /// Diagnostic context describing the failure.
        context: Context,
    },
}

impl<T> Outcome<T> {
    /// Creates a success with the empty context.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::success(42);
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.value(), Some(&42));
    /// assert!(outcome.context().is_empty());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success {
            value,
            context: Context::EMPTY,
        }
    }

    /// Creates a success with an explicit context.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Context, Outcome};
    ///
    /// let outcome = Outcome::success_with(42, Context::new("cache hit"));
    /// assert_eq!(outcome.context().message(), "cache hit");
    /// ```
    #[inline]
    pub fn success_with(value: T, context: Context) -> Self {
        Self::Success { value, context }
    }

    /// Creates a failure with no carried value.
    ///
    /// Accepts anything convertible into a [`Context`]: a prebuilt context,
    /// or a bare message. [`Context::EMPTY`] expresses "failure with no
    /// diagnostics at all".
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Context, Outcome};
    ///
    /// let from_message = Outcome::<i32>::failure("parse error");
    /// assert_eq!(from_message.context().message(), "parse error");
    ///
    /// let from_context = Outcome::<i32>::failure(Context::new("parse error").with_param("line", 3));
    /// assert_eq!(from_context.context().param_count(), 1);
    ///
    /// assert!(Outcome::<i32>::failure(Context::EMPTY).context().is_empty());
    /// ```
    #[inline]
    pub fn failure<C: IntoContext>(context: C) -> Self {
        Self::Failure {
            value: None,
            context: context.into_context(),
        }
    }

    /// Creates a failure that still carries a value, e.g. a partial result
    /// worth keeping for diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::failure_with("checksum mismatch", vec![0u8, 1, 2]);
    /// assert!(outcome.is_failure());
    /// assert_eq!(outcome.value(), Some(&vec![0u8, 1, 2]));
    /// ```
    #[inline]
    pub fn failure_with<C: IntoContext>(context: C, value: T) -> Self {
        Self::Failure {
            value: Some(value),
            context: context.into_context(),
        }
    }

    /// Returns `true` for the success variant.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` for the failure variant.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the carried value, if any.
    ///
    /// Always `Some` for a success; for a failure, the partial value when one
    /// was attached. Match on the enum instead when the variant matters.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success { value, .. } => Some(value),
            Self::Failure { value, .. } => value.as_ref(),
        }
    }

    /// Returns the attached context. Every outcome has one.
    #[must_use]
    #[inline]
    pub fn context(&self) -> &Context {
        match self {
            Self::Success { context, .. } | Self::Failure { context, .. } => context,
        }
    }

    /// Consumes the outcome, returning the carried value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.into_parts().0
    }

    /// Consumes the outcome, returning its context.
    #[inline]
    pub fn into_context(self) -> Context {
        self.into_parts().1
    }

    /// Consumes the outcome, returning `(value, context)`.
    ///
    /// The value slot follows [`value`][Self::value]: `Some` for a success,
    /// the optional partial value for a failure.
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (Option<T>, Context) {
        match self {
            Self::Success { value, context } => (Some(value), context),
            Self::Failure { value, context } => (value, context),
        }
    }

    /// Chains the next pipeline step, short-circuiting on failure.
    ///
    /// On success, `on_success` receives the carried value and its outcome is
    /// returned unchanged, without wrapping it or merging contexts. On
    /// failure, `on_success` is never invoked; the receiver's context is
    /// threaded into a fresh failure of the new value type.
    ///
    /// # Arguments
    ///
    /// * `on_success` - The next step, producing the next outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::success(21).then(|n| Outcome::success(n * 2));
    /// assert_eq!(doubled.value(), Some(&42));
    ///
    /// let skipped = Outcome::<i32>::failure("upstream broke")
    ///     .then(|n: i32| Outcome::success(n.to_string()));
    /// assert!(skipped.is_failure());
    /// assert_eq!(skipped.context().message(), "upstream broke");
    /// ```
    #[inline]
    pub fn then<U, F>(self, on_success: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success { value, .. } => on_success(value),
            Self::Failure { context, .. } => Outcome::Failure {
                value: None,
                context,
            },
        }
    }

    /// Chains the next step with an explicit failure handler.
    ///
    /// On success, behaves exactly like [`then`][Self::then]. On failure,
    /// `on_failure` receives the entire receiver outcome (value and context
    /// both) and its result is returned as-is, which lets a handler recover
    /// into a success.
    ///
    /// # Arguments
    ///
    /// * `on_success` - The next step for the success track
    /// * `on_failure` - Handler consuming the failed outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<i32>::failure("cache miss")
    ///     .then_else(|n| Outcome::success(n * 2), |_failed| Outcome::success(0));
    ///
    /// assert_eq!(recovered.value(), Some(&0));
    /// ```
    #[inline]
    pub fn then_else<U, F, H>(self, on_success: F, on_failure: H) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
        H: FnOnce(Outcome<T>) -> Outcome<U>,
    {
        match self {
            Self::Success { value, .. } => on_success(value),
            failed => on_failure(failed),
        }
    }

    /// Runs a side-effecting step, producing a [`UnitOutcome`].
    ///
    /// On success, `action` consumes the carried value exactly once and the
    /// result is [`Outcome::done`]. On failure, `action` is never invoked and
    /// the failure's context is threaded into the returned `UnitOutcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = None;
    /// let done = Outcome::success(7).then_do(|n| seen = Some(n));
    /// assert!(done.is_success());
    /// assert_eq!(seen, Some(7));
    ///
    /// let failed = Outcome::<i32>::failure("no data").then_do(|_| unreachable!());
    /// assert_eq!(failed.context().message(), "no data");
    /// ```
    #[inline]
    pub fn then_do<F>(self, action: F) -> UnitOutcome
    where
        F: FnOnce(T),
    {
        match self {
            Self::Success { value, .. } => {
                action(value);
                Outcome::done()
            }
            Self::Failure { context, .. } => Outcome::Failure {
                value: None,
                context,
            },
        }
    }

    /// Runs a side-effecting step with a failure-side observer.
    ///
    /// On success, `action` consumes the value and the result is
    /// [`Outcome::done`]. On failure, `failure_action` observes the entire
    /// receiver outcome by reference, and the receiver's context is threaded
    /// into the returned failure `UnitOutcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let done = Outcome::<i32>::failure("disk full")
    ///     .then_do_else(|_| (), |failed| log.push(failed.context().message().to_string()));
    ///
    /// assert!(done.is_failure());
    /// assert_eq!(log, ["disk full"]);
    /// assert_eq!(done.context().message(), "disk full");
    /// ```
    #[inline]
    pub fn then_do_else<F, H>(self, action: F, failure_action: H) -> UnitOutcome
    where
        F: FnOnce(T),
        H: FnOnce(&Outcome<T>),
    {
        match self {
            Self::Success { value, .. } => {
                action(value);
                Outcome::done()
            }
            failed => {
                failure_action(&failed);
                Outcome::Failure {
                    value: None,
                    context: failed.into_context(),
                }
            }
        }
    }

    /// Transforms the carried value, leaving tag and context untouched.
    ///
    /// Maps the success value, or the failure's partial value when present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let stringified = Outcome::success(42).map(|n| n.to_string());
    /// assert_eq!(stringified.value().map(String::as_str), Some("42"));
    ///
    /// let failed = Outcome::<i32>::failure("boom").map(|n| n + 1);
    /// assert!(failed.is_failure());
    /// assert_eq!(failed.context().message(), "boom");
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success { value, context } => Outcome::Success {
                value: f(value),
                context,
            },
            Self::Failure { value, context } => Outcome::Failure {
                value: value.map(f),
                context,
            },
        }
    }

    /// Calls `handler` with the entire outcome if it is a failure, otherwise
    /// returns the success unchanged.
    ///
    /// The recovery half of [`then_else`][Self::then_else], for when the
    /// success track needs no further step.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<i32>::failure("missing").or_else(|_| Outcome::success(0));
    /// assert_eq!(recovered.value(), Some(&0));
    ///
    /// let untouched = Outcome::success(9).or_else(|_| Outcome::success(0));
    /// assert_eq!(untouched.value(), Some(&9));
    /// ```
    #[inline]
    pub fn or_else<H>(self, handler: H) -> Self
    where
        H: FnOnce(Self) -> Self,
    {
        match self {
            success @ Self::Success { .. } => success,
            failed => handler(failed),
        }
    }
}

impl Outcome<Unit> {
    /// Successful [`UnitOutcome`] with the empty context, for steps that
    /// yield no meaningful value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Unit};
    ///
    /// let done = Outcome::done();
    /// assert!(done.is_success());
    /// assert_eq!(done.value(), Some(&Unit));
    /// ```
    #[inline]
    pub fn done() -> Self {
        Self::success(Unit)
    }
}
