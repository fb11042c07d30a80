//! Ergonomic macros for creating [`Context`](crate::types::Context) values
//! and failures.
//!
//! These macros provide convenient shortcuts for building structured
//! diagnostic context inline:
//!
//! - [`macro@crate::context`] - Formats a message and optionally attaches
//!   `key => value` parameters in one expression.
//! - [`macro@crate::failure`] - Same grammar, but wraps the context in a
//!   failed [`Outcome`](crate::Outcome) directly.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{context, failure, Outcome};
//!
//! let ctx = context!("timeout after {} ms", 250; "endpoint" => "billing");
//! assert_eq!(ctx.message(), "timeout after 250 ms");
//!
//! let failed: Outcome<i32> = failure!("shard {} offline", 7);
//! assert!(failed.is_failure());
//! ```

/// Builds a [`Context`](crate::types::Context) from a format string and
/// optional parameters.
///
/// # Syntax
///
/// - `context!("fmt", args...)` - Formatted message only
/// - `context!("fmt", args...; "key" => value, ...)` - Message plus
///   parameters, separated by a semicolon
///
/// Parameter values accept anything convertible into
/// [`ParamValue`](crate::types::ParamValue): strings, integers, floats, and
/// booleans.
///
/// # Examples
///
/// ```
/// use outcome_rail::context;
///
/// let plain = context!("cache miss");
/// assert_eq!(plain.message(), "cache miss");
///
/// let detailed = context!(
///     "timeout after {} ms", 250;
///     "endpoint" => "api.internal",
///     "attempts" => 3,
/// );
/// assert_eq!(detailed.message(), "timeout after 250 ms");
/// assert_eq!(detailed.param_count(), 2);
/// ```
#[macro_export]
macro_rules! context {
    ($fmt:literal, $($arg:expr),+ ; $($key:expr => $value:expr),+ $(,)?) => {
        $crate::types::Context::new($crate::__private::format!($fmt, $($arg),+))
            $(.with_param($key, $value))+
    };
    ($fmt:literal ; $($key:expr => $value:expr),+ $(,)?) => {
        $crate::types::Context::new($crate::__private::format!($fmt))
            $(.with_param($key, $value))+
    };
    ($fmt:literal, $($arg:expr),+ $(,)?) => {
        $crate::types::Context::new($crate::__private::format!($fmt, $($arg),+))
    };
    ($fmt:literal $(,)?) => {
        $crate::types::Context::new($crate::__private::format!($fmt))
    };
}

/// Builds a failed [`Outcome`](crate::Outcome) from a format string and
/// optional parameters.
///
/// Accepts the same grammar as [`context!`](crate::context) and wraps the
/// resulting context via [`Outcome::failure`](crate::Outcome::failure).
///
/// # Examples
///
/// ```
/// use outcome_rail::{failure, Outcome};
///
/// let failed: Outcome<i32> = failure!("shard {} offline", 7; "retries" => 3);
/// assert!(failed.is_failure());
/// assert_eq!(failed.context().message(), "shard 7 offline");
/// assert_eq!(failed.value(), None);
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::Outcome::failure($crate::context!($($arg)*))
    };
}
