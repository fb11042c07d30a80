//! Trait for converting values into outcome [`Context`].
//!
//! Failure constructors and the `Result` adapters accept any `IntoContext`
//! value, so a bare message string works wherever a full context would.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{traits::IntoContext, Context};
//!
//! let ctx1 = "simple message".into_context();
//! let ctx2 = String::from("owned message").into_context();
//! let ctx3 = Context::new("prebuilt").with_param("id", 7).into_context();
//!
//! assert_eq!(ctx1.message(), "simple message");
//! assert_eq!(ctx2.message(), "owned message");
//! assert_eq!(ctx3.param_count(), 1);
//! ```

use crate::types::alloc_type::{Cow, String};
use crate::types::Context;

/// Converts a value into a [`Context`] for attaching to an outcome.
///
/// Implemented for `Context` itself (identity) and for the common string
/// types, which become message-only contexts.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as outcome context",
    label = "this type does not implement `IntoContext`",
    note = "pass a `Context`, a `String`, or a `&'static str`, or implement `IntoContext` manually"
)]
pub trait IntoContext {
    /// Converts `self` into a [`Context`].
    fn into_context(self) -> Context;
}

impl IntoContext for Context {
    /// Identity conversion (no-op).
    #[inline]
    fn into_context(self) -> Context {
        self
    }
}

impl IntoContext for String {
    /// Converts an owned `String` into a message-only context.
    #[inline]
    fn into_context(self) -> Context {
        Context::new(self)
    }
}

impl IntoContext for &'static str {
    /// Converts a static string slice into a message-only context.
    #[inline]
    fn into_context(self) -> Context {
        Context::new(self)
    }
}

impl IntoContext for Cow<'static, str> {
    /// Converts a Cow string into a message-only context.
    #[inline]
    fn into_context(self) -> Context {
        Context::new(self)
    }
}
