//! Diagnostic context carried by every outcome.
//!
//! A [`Context`] is an immutable bag of metadata describing where an outcome
//! came from: a free-text message plus a small set of key/value parameters.
//! Contexts are built once, attached to an [`Outcome`](crate::types::Outcome),
//! and never mutated afterwards.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Context;
//!
//! let ctx = Context::new("quota exceeded")
//!     .with_param("user_id", 42)
//!     .with_param("limit", 10.0);
//!
//! assert_eq!(ctx.message(), "quota exceeded");
//! assert_eq!(ctx.param_count(), 2);
//! ```

use crate::types::alloc_type::String;
use crate::types::ParamVec;
use core::fmt::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single diagnostic parameter value.
///
/// Parameters are scalar by design: they exist to be rendered, compared, and
/// serialized, not computed with. `From` conversions cover the primitives a
/// pipeline typically wants to record.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Display for ParamValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for ParamValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<crate::types::alloc_type::Cow<'static, str>> for ParamValue {
    #[inline]
    fn from(value: crate::types::alloc_type::Cow<'static, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

impl From<i64> for ParamValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for ParamValue {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<bool> for ParamValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Immutable diagnostic metadata attached to an outcome.
///
/// Holds a message (empty string when unset, never an absent marker) and a
/// unique-keyed parameter mapping. The parameter list is kept sorted by key,
/// so equality and iteration do not depend on insertion order.
///
/// Construction is builder-style and one-shot; there are no mutators.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Context, ParamValue};
///
/// let ctx = Context::new("connection refused")
///     .with_param("host", "db-primary")
///     .with_param("attempts", 3);
///
/// assert_eq!(ctx.param("attempts"), Some(&ParamValue::Int(3)));
/// assert_eq!(ctx.to_string(), "connection refused (attempts=3, host=db-primary)");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Context {
    message: String,
    params: ParamVec,
}

impl Context {
    /// The well-known empty context: empty message, no parameters.
    ///
    /// Materializing this value performs no allocation, so it can stand in
    /// wherever a default context is needed.
    pub const EMPTY: Self = Self {
        message: String::new(),
        params: ParamVec::new_const(),
    };

    /// Creates a context with the given message and no parameters.
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            params: ParamVec::new(),
        }
    }

    /// Returns the empty context.
    ///
    /// Equivalent to [`Context::EMPTY`]; exists so call sites read naturally.
    #[inline]
    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Adds (or replaces) a single parameter, consuming the context.
    ///
    /// Keys are unique: inserting an existing key replaces its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Context, ParamValue};
    ///
    /// let ctx = Context::new("retrying")
    ///     .with_param("attempt", 1)
    ///     .with_param("attempt", 2);
    ///
    /// assert_eq!(ctx.param_count(), 1);
    /// assert_eq!(ctx.param("attempt"), Some(&ParamValue::Int(2)));
    /// ```
    #[inline]
    pub fn with_param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let key = key.into();
        let value = value.into();
        match self
            .params
            .binary_search_by(|(existing, _)| existing.as_str().cmp(key.as_str()))
        {
            Ok(index) => self.params[index].1 = value,
            Err(index) => self.params.insert(index, (key, value)),
        }
        self
    }

    /// Adds every `(key, value)` pair from an iterator.
    ///
    /// Later entries win when keys collide, matching [`with_param`][Self::with_param].
    pub fn with_params<I, K, V>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        params
            .into_iter()
            .fold(self, |ctx, (key, value)| ctx.with_param(key, value))
    }

    /// Returns the message, or `""` when unset.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a parameter by key.
    #[inline]
    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params
            .binary_search_by(|(existing, _)| existing.as_str().cmp(key))
            .ok()
            .map(|index| &self.params[index].1)
    }

    /// Returns the parameter list, sorted by key.
    #[inline]
    pub fn params(&self) -> &[(String, ParamValue)] {
        &self.params
    }

    /// Returns the number of parameters.
    #[inline]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if both the message and the parameter list are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Context;
    ///
    /// assert!(Context::EMPTY.is_empty());
    /// assert!(!Context::new("boom").is_empty());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.params.is_empty()
    }
}

impl Display for Context {
    /// Renders the message followed by the parameter list, if any:
    /// `message (key=value, key=value)`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)?;
        if !self.params.is_empty() {
            if !self.message.is_empty() {
                f.write_str(" ")?;
            }
            f.write_str("(")?;
            for (index, (key, value)) in self.params.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}={}", key, value)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl core::error::Error for Context {}
