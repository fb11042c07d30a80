//! Zero-information marker for side-effect-only outcomes.

use core::fmt::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marker type carried by outcomes that yield no meaningful value.
///
/// Side-effecting pipeline steps produce [`Outcome<Unit>`](crate::types::Outcome)
/// (aliased as [`UnitOutcome`](crate::types::UnitOutcome)) so the railway keeps
/// flowing without inventing a payload. `Unit` is a fieldless struct: every
/// instance is the same logical value, and constructing one costs nothing.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Unit};
///
/// let done = Outcome::success(5).then_do(|n| println!("got {n}"));
/// assert_eq!(done.value(), Some(&Unit));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit;

impl Display for Unit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
