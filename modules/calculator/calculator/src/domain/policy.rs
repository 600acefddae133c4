//! Overflow policy applied when a result does not fit in `i64`.

use serde::{Deserialize, Serialize};

/// How the service treats results outside the `i64` range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Report overflow as an error.
    #[default]
    Checked,
    /// Two's-complement wrap-around.
    Wrapping,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturating,
}

impl OverflowPolicy {
    /// Sum under this policy. `None` only for [`OverflowPolicy::Checked`].
    #[must_use]
    pub const fn add(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Self::Checked => a.checked_add(b),
            Self::Wrapping => Some(a.wrapping_add(b)),
            Self::Saturating => Some(a.saturating_add(b)),
        }
    }

    /// Product under this policy. `None` only for [`OverflowPolicy::Checked`].
    #[must_use]
    pub const fn multiply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Self::Checked => a.checked_mul(b),
            Self::Wrapping => Some(a.wrapping_mul(b)),
            Self::Saturating => Some(a.saturating_mul(b)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Wrapping => "wrapping",
            Self::Saturating => "saturating",
        }
    }
}
