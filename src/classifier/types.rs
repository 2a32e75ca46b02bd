use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Sentinel label for unit types that could not be classified
pub const UNKNOWN: &str = "Unknown";

/// Inferred bedroom count for a unit type.
///
/// Kept as text rather than a number: half-step categories ("1.5") and the
/// "Unknown" sentinel share one field, and the numeric fallback passes the
/// captured digits through verbatim ("3.25" stays "3.25").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCount(Cow<'static, str>);

impl RoomCount {
    pub const fn unknown() -> Self {
        Self(Cow::Borrowed(UNKNOWN))
    }

    /// Category taken from the keyword table
    pub const fn category(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    /// Number captured by the `br` fallback pattern
    pub fn captured(number: &str) -> Self {
        Self(Cow::Owned(number.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN
    }
}

impl fmt::Display for RoomCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for RoomCount {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
