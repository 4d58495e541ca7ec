//! Filter selections over a categorical dimension.
//!
//! A [`Selection`] is either [`Selection::All`] (no restriction, or a roll-up
//! across the dimension when it appears in a static-metric row) or a single
//! concrete value. On the wire it is the string `"all"` or the value itself.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire spelling of [`Selection::All`].
pub const ALL: &str = "all";

/// Either every value of a dimension, or one specific value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    /// Unrestricted / aggregated across the dimension.
    All,
    /// A single concrete value.
    Specific(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    /// True for [`Selection::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The pinned value, if any.
    pub fn specific(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Specific(value) => Some(value),
        }
    }

}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this selection.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Specific(pinned) => pinned == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Specific(value) => value.fmt(f),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL) {
            Ok(Selection::All)
        } else {
            trimmed.parse().map(Selection::Specific)
        }
    }
}

impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Selection<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
