//! Core type definitions with validation.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while constructing core types from raw values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The value is not a valid `HH:MM` wall-clock time.
    #[error("invalid time of day: {value} (expected HH:MM)")]
    InvalidTime { value: String },

    /// The same category name was registered twice.
    #[error("duplicate category: {name}")]
    DuplicateCategory { name: String },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(TypeError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_string_id!(
    /// A validated event identifier.
    ///
    /// Event IDs are assigned by the store on creation and never change.
    EventId, "event ID"
);

/// A naive wall-clock time of day with minute precision.
///
/// There is no date or timezone attached; an event's times always refer to
/// the calendar day stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Minutes in a day; every `ClockTime` is strictly below this.
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Creates a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TypeError> {
        hour.checked_mul(60)
            .and_then(|h| h.checked_add(minute))
            .and_then(|m| u16::try_from(m).ok())
            .filter(|&m| minute < 60 && m < Self::MINUTES_PER_DAY)
            .map(Self)
            .ok_or_else(|| TypeError::InvalidTime {
                value: format!("{hour}:{minute:02}"),
            })
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // "%H:%M" also accepts a single-digit hour such as "9:30".
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M").map_err(|_| {
            TypeError::InvalidTime {
                value: s.to_string(),
            }
        })?;
        Self::from_hm(time.hour(), time.minute())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_rejects_empty() {
        assert!(EventId::new("").is_err());
        assert!(EventId::new("valid-id").is_ok());
    }

    #[test]
    fn event_id_serde_rejects_empty() {
        let result: Result<EventId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let parsed: EventId = serde_json::from_str("\"evt-1\"").unwrap();
        assert_eq!(parsed.as_str(), "evt-1");
    }

    #[test]
    fn clock_time_parses_padded_and_unpadded_hours() {
        let padded: ClockTime = "09:05".parse().unwrap();
        let unpadded: ClockTime = "9:05".parse().unwrap();
        assert_eq!(padded, unpadded);
        assert_eq!(padded.minutes(), 545);
        assert_eq!(padded.to_string(), "09:05");
    }

    #[test]
    fn clock_time_rejects_out_of_range_values() {
        for raw in ["24:00", "12:60", "noon", "", "-1:00", "10"] {
            let err = raw.parse::<ClockTime>().unwrap_err();
            assert!(
                matches!(err, TypeError::InvalidTime { .. }),
                "expected InvalidTime for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn clock_time_bounds() {
        assert_eq!(ClockTime::from_hm(0, 0).unwrap().minutes(), 0);
        let last: ClockTime = "23:59".parse().unwrap();
        assert_eq!(last.minutes(), ClockTime::MINUTES_PER_DAY - 1);
        assert!(ClockTime::from_hm(23, 60).is_err());
        assert!(ClockTime::from_hm(24, 0).is_err());
        assert!(ClockTime::from_hm(u32::MAX, 0).is_err());
    }

    #[test]
    fn clock_time_orders_by_minutes() {
        let early: ClockTime = "08:30".parse().unwrap();
        let late: ClockTime = "13:00".parse().unwrap();
        assert!(early < late);
    }

    #[test]
    fn clock_time_serializes_as_string() {
        let time = ClockTime::from_hm(7, 0).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"07:00\"");
        let parsed: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, time);
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
