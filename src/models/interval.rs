//! Weekday and time interval value types.

use chrono::NaiveTime;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Day of the week a recurring interval falls on.
///
/// Parsed leniently from client input: case-insensitive, surrounding
/// whitespace ignored, and anything unrecognized falls back to Monday.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Parse a free-form day token, defaulting to Monday when unrecognized.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "monday" | "mon" => Weekday::Monday,
            "tuesday" | "tue" => Weekday::Tuesday,
            "wednesday" | "wed" => Weekday::Wednesday,
            "thursday" | "thu" => Weekday::Thursday,
            "friday" | "fri" => Weekday::Friday,
            "saturday" | "sat" => Weekday::Saturday,
            "sunday" | "sun" => Weekday::Sunday,
            _ => Weekday::Monday,
        }
    }

    /// Full English name, used for serialization and conflict messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// ISO weekday number, Monday = 1 through Sunday = 7.
    pub fn number_from_monday(&self) -> u32 {
        match self {
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
            Weekday::Sunday => 7,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeekdayVisitor;

        impl de::Visitor<'_> for WeekdayVisitor {
            type Value = Weekday;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a weekday name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Weekday, E> {
                Ok(Weekday::parse(v))
            }
        }

        deserializer.deserialize_str(WeekdayVisitor)
    }
}

/// A single day-scoped time range.
///
/// Intervals are half-open: `start` is included, `end` is not. Callers are
/// responsible for enforcing `start < end` before admission; the engine
/// never silently swaps the endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Interval {
    pub fn new(day: Weekday, start: NaiveTime, end: NaiveTime) -> Self {
        Self { day, start, end }
    }

    /// Half-open intersection test on the time axis only. Back-to-back
    /// intervals, where one ends exactly when the other starts, do not
    /// overlap. Day scoping is the caller's concern.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when the intervals share a day and their time ranges intersect.
    pub fn conflicts_with(&self, other: &Interval) -> bool {
        self.day == other.day && self.overlaps(other)
    }
}
