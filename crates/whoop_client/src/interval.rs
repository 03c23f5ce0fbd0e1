//! Structured time intervals parsed from the vendor's half-open range strings.
//!
//! WHOOP responses carry time ranges as strings of the form
//! `['<start>','<end>')`. They are parsed once at the endpoint boundary into
//! [`TimeInterval`]; nothing past the accessor manipulates raw range strings.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A half-open interval `[start, end)`.
///
/// The upper bound is open-ended (`None`) for the in-progress cycle, which
/// the vendor renders as `['<start>',)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Interval length in milliseconds, `None` while the upper bound is open.
    pub fn duration_ms(&self) -> Option<i64> {
        self.end.map(|end| (end - self.start).num_milliseconds())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseIntervalError(String);

impl fmt::Display for ParseIntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid interval string: {}", self.0)
    }
}

impl std::error::Error for ParseIntervalError {}

impl FromStr for TimeInterval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseIntervalError(s.to_string()))?;
        let (start, end) = inner
            .split_once(',')
            .ok_or_else(|| ParseIntervalError(s.to_string()))?;

        let start = parse_bound(start).ok_or_else(|| ParseIntervalError(s.to_string()))?;
        let end = end.trim().trim_matches('\'');
        let end = if end.is_empty() {
            None
        } else {
            Some(parse_bound(end).ok_or_else(|| ParseIntervalError(s.to_string()))?)
        };
        Ok(Self { start, end })
    }
}

fn parse_bound(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim().trim_matches('\'');
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

impl Serialize for TimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TimeInterval", 2)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for TimeInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IntervalVisitor;

        impl<'de> Visitor<'de> for IntervalVisitor {
            type Value = TimeInterval;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a half-open interval string or a {start, end} object")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut start: Option<DateTime<Utc>> = None;
                let mut end: Option<Option<DateTime<Utc>>> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "start" => start = Some(map.next_value()?),
                        "end" => end = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                let start = start.ok_or_else(|| de::Error::missing_field("start"))?;
                Ok(TimeInterval {
                    start,
                    end: end.unwrap_or(None),
                })
            }
        }

        deserializer.deserialize_any(IntervalVisitor)
    }
}
