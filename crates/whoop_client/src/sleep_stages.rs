//! Extraction of discrete sleep stage timelines from raw sleep activity
//! payloads.

use crate::interval::TimeInterval;
use crate::raw::RawSleepEvent;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A sleep stage code.
///
/// Unrecognized vendor codes are carried through [`SleepStage::Other`]
/// verbatim instead of failing, so new stage types don't break callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SleepStage {
    Latency,
    Light,
    Sws,
    Rem,
    Wake,
    Disturbances,
    Other(String),
}

impl SleepStage {
    pub fn from_code(code: &str) -> Self {
        match code {
            "LATENCY" => Self::Latency,
            "LIGHT" => Self::Light,
            "SWS" => Self::Sws,
            "REM" => Self::Rem,
            "WAKE" => Self::Wake,
            "DISTURBANCES" => Self::Disturbances,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Latency => "LATENCY",
            Self::Light => "LIGHT",
            Self::Sws => "SWS",
            Self::Rem => "REM",
            Self::Wake => "WAKE",
            Self::Disturbances => "DISTURBANCES",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for SleepStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SleepStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SleepStage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

/// One segment of the sleep stage timeline, with a half-open `[start, end)`
/// interval.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepStageSegment {
    #[serde(rename = "type")]
    pub stage: SleepStage,
    pub during: TimeInterval,
}

/// Parse a sleep activity payload into its ordered stage timeline.
///
/// Segments come back sorted by start time. Adjacent segments of the same
/// type are preserved verbatim, never merged: the vendor emits them
/// deliberately. An empty event list yields an empty timeline.
pub fn extract_sleep_stages(event: &RawSleepEvent) -> Vec<SleepStageSegment> {
    let mut segments: Vec<SleepStageSegment> = event
        .events
        .iter()
        .map(|raw| SleepStageSegment {
            stage: SleepStage::from_code(&raw.kind),
            during: raw.during,
        })
        .collect();
    segments.sort_by_key(|segment| segment.during.start);
    segments
}
