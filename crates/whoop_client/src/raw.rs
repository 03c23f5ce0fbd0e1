//! Vendor-shaped payloads, deserialized verbatim from the API.
//!
//! These keep the vendor's key names and units; conversion to the stable
//! public schema in [`crate::models`] happens in the pipeline. Optional
//! fields default to `None` rather than failing, since the vendor omits
//! metrics it has not computed yet.

use crate::interval::TimeInterval;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// One page of the cycles-by-range endpoint.
///
/// The vendor returns either a bare array (final or only page) or an object
/// wrapping `records` with a `next_token` cursor.
#[derive(Clone, Debug)]
pub struct CyclePage {
    pub records: Vec<RawCycle>,
    pub next_token: Option<String>,
}

impl<'de> Deserialize<'de> for CyclePage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Payload {
            Paged {
                records: Vec<RawCycle>,
                #[serde(default)]
                next_token: Option<String>,
            },
            Plain(Vec<RawCycle>),
        }

        Ok(match Payload::deserialize(deserializer)? {
            Payload::Paged {
                records,
                next_token,
            } => CyclePage {
                records,
                next_token,
            },
            Payload::Plain(records) => CyclePage {
                records,
                next_token: None,
            },
        })
    }
}

/// A physiological day as the aggregate endpoint reports it. Strain and
/// workouts are embedded; recovery and sleep come from separate vow calls.
#[derive(Clone, Debug, Deserialize)]
pub struct RawCycle {
    pub id: i64,
    pub day: NaiveDate,
    pub during: TimeInterval,
    #[serde(default)]
    pub timezone_offset: Option<String>,
    #[serde(default)]
    pub day_strain: Option<f64>,
    #[serde(default)]
    pub day_avg_heart_rate: Option<i64>,
    #[serde(default)]
    pub day_max_heart_rate: Option<i64>,
    #[serde(default)]
    pub day_kilojoules: Option<f64>,
    #[serde(default)]
    pub intensity_score: Option<f64>,
    #[serde(default)]
    pub workouts: Vec<RawWorkout>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawWorkout {
    #[serde(default)]
    pub id: Option<i64>,
    pub sport_id: i64,
    #[serde(default)]
    pub intensity_score: Option<f64>,
    #[serde(default)]
    pub average_heart_rate: Option<i64>,
    #[serde(default)]
    pub max_heart_rate: Option<i64>,
    #[serde(default)]
    pub kilojoules: Option<f64>,
    #[serde(default)]
    pub distance_meter: Option<f64>,
    #[serde(default)]
    pub altitude_gain_meter: Option<f64>,
    #[serde(default)]
    pub altitude_change_meter: Option<f64>,
    pub during: TimeInterval,
    /// Duration per heart-rate zone, positional by zone index, milliseconds.
    #[serde(default)]
    pub zone_durations: Option<Vec<i64>>,
}

/// Envelope of the sleep vow endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawSleepVow {
    #[serde(default)]
    pub sleeps: Vec<RawSleep>,
}

/// One scored sleep activity. Durations are already milliseconds.
#[derive(Clone, Debug, Deserialize)]
pub struct RawSleep {
    pub id: i64,
    #[serde(default)]
    pub cycle_id: Option<i64>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub quality_duration: Option<i64>,
    #[serde(default)]
    pub time_in_bed: Option<i64>,
    #[serde(default)]
    pub sleep_efficiency: Option<f64>,
    #[serde(default)]
    pub respiratory_rate: Option<f64>,
    #[serde(default)]
    pub disturbances: Option<i64>,
    #[serde(default)]
    pub latency: Option<i64>,
    #[serde(default)]
    pub light_sleep_duration: Option<i64>,
    #[serde(default)]
    pub slow_wave_sleep_duration: Option<i64>,
    #[serde(default)]
    pub rem_sleep_duration: Option<i64>,
    #[serde(default)]
    pub wake_duration: Option<i64>,
    #[serde(default)]
    pub sleep_need: Option<i64>,
    #[serde(default)]
    pub debt_pre: Option<i64>,
    #[serde(default)]
    pub debt_post: Option<i64>,
    pub during: TimeInterval,
}

/// Recovery vow payload. `hrv_rmssd` arrives in seconds.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRecovery {
    #[serde(default)]
    pub cycle_id: Option<i64>,
    #[serde(default)]
    pub recovery_score: Option<f64>,
    #[serde(default)]
    pub hrv_rmssd: Option<f64>,
    #[serde(default)]
    pub resting_heart_rate: Option<i64>,
}

/// Detailed sleep activity payload with the stage timeline.
#[derive(Clone, Debug, Deserialize)]
pub struct RawSleepEvent {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub during: Option<TimeInterval>,
    #[serde(default)]
    pub events: Vec<RawStageEvent>,
}

/// One stage segment as the vendor emits it. The stage code is kept as a
/// string here so unrecognized codes survive untouched.
#[derive(Clone, Debug, Deserialize)]
pub struct RawStageEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub during: TimeInterval,
}

/// Heart rate metrics payload: parallel arrays of timestamps (epoch ms) and
/// samples. A `null` sample means the sensor was not worn at that step.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawHeartRate {
    #[serde(default)]
    pub times: Vec<i64>,
    #[serde(default)]
    pub values: Vec<Option<f64>>,
}
