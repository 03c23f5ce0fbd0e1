//! Public, normalized record types.
//!
//! Field names follow the documented schema rather than the vendor's raw
//! keys; all durations are milliseconds and energies stay in kilojoules as
//! provided (calorie conversion is the caller's business).

use crate::interval::TimeInterval;
use crate::raw;
use crate::sleep_stages::SleepStageSegment;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unified record for one physiological day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CycleRecord {
    pub cycle_id: i64,
    pub date: NaiveDate,
    pub during: TimeInterval,
    pub timezone_offset: Option<String>,
    /// `None` until the vendor has scored sleep for the cycle.
    pub recovery: Option<RecoveryMetrics>,
    pub sleep: Vec<SleepMetrics>,
    pub strain: StrainMetrics,
    pub workouts: Vec<WorkoutRecord>,
}

impl CycleRecord {
    /// Assemble a record from the independently fetched pieces. Strain and
    /// workouts are embedded in the cycle payload already; recovery and
    /// sleep are merged in by id.
    pub(crate) fn assemble(
        cycle: raw::RawCycle,
        recovery: Option<RecoveryMetrics>,
        sleep: Vec<SleepMetrics>,
    ) -> Self {
        Self {
            cycle_id: cycle.id,
            date: cycle.day,
            during: cycle.during,
            timezone_offset: cycle.timezone_offset,
            recovery,
            sleep,
            strain: StrainMetrics {
                day_strain: cycle.day_strain,
                avg_hr_bpm: cycle.day_avg_heart_rate,
                max_hr_bpm: cycle.day_max_heart_rate,
                kilojoules: cycle.day_kilojoules,
                intensity_score: cycle.intensity_score,
            },
            workouts: cycle.workouts.into_iter().map(WorkoutRecord::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecoveryMetrics {
    /// 0-100 readiness score, `None` while calibrating.
    pub score: Option<f64>,
    pub hrv_ms: Option<f64>,
    pub resting_hr_bpm: Option<i64>,
}

impl From<raw::RawRecovery> for RecoveryMetrics {
    fn from(raw: raw::RawRecovery) -> Self {
        Self {
            score: raw.recovery_score,
            // vendor reports RMSSD in seconds
            hrv_ms: raw.hrv_rmssd.map(|s| s * 1000.0),
            resting_hr_bpm: raw.resting_heart_rate,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SleepMetrics {
    pub activity_id: i64,
    pub score: Option<f64>,
    pub quality_duration_ms: Option<i64>,
    pub time_in_bed_ms: Option<i64>,
    pub efficiency_pct: Option<f64>,
    pub respiratory_rate: Option<f64>,
    pub disturbances: Option<i64>,
    pub latency_ms: Option<i64>,
    pub light_sleep_duration_ms: Option<i64>,
    pub slow_wave_sleep_duration_ms: Option<i64>,
    pub rem_sleep_duration_ms: Option<i64>,
    pub wake_duration_ms: Option<i64>,
    pub sleep_need_ms: Option<i64>,
    pub debt_pre_ms: Option<i64>,
    pub debt_post_ms: Option<i64>,
    pub during: TimeInterval,
}

impl From<raw::RawSleep> for SleepMetrics {
    fn from(raw: raw::RawSleep) -> Self {
        Self {
            activity_id: raw.id,
            score: raw.score,
            quality_duration_ms: raw.quality_duration,
            time_in_bed_ms: raw.time_in_bed,
            efficiency_pct: raw.sleep_efficiency,
            respiratory_rate: raw.respiratory_rate,
            disturbances: raw.disturbances,
            latency_ms: raw.latency,
            light_sleep_duration_ms: raw.light_sleep_duration,
            slow_wave_sleep_duration_ms: raw.slow_wave_sleep_duration,
            rem_sleep_duration_ms: raw.rem_sleep_duration,
            wake_duration_ms: raw.wake_duration,
            sleep_need_ms: raw.sleep_need,
            debt_pre_ms: raw.debt_pre,
            debt_post_ms: raw.debt_post,
            during: raw.during,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrainMetrics {
    /// 0-21 composite cardiovascular load for the day.
    pub day_strain: Option<f64>,
    pub avg_hr_bpm: Option<i64>,
    pub max_hr_bpm: Option<i64>,
    pub kilojoules: Option<f64>,
    pub intensity_score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WorkoutRecord {
    pub id: Option<i64>,
    /// Vendor sport code; `-1` means an unspecified/manual activity.
    pub sport_id: i64,
    pub sport_name: String,
    pub strain: Option<f64>,
    pub avg_hr: Option<i64>,
    pub max_hr: Option<i64>,
    pub kilojoules: Option<f64>,
    pub distance_m: Option<f64>,
    pub altitude_gain_m: Option<f64>,
    pub altitude_change_m: Option<f64>,
    pub during: TimeInterval,
    /// Zone index to duration in milliseconds.
    pub zone_duration_ms: Option<BTreeMap<u8, i64>>,
}

impl From<raw::RawWorkout> for WorkoutRecord {
    fn from(raw: raw::RawWorkout) -> Self {
        Self {
            id: raw.id,
            sport_id: raw.sport_id,
            sport_name: crate::sports::get_sport_name(raw.sport_id).to_string(),
            strain: raw.intensity_score,
            avg_hr: raw.average_heart_rate,
            max_hr: raw.max_heart_rate,
            kilojoules: raw.kilojoules,
            distance_m: raw.distance_meter,
            altitude_gain_m: raw.altitude_gain_meter,
            altitude_change_m: raw.altitude_change_meter,
            during: raw.during,
            zone_duration_ms: raw.zone_durations.map(|zones| {
                zones
                    .into_iter()
                    .enumerate()
                    .map(|(index, ms)| (index as u8, ms))
                    .collect()
            }),
        }
    }
}

/// One sample of the heart-rate time series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HeartRateSample {
    pub timestamp_ms: i64,
    pub heart_rate_bpm: i64,
}

/// Sleep stage timeline for one completed sleep activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepTimeline {
    pub date: NaiveDate,
    pub cycle_id: i64,
    pub activity_id: i64,
    pub data: Vec<SleepStageSegment>,
}
