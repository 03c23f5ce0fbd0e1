//! Client library for the WHOOP internal web API.
//!
//! Authenticates with username/password, then retrieves and reshapes
//! personal health metrics (sleep, heart rate, recovery, strain, workouts)
//! into JSON-friendly structures. The raw vendor payloads never leave this
//! crate: field names and units are normalized at the boundary.

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

pub mod config;
pub mod endpoints;
pub mod http_client;
pub mod interval;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod raw;
pub mod retry;
pub mod sleep_stages;
pub mod sports;

pub use config::{Config, Credentials};
pub use interval::TimeInterval;
pub use models::{
    CycleRecord, HeartRateSample, RecoveryMetrics, SleepMetrics, SleepTimeline, StrainMetrics,
    WorkoutRecord,
};
pub use pipeline::{DateRange, get_cycle_data, get_heart_rate_data, get_sleep_data};
pub use sleep_stages::{SleepStage, SleepStageSegment, extract_sleep_stages};
pub use sports::get_sport_name;

#[derive(Debug, Error)]
pub enum WhoopError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("api error at {endpoint} (status {status}): {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bearer token and user id obtained from the credential exchange.
///
/// Created once per client lifetime and read-only thereafter; there is no
/// refresh logic.
#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: i64,
    pub token: SecretString,
}

/// Raw per-endpoint access to the WHOOP API.
///
/// The aggregation pipeline in [`pipeline`] is generic over this trait, so
/// tests and alternative transports can stand in for the reqwest client.
/// Missing sub-resources (recovery or sleep not yet scored by the vendor)
/// surface as `None`/empty, never as errors.
#[async_trait]
pub trait WhoopApi: Send + Sync {
    fn session(&self) -> &Session;

    /// One page of cycles overlapping the range. `page_token` comes from the
    /// previous page's `next_token`.
    async fn fetch_cycle_page(
        &self,
        range: &DateRange,
        page_token: Option<&str>,
    ) -> Result<raw::CyclePage, WhoopError>;

    /// Sleep summaries for a cycle; empty when the vendor has not scored
    /// sleep for it yet.
    async fn fetch_sleep_vow(&self, cycle_id: i64) -> Result<Vec<raw::RawSleep>, WhoopError>;

    /// Recovery summary for a cycle; `None` until sleep is scored.
    async fn fetch_recovery_vow(
        &self,
        cycle_id: i64,
    ) -> Result<Option<raw::RawRecovery>, WhoopError>;

    /// Detailed sleep activity payload, including the stage timeline.
    async fn fetch_sleep_event(&self, activity_id: i64)
    -> Result<raw::RawSleepEvent, WhoopError>;

    /// Heart rate samples across the range at the given step granularity.
    async fn fetch_heart_rate(
        &self,
        range: &DateRange,
        step_seconds: u32,
    ) -> Result<raw::RawHeartRate, WhoopError>;
}
