//! Time-windowed aggregation of cycle, sleep, recovery, strain and workout
//! data into unified records.
//!
//! All operations take a validated [`DateRange`] and a [`WhoopApi`]
//! implementation. Per-cycle sub-fetches are issued sequentially; any
//! irrecoverable sub-fetch failure fails the whole call, so callers never
//! see a partial result list.

use crate::models::{
    CycleRecord, HeartRateSample, RecoveryMetrics, SleepMetrics, SleepTimeline,
};
use crate::sleep_stages::extract_sleep_stages;
use crate::{WhoopApi, WhoopError, raw};
use chrono::{Duration, NaiveDate, Utc};
use std::collections::HashSet;

/// Inclusive calendar date range. Construction enforces `start <= end`, so a
/// reversed range fails before any network call is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WhoopError> {
        if start > end {
            return Err(WhoopError::Config(format!(
                "invalid date range: start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Default window: the last 7 days ending today.
    pub fn last_week() -> Self {
        let end = Utc::now().date_naive();
        Self {
            start: end - Duration::days(7),
            end,
        }
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Range start as the ISO timestamp the vendor expects.
    pub fn start_param(&self) -> String {
        format!("{}T00:00:00.000Z", self.start)
    }

    /// Range end, pushed to the end of the day so the range is inclusive.
    pub fn end_param(&self) -> String {
        format!("{}T23:59:59.999Z", self.end)
    }
}

/// Lazily drains the vendor-side pagination of the cycles endpoint.
///
/// Keeps at most one page in memory; the pipeline pulls pages until the
/// vendor stops returning a cursor.
struct CyclePager<'a, C: WhoopApi + ?Sized> {
    client: &'a C,
    range: &'a DateRange,
    next_token: Option<String>,
    done: bool,
}

impl<'a, C: WhoopApi + ?Sized> CyclePager<'a, C> {
    fn new(client: &'a C, range: &'a DateRange) -> Self {
        Self {
            client,
            range,
            next_token: None,
            done: false,
        }
    }

    async fn next_page(&mut self) -> Result<Option<Vec<raw::RawCycle>>, WhoopError> {
        if self.done {
            return Ok(None);
        }
        let page = self
            .client
            .fetch_cycle_page(self.range, self.next_token.as_deref())
            .await?;
        self.next_token = page.next_token;
        if self.next_token.is_none() {
            self.done = true;
        }
        tracing::debug!(cycles = page.records.len(), more = !self.done, "fetched cycle page");
        Ok(Some(page.records))
    }
}

/// Fetch and assemble one [`CycleRecord`] per physiological day in `range`,
/// ordered by date ascending.
///
/// Recovery and sleep not yet computed by the vendor come back as
/// `None`/empty rather than failing the batch. Duplicate cycle ids across
/// pages are dropped (first occurrence wins).
pub async fn get_cycle_data<C: WhoopApi + ?Sized>(
    client: &C,
    range: &DateRange,
) -> Result<Vec<CycleRecord>, WhoopError> {
    tracing::debug!(start = %range.start(), end = %range.end(), "fetching cycle data");

    let mut pager = CyclePager::new(client, range);
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    while let Some(cycles) = pager.next_page().await? {
        for cycle in cycles {
            if !seen.insert(cycle.id) {
                continue;
            }
            let recovery = client
                .fetch_recovery_vow(cycle.id)
                .await?
                .map(RecoveryMetrics::from);
            let sleep: Vec<SleepMetrics> = client
                .fetch_sleep_vow(cycle.id)
                .await?
                .into_iter()
                .map(SleepMetrics::from)
                .collect();
            records.push(CycleRecord::assemble(cycle, recovery, sleep));
        }
    }

    records.sort_by_key(|record| record.date);
    tracing::info!(cycles = records.len(), "assembled cycle records");
    Ok(records)
}

/// Step granularities the vendor documents; other values are passed through
/// and may be rejected upstream.
const DOCUMENTED_STEPS: [u32; 3] = [6, 60, 600];

/// Fetch heart rate samples across `range` at `step_seconds` granularity,
/// in chronological order. Gaps (sensor not worn) are omitted, not
/// null-padded.
pub async fn get_heart_rate_data<C: WhoopApi + ?Sized>(
    client: &C,
    range: &DateRange,
    step_seconds: u32,
) -> Result<Vec<HeartRateSample>, WhoopError> {
    if !DOCUMENTED_STEPS.contains(&step_seconds) {
        tracing::warn!(
            step_seconds,
            "step is outside the documented granularities (6, 60, 600); the vendor may reject it"
        );
    }
    let payload = client.fetch_heart_rate(range, step_seconds).await?;
    let samples: Vec<HeartRateSample> = payload
        .times
        .into_iter()
        .zip(payload.values)
        .filter_map(|(timestamp_ms, value)| {
            value.map(|bpm| HeartRateSample {
                timestamp_ms,
                heart_rate_bpm: bpm.round() as i64,
            })
        })
        .collect();
    tracing::debug!(samples = samples.len(), "fetched heart rate series");
    Ok(samples)
}

/// Fetch the sleep stage timeline for every completed sleep activity in
/// `range`. Cycles without completed sleep are omitted entirely.
pub async fn get_sleep_data<C: WhoopApi + ?Sized>(
    client: &C,
    range: &DateRange,
) -> Result<Vec<SleepTimeline>, WhoopError> {
    tracing::debug!(start = %range.start(), end = %range.end(), "fetching sleep data");

    let mut pager = CyclePager::new(client, range);
    let mut seen = HashSet::new();
    let mut timelines = Vec::new();

    while let Some(cycles) = pager.next_page().await? {
        for cycle in cycles {
            if !seen.insert(cycle.id) {
                continue;
            }
            for sleep in client.fetch_sleep_vow(cycle.id).await? {
                let event = client.fetch_sleep_event(sleep.id).await?;
                timelines.push(SleepTimeline {
                    date: cycle.day,
                    cycle_id: cycle.id,
                    activity_id: sleep.id,
                    data: extract_sleep_stages(&event),
                });
            }
        }
    }

    timelines.sort_by_key(|timeline| timeline.date);
    tracing::info!(timelines = timelines.len(), "extracted sleep timelines");
    Ok(timelines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reversed_range_is_a_config_error() {
        let res = DateRange::new(date(2025, 10, 2), date(2025, 10, 1));
        assert!(matches!(res, Err(WhoopError::Config(_))));
    }

    #[test]
    fn single_day_range_is_valid() {
        let range = DateRange::new(date(2025, 10, 1), date(2025, 10, 1)).unwrap();
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn range_params_span_whole_days() {
        let range = DateRange::new(date(2025, 10, 1), date(2025, 10, 3)).unwrap();
        assert_eq!(range.start_param(), "2025-10-01T00:00:00.000Z");
        assert_eq!(range.end_param(), "2025-10-03T23:59:59.999Z");
    }

    #[test]
    fn last_week_spans_seven_days() {
        let range = DateRange::last_week();
        assert_eq!(range.end() - range.start(), Duration::days(7));
    }
}
