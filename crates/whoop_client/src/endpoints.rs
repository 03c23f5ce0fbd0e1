//! URL builders for the WHOOP API endpoints used by this crate.
//!
//! Kept in one place so a vendor-side path change touches a single module.
//! Base URLs are parameters (not baked in) so tests can point the client at a
//! mock server.

/// Credential exchange host.
pub const DEFAULT_AUTH_BASE: &str = "https://api-7.whoop.com";
/// Data API host.
pub const DEFAULT_API_BASE: &str = "https://api.prod.whoop.com";
/// `apiVersion` query parameter appended to every data request.
pub const API_VERSION: &str = "7";

pub fn oauth_token(auth_base: &str) -> String {
    format!("{auth_base}/oauth/token")
}

pub fn cycles_range(api_base: &str, user_id: i64) -> String {
    format!("{api_base}/activities-service/v1/cycles/aggregate/range/{user_id}")
}

pub fn sleep_vow(api_base: &str, cycle_id: i64) -> String {
    format!("{api_base}/vow-service/v1/vows/sleep/1d/cycle/{cycle_id}")
}

pub fn recovery_vow(api_base: &str, cycle_id: i64) -> String {
    format!("{api_base}/vow-service/v1/vows/recovery/1d/cycle/{cycle_id}")
}

pub fn sleep_event(api_base: &str) -> String {
    format!("{api_base}/sleep-service/v1/sleep-events/v1-passthrough")
}

pub fn heart_rate(api_base: &str, user_id: i64) -> String {
    format!("{api_base}/metrics-service/v1/metrics/user/{user_id}")
}
