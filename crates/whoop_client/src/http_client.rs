//! HTTP client implementation for the WHOOP API.
//!
//! This module provides a reqwest-based implementation of the
//! [`WhoopApi`](crate::WhoopApi) trait, plus the credential exchange that
//! produces the [`Session`](crate::Session).

use crate::config::Config;
use crate::pipeline::DateRange;
use crate::retry::RetryPolicy;
use crate::{Session, WhoopApi, WhoopError, endpoints, raw};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Client for the WHOOP API using reqwest.
#[derive(Debug)]
pub struct ReqwestWhoopClient {
    api_base_url: String,
    client: reqwest::Client,
    session: Session,
    retry: RetryPolicy,
}

impl ReqwestWhoopClient {
    /// Exchange credentials for a bearer token and user id.
    ///
    /// One network call; a rejected exchange is fatal to the caller
    /// ([`WhoopError::Auth`]). The token is held for the lifetime of the
    /// returned client and never refreshed.
    pub async fn login(config: Config) -> Result<Self, WhoopError> {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");

        let url = endpoints::oauth_token(config.auth_base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "grant_type": "password",
            "issueRefresh": false,
            "username": config.credentials.username,
            "password": config.credentials.password.expose_secret(),
        });
        let resp = client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(256).collect();
            return Err(WhoopError::Auth(format!(
                "credential exchange rejected (status {}): {snippet}",
                status.as_u16()
            )));
        }

        #[derive(Deserialize)]
        struct AuthPayload {
            access_token: String,
            user: AuthUser,
        }
        #[derive(Deserialize)]
        struct AuthUser {
            id: i64,
        }

        let payload: AuthPayload = resp.json().await?;
        tracing::info!(user_id = payload.user.id, "authenticated with WHOOP");

        Ok(Self {
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
            session: Session {
                user_id: payload.user.id,
                token: SecretString::new(payload.access_token.into()),
            },
            retry: RetryPolicy::default(),
        })
    }

    /// Send an authenticated GET, retrying once on transient transport
    /// failure. `apiVersion` is appended to every request.
    async fn send_get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, WhoopError> {
        let resp = self
            .retry
            .retry_async_if(
                || {
                    self.client
                        .get(url)
                        .query(query)
                        .query(&[("apiVersion", endpoints::API_VERSION)])
                        .bearer_auth(self.session.token.expose_secret())
                        .send()
                },
                is_transient,
            )
            .await?;
        Ok(resp)
    }

    /// Execute a GET and expect a JSON response.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: Vec<(&str, String)>,
    ) -> Result<T, WhoopError> {
        let resp = self.send_get(&url, &query).await?;
        self.handle_response(resp, &url).await
    }

    /// Execute a GET where the resource may legitimately not exist yet;
    /// a 404 maps to `None` instead of an error.
    async fn get_json_optional<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: Vec<(&str, String)>,
    ) -> Result<Option<T>, WhoopError> {
        let resp = self.send_get(&url, &query).await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            tracing::debug!(endpoint = %url, "sub-resource not available yet");
            return Ok(None);
        }
        self.handle_response(resp, &url).await.map(Some)
    }

    /// Handle a response, converting non-success status codes to `Api` errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
        endpoint: &str,
    ) -> Result<T, WhoopError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(error_from_response(endpoint, resp).await);
        }
        Ok(resp.json::<T>().await?)
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}

/// Extract error information from a failed response.
async fn error_from_response(endpoint: &str, resp: reqwest::Response) -> WhoopError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let body_snippet: String = body.chars().take(256).collect();
    WhoopError::Api {
        endpoint: endpoint.to_string(),
        status,
        body: body_snippet,
    }
}

#[async_trait]
impl WhoopApi for ReqwestWhoopClient {
    fn session(&self) -> &Session {
        &self.session
    }

    async fn fetch_cycle_page(
        &self,
        range: &DateRange,
        page_token: Option<&str>,
    ) -> Result<raw::CyclePage, WhoopError> {
        let url = endpoints::cycles_range(&self.api_base_url, self.session.user_id);
        let mut query: Vec<(&str, String)> = vec![
            ("startTime", range.start_param()),
            ("endTime", range.end_param()),
            ("limit", "26".to_string()),
        ];
        if let Some(token) = page_token {
            query.push(("nextToken", token.to_string()));
        }
        self.get_json(url, query).await
    }

    async fn fetch_sleep_vow(&self, cycle_id: i64) -> Result<Vec<raw::RawSleep>, WhoopError> {
        let url = endpoints::sleep_vow(&self.api_base_url, cycle_id);
        let vow: Option<raw::RawSleepVow> = self.get_json_optional(url, Vec::new()).await?;
        Ok(vow.map(|v| v.sleeps).unwrap_or_default())
    }

    async fn fetch_recovery_vow(
        &self,
        cycle_id: i64,
    ) -> Result<Option<raw::RawRecovery>, WhoopError> {
        let url = endpoints::recovery_vow(&self.api_base_url, cycle_id);
        self.get_json_optional(url, Vec::new()).await
    }

    async fn fetch_sleep_event(
        &self,
        activity_id: i64,
    ) -> Result<raw::RawSleepEvent, WhoopError> {
        let url = endpoints::sleep_event(&self.api_base_url);
        let query = vec![("activityId", activity_id.to_string())];
        self.get_json(url, query).await
    }

    async fn fetch_heart_rate(
        &self,
        range: &DateRange,
        step_seconds: u32,
    ) -> Result<raw::RawHeartRate, WhoopError> {
        let url = endpoints::heart_rate(&self.api_base_url, self.session.user_id);
        let query: Vec<(&str, String)> = vec![
            ("start", range.start_param()),
            ("end", range.end_param()),
            ("name", "heart_rate".to_string()),
            ("order", "t".to_string()),
            ("step", step_seconds.to_string()),
        ];
        self.get_json(url, query).await
    }
}
