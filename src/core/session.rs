use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::core::ratelimit::RateLimiter;
use crate::utils::error::Result;

/// Shared HTTP session: one connection pool plus the rate limiter scoped to it.
///
/// The session does no retrying and no status interpretation; non-2xx
/// responses are returned as-is for the caller to handle.
#[derive(Debug, Default)]
pub struct SessionClient {
    http: Client,
    limiter: RateLimiter,
}

impl SessionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Issues a GET. When `rate_limit` names a bucket, one token is consumed
    /// before the request goes out; an exhausted bucket fails the call
    /// without touching the network.
    pub async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        rate_limit: Option<&str>,
    ) -> Result<Response> {
        if let Some(bucket) = rate_limit {
            self.limiter.try_consume(bucket)?;
        }
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).headers(headers.clone()).send().await?;
        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Issues a POST with a JSON body. Peoplehub POSTs are unthrottled, so
    /// there is no rate-limit parameter here.
    pub async fn post_json(&self, url: &str, body: &Value, headers: &HeaderMap) -> Result<Response> {
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .headers(headers.clone())
            .json(body)
            .send()
            .await?;
        tracing::debug!("Response status: {}", response.status());
        Ok(response)
    }
}
