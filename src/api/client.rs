use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::endpoints::Endpoints;
use crate::api::error::ApiError;
use crate::api::response::{ApiResponse, BatchEntry};
use crate::config::HttpConfig;

/// Per-request overrides. Headers are merged over the JSON content-type default.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Defaults to GET.
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Exponential backoff settings for [`ApiService::fetch_with_retry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    /// Delay unit; attempt `n` waits `2^n` units.
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_base: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Delay after failed attempt `attempt` (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff_base.saturating_mul(2u32.saturating_pow(attempt))
    }
}

impl From<&HttpConfig> for RetryPolicy {
    fn from(http: &HttpConfig) -> Self {
        Self {
            max_retries: http.max_retries,
            backoff_base: Duration::from_millis(http.retry_backoff_base_ms),
        }
    }
}

/// HTTP client for the quotes service and the other public APIs.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiService {
    client: Client,
    pub(crate) endpoints: Endpoints,
    pub(crate) weather_lang: String,
    retry: RetryPolicy,
}

impl ApiService {
    pub fn new(endpoints: Endpoints, http: &HttpConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(http.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(http.connect_timeout_seconds)))
            .build()?;

        Ok(Self {
            client,
            endpoints,
            weather_lang: http.weather_lang.clone(),
            retry: RetryPolicy::from(http),
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Fetch `url` and decode the body as arbitrary JSON.
    pub async fn fetch_data(&self, url: &str, options: &RequestOptions) -> ApiResponse<Value> {
        self.fetch_json(url, options).await
    }

    /// Fetch `url` and decode the body into `T`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> ApiResponse<T> {
        match self.try_fetch(url, options).await {
            Ok(data) => ApiResponse::ok(data),
            Err(err) => {
                tracing::error!(url = %url, kind = err.kind(), error = %err, "API error");
                ApiResponse::failure(err.to_string())
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let method = options.method.clone().unwrap_or(Method::GET);
        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut builder = self
            .client
            .request(method, url)
            .headers(merged_headers(&options.headers)?);
        if let Some(body) = &options.body {
            builder = builder.body(serde_json::to_vec(body).map_err(ApiError::Encode)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetch every URL concurrently and report each outcome in input order.
    ///
    /// All requests are in flight before the first one is awaited. One
    /// failing request never affects the others.
    pub async fn batch_fetch<I, S>(&self, urls: I) -> Vec<BatchEntry>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pending: Vec<_> = urls
            .into_iter()
            .map(|url| {
                let url = url.into();
                let service = self.clone();
                let target = url.clone();
                let handle = tokio::spawn(async move {
                    service
                        .fetch_data(&target, &RequestOptions::default())
                        .await
                });
                (url, handle)
            })
            .collect();

        let mut entries = Vec::with_capacity(pending.len());
        for (url, handle) in pending {
            let entry = match handle.await {
                Ok(response) => BatchEntry::from_response(url, response),
                Err(join_err) => {
                    tracing::error!(url = %url, error = %join_err, "Batch fetch task failed");
                    BatchEntry::aborted(url, join_err.to_string())
                }
            };
            entries.push(entry);
        }
        entries
    }

    /// Fetch with up to `max_retries` sequential attempts and exponential
    /// backoff between them. A value of 0 still makes one attempt.
    pub async fn fetch_with_retry(
        &self,
        url: &str,
        options: &RequestOptions,
        max_retries: u32,
    ) -> ApiResponse<Value> {
        let attempts = max_retries.max(1);
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            let result = self.fetch_data(url, options).await;
            if result.success {
                return result;
            }
            last_error = result.error.unwrap_or_default();

            if attempt < attempts {
                let delay = self.retry.backoff_for(attempt);
                tracing::debug!(
                    url = %url,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying request"
                );
                tokio::time::sleep(delay).await;
            }
        }

        ApiResponse::failure(format!(
            "Failed after {} attempts: {}",
            attempts, last_error
        ))
    }

    /// [`fetch_with_retry`](Self::fetch_with_retry) using the configured attempt count.
    pub async fn fetch_with_default_retry(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> ApiResponse<Value> {
        self.fetch_with_retry(url, options, self.retry.max_retries)
            .await
    }
}

fn merged_headers(extra: &[(String, String)]) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in extra {
        let invalid = || ApiError::InvalidHeader { name: name.clone() };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
