//! HTTP prober: one GET per call with a fixed browser identity.

use std::time::Duration;

use investigo_core::AppConfig;
use reqwest::{Client, StatusCode};

use crate::error::ProbeError;

/// Raw signals the verdict engine inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    /// Request URL after redirects were followed.
    pub final_url: String,
    /// Present only when the caller asked for it.
    pub body: Option<String>,
}

/// Shared HTTP client for probes and catalog downloads.
///
/// Redirects follow reqwest's default policy. No cookie store is kept, so
/// nothing persists between requests. No retries.
#[derive(Debug, Clone)]
pub struct ProbeClient {
    client: Client,
}

impl ProbeClient {
    /// Creates a `ProbeClient` sending `user_agent` on every request.
    ///
    /// A timeout of `0` leaves that deadline unset.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        request_timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ProbeError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(request_timeout_secs));
        }
        if connect_timeout_secs > 0 {
            builder = builder.connect_timeout(Duration::from_secs(connect_timeout_secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// # Errors
    ///
    /// See [`ProbeClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ProbeError> {
        Self::new(
            config.request_timeout_secs,
            config.connect_timeout_secs,
            &config.user_agent,
        )
    }

    /// Issues a single GET to `url`.
    ///
    /// Any HTTP status is a successful probe; only transport failures are
    /// errors. The body is buffered only when `read_body` is set, otherwise
    /// the response is released unread.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Http`] on an unparseable URL, DNS/connect/TLS
    /// failure, deadline expiry, or a failed body read.
    pub async fn probe(&self, url: &str, read_body: bool) -> Result<ProbeResponse, ProbeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();

        let body = if read_body {
            Some(response.text().await?)
        } else {
            drop(response);
            None
        };

        tracing::debug!(url, status, final_url = %final_url, "probe completed");

        Ok(ProbeResponse {
            status,
            final_url,
            body,
        })
    }

    /// Downloads the raw catalog JSON from `url`.
    ///
    /// # Errors
    ///
    /// - [`ProbeError::CatalogDownload`]: any status other than 200.
    /// - [`ProbeError::Http`]: network or TLS failure.
    pub async fn fetch_catalog(&self, url: &str) -> Result<String, ProbeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProbeError::CatalogDownload {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}
