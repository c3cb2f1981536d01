use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    /// DNS, connect, TLS, timeout, or body-read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog download from {url} returned HTTP {status}")]
    CatalogDownload { url: String, status: u16 },
}
