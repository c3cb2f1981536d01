//! Verdict engine: classifies a probe response under the site's detection
//! strategy.

use investigo_core::{DetectionStrategy, SiteTemplate};
use reqwest::Url;

use crate::client::ProbeResponse;

pub const NOT_FOUND_MESSAGE: &str = "Not Found!";
pub const UNSUPPORTED_MESSAGE: &str = "unsupported error type";

/// Classified outcome of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Found { link: String },
    NotFound { message: String },
    Error { message: String },
}

impl Verdict {
    #[must_use]
    pub fn found(link: impl Into<String>) -> Self {
        Verdict::Found { link: link.into() }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Verdict::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Verdict::Error {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unsupported() -> Self {
        Self::error(UNSUPPORTED_MESSAGE)
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Verdict::Found { .. })
    }

    /// Profile link for found verdicts, message otherwise.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Verdict::Found { link } => link,
            Verdict::NotFound { message } | Verdict::Error { message } => message,
        }
    }
}

/// Status acceptance window shared by the status-code and response-URL
/// strategies.
///
/// Kept as `status <= 300 || status < 200`; the second clause never adds
/// anything for real status codes, so this is `status <= 300`. 300 is found,
/// 301 is not.
#[must_use]
#[allow(clippy::nonminimal_bool)]
pub fn status_accepted(status: u16) -> bool {
    status <= 300 || status < 200
}

/// URL equality after parsing, so reqwest's normalization (lowercased scheme
/// and host, `/` for an empty path) does not count as a redirect. Unparseable
/// input falls back to comparing the raw strings.
fn same_url(final_url: &str, canonical_url: &str) -> bool {
    match (Url::parse(final_url), Url::parse(canonical_url)) {
        (Ok(a), Ok(b)) => a == b,
        _ => final_url == canonical_url,
    }
}

/// Classify `response` for `site`. `canonical_url` becomes the found link.
#[must_use]
pub fn classify(response: &ProbeResponse, site: &SiteTemplate, canonical_url: &str) -> Verdict {
    let exists = match &site.detection {
        DetectionStrategy::StatusCode => status_accepted(response.status),
        DetectionStrategy::BodyMessage => {
            let body = response.body.as_deref().unwrap_or_default();
            !body.contains(site.error_msg.as_str())
        }
        DetectionStrategy::ResponseUrl => {
            same_url(&response.final_url, canonical_url) && status_accepted(response.status)
        }
        DetectionStrategy::Unsupported(_) => return Verdict::unsupported(),
    };

    if exists {
        Verdict::found(canonical_url)
    } else {
        Verdict::not_found()
    }
}

#[cfg(test)]
#[path = "verdict_test.rs"]
mod tests;
