//! Fan-out coordinator: probes every catalog site for one username.
//!
//! Probes for a username run concurrently and are polled from the calling
//! task, so verdicts reach the sink one at a time in completion order.
//! [`run_username`] returns only after every site has produced a verdict,
//! which is the barrier between consecutive usernames.

use futures::stream::{self, StreamExt};
use investigo_core::{Catalog, DetectionStrategy, SiteTemplate};

use crate::client::ProbeClient;
use crate::request::build_target;
use crate::verdict::{classify, Verdict};

/// Consumer of (site, verdict) pairs.
pub trait VerdictSink {
    fn emit(&mut self, site: &str, verdict: &Verdict);
}

impl VerdictSink for Vec<(String, Verdict)> {
    fn emit(&mut self, site: &str, verdict: &Verdict) {
        self.push((site.to_owned(), verdict.clone()));
    }
}

/// Verdict counts for one username batch. The total equals the catalog size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub found: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl BatchSummary {
    fn record(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Found { .. } => self.found += 1,
            Verdict::NotFound { .. } => self.not_found += 1,
            Verdict::Error { .. } => self.errors += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.found + self.not_found + self.errors
    }
}

impl ProbeClient {
    /// Probe `site` for `username` and classify the result.
    ///
    /// Never fails: transport errors and unsupported strategies come back as
    /// [`Verdict::Error`]. Unsupported strategies are reported without any
    /// network traffic, so an unreachable site with such a strategy reports
    /// the unsupported message and never its transport error.
    pub async fn investigate(&self, site: &SiteTemplate, username: &str) -> Verdict {
        if let DetectionStrategy::Unsupported(raw) = &site.detection {
            tracing::debug!(site = %site.name, error_type = %raw, "unsupported detection strategy");
            return Verdict::unsupported();
        }

        let target = build_target(username, site);
        match self
            .probe(&target.probe_url, site.detection.needs_body())
            .await
        {
            Ok(response) => classify(&response, site, &target.canonical_url),
            Err(err) => {
                tracing::warn!(
                    site = %site.name,
                    url = %target.probe_url,
                    error = %err,
                    "probe failed"
                );
                Verdict::error(err.to_string())
            }
        }
    }
}

/// Probe every site in `catalog` for `username`, emitting each verdict to
/// `sink` as it completes.
///
/// `max_concurrent` caps in-flight probes; `0` allows one per catalog entry.
/// A slow or failing site only holds its own slot.
pub async fn run_username(
    client: &ProbeClient,
    catalog: &Catalog,
    username: &str,
    max_concurrent: usize,
    sink: &mut dyn VerdictSink,
) -> BatchSummary {
    let slots = if max_concurrent == 0 {
        catalog.len()
    } else {
        max_concurrent
    }
    .max(1);

    tracing::info!(username, sites = catalog.len(), slots, "starting batch");

    let mut verdicts = stream::iter(catalog.iter())
        .map(|site| async move { (site, client.investigate(site, username).await) })
        .buffer_unordered(slots);

    let mut summary = BatchSummary::default();
    while let Some((site, verdict)) = verdicts.next().await {
        summary.record(&verdict);
        sink.emit(&site.name, &verdict);
    }

    tracing::info!(
        username,
        found = summary.found,
        not_found = summary.not_found,
        errors = summary.errors,
        "batch complete"
    );

    summary
}
