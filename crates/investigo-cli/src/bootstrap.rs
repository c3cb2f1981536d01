//! Site catalog bootstrap: local cache first, remote download as fallback.

use anyhow::Context;
use investigo_core::{load_catalog, parse_catalog, AppConfig, Catalog};
use investigo_probe::ProbeClient;

/// Load the catalog from `config.catalog_path`, downloading it from
/// `config.catalog_url` when the cache is missing or unreadable, or when
/// `force_update` is set.
///
/// A downloaded catalog is validated before it replaces the cache. Failing to
/// write the cache is logged and does not stop the run.
///
/// # Errors
///
/// Returns an error when no usable catalog could be obtained. Nothing has
/// been probed at that point.
pub(crate) async fn ensure_catalog(
    client: &ProbeClient,
    config: &AppConfig,
    force_update: bool,
) -> anyhow::Result<Catalog> {
    let path = &config.catalog_path;

    if !force_update {
        match load_catalog(path) {
            Ok(catalog) => {
                tracing::debug!(path = %path.display(), sites = catalog.len(), "loaded local catalog");
                return Ok(catalog);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "local catalog unavailable");
                println!(
                    "-> Failed to read {} from current directory. Downloading...",
                    path.display()
                );
            }
        }
    }

    let url = config.catalog_url.as_str();
    let body = client
        .fetch_catalog(url)
        .await
        .with_context(|| format!("failed to download site catalog from {url}"))?;
    let catalog = parse_catalog(&body)
        .with_context(|| format!("site catalog downloaded from {url} is invalid"))?;

    if let Err(err) = std::fs::write(path, &body) {
        tracing::warn!(path = %path.display(), error = %err, "failed to update local catalog");
    } else {
        tracing::info!(path = %path.display(), sites = catalog.len(), "local catalog updated");
    }

    Ok(catalog)
}
