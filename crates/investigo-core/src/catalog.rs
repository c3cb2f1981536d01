//! Site catalog: the immutable mapping from site name to [`SiteTemplate`].
//!
//! The on-disk format is a JSON object keyed by site name. Each entry carries
//! the profile URL pattern, an optional probe URL pattern, the detection
//! strategy (`errorType`) and the not-found marker used by body inspection
//! (`errorMsg`). Extra fields such as `regexCheck` or `rank` are ignored.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Token in URL patterns that is replaced by the username.
pub const USERNAME_PLACEHOLDER: &str = "{}";

/// How a probe response is interpreted.
///
/// Unknown catalog values are kept as [`DetectionStrategy::Unsupported`] so
/// the site still loads and reports an error verdict when probed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DetectionStrategy {
    StatusCode,
    BodyMessage,
    ResponseUrl,
    Unsupported(String),
}

impl DetectionStrategy {
    /// Whether the response body must be read to classify the probe.
    #[must_use]
    pub fn needs_body(&self) -> bool {
        matches!(self, DetectionStrategy::BodyMessage)
    }
}

impl From<String> for DetectionStrategy {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "status_code" => DetectionStrategy::StatusCode,
            "message" => DetectionStrategy::BodyMessage,
            "response_url" => DetectionStrategy::ResponseUrl,
            _ => DetectionStrategy::Unsupported(raw),
        }
    }
}

impl std::fmt::Display for DetectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionStrategy::StatusCode => write!(f, "status_code"),
            DetectionStrategy::BodyMessage => write!(f, "message"),
            DetectionStrategy::ResponseUrl => write!(f, "response_url"),
            DetectionStrategy::Unsupported(raw) => write!(f, "{raw}"),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteTemplate {
    pub name: String,
    /// Profile URL pattern shown to the user.
    pub url: String,
    /// Pattern actually fetched when it differs from `url`.
    pub url_probe: Option<String>,
    pub detection: DetectionStrategy,
    /// Substring that marks a "not found" page for [`DetectionStrategy::BodyMessage`].
    pub error_msg: String,
    /// Site home page, used only for the sites listing.
    pub url_main: Option<String>,
}

impl SiteTemplate {
    /// Convenience constructor for templates without a probe URL or home page.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        detection: DetectionStrategy,
        error_msg: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            url_probe: None,
            detection,
            error_msg: error_msg.into(),
            url_main: None,
        }
    }

    #[must_use]
    pub fn with_probe_url(mut self, url_probe: impl Into<String>) -> Self {
        self.url_probe = Some(url_probe.into());
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SiteEntry {
    url: String,
    #[serde(default)]
    url_probe: Option<String>,
    #[serde(default)]
    url_main: Option<String>,
    /// Kept raw so a missing or non-string value still loads as unsupported.
    #[serde(default)]
    error_type: Option<serde_json::Value>,
    #[serde(default)]
    error_msg: Option<String>,
}

fn detection_from_raw(raw: Option<serde_json::Value>) -> DetectionStrategy {
    match raw {
        Some(serde_json::Value::String(s)) => DetectionStrategy::from(s),
        Some(serde_json::Value::Null) | None => DetectionStrategy::Unsupported(String::new()),
        Some(other) => DetectionStrategy::Unsupported(other.to_string()),
    }
}

/// Read-only set of site templates, iterated in site-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sites: BTreeMap<String, SiteTemplate>,
}

impl Catalog {
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SiteTemplate> {
        self.sites.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SiteTemplate> {
        self.sites.values()
    }
}

impl FromIterator<SiteTemplate> for Catalog {
    fn from_iter<I: IntoIterator<Item = SiteTemplate>>(iter: I) -> Self {
        Self {
            sites: iter
                .into_iter()
                .map(|site| (site.name.clone(), site))
                .collect(),
        }
    }
}

/// Parse and validate catalog JSON.
///
/// # Errors
///
/// Returns [`ConfigError::CatalogParse`] for malformed JSON and
/// [`ConfigError::Validation`] if the catalog is empty or an entry has a
/// blank `url`.
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let entries: BTreeMap<String, SiteEntry> = serde_json::from_str(content)?;

    if entries.is_empty() {
        return Err(ConfigError::Validation(
            "catalog contains no sites".to_string(),
        ));
    }

    let mut sites = BTreeMap::new();
    for (name, entry) in entries {
        if entry.url.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "site '{name}' has an empty url"
            )));
        }

        let template = SiteTemplate {
            name: name.clone(),
            url: entry.url,
            url_probe: entry.url_probe.filter(|p| !p.is_empty()),
            detection: detection_from_raw(entry.error_type),
            error_msg: entry.error_msg.unwrap_or_default(),
            url_main: entry.url_main,
        };
        sites.insert(name, template);
    }

    Ok(Catalog { sites })
}

/// Load and validate the catalog from a JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&content)
}

/// Render the markdown list of supported sites, one link per site.
#[must_use]
pub fn render_sites_markdown(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {} sites are supported!", catalog.len());
    for site in catalog.iter() {
        let home = site.url_main.as_deref().unwrap_or_default();
        let _ = writeln!(out, " - [{}]({home})", site.name);
    }
    out.push_str(
        "# Removed sites\nPlease refer [here](https://github.com/sherlock-project/sherlock/blob/master/removed_sites.md)",
    );
    out
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
