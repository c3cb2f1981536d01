use std::path::PathBuf;

/// Desktop-browser identity sent with every probe and catalog download.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3770.100 Safari/537.36";

/// Upstream location of the site catalog, used when no local cache exists.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/tdh8316/Investigo/master/data.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub catalog_path: PathBuf,
    pub catalog_url: String,
    /// Whole-request deadline for a single probe. `0` disables it.
    pub request_timeout_secs: u64,
    /// `0` disables the connect deadline.
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    /// Upper bound on in-flight probes per username. `0` means one slot per
    /// catalog entry.
    pub max_concurrent_probes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            catalog_path: PathBuf::from("./data.json"),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            request_timeout_secs: 10,
            connect_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_concurrent_probes: 0,
        }
    }
}
