use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset ones fall back to [`AppConfig::default`].
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::default();

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let log_level = lookup("INVESTIGO_LOG_LEVEL").unwrap_or(defaults.log_level);
    let catalog_path = lookup("INVESTIGO_CATALOG_PATH")
        .map(PathBuf::from)
        .unwrap_or(defaults.catalog_path);
    let catalog_url = lookup("INVESTIGO_CATALOG_URL").unwrap_or(defaults.catalog_url);
    let user_agent = lookup("INVESTIGO_USER_AGENT")
        .ok()
        .filter(|ua| !ua.trim().is_empty())
        .unwrap_or(defaults.user_agent);

    let request_timeout_secs =
        parse_u64("INVESTIGO_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    let connect_timeout_secs =
        parse_u64("INVESTIGO_CONNECT_TIMEOUT_SECS", defaults.connect_timeout_secs)?;
    let max_concurrent_probes = parse_usize(
        "INVESTIGO_MAX_CONCURRENT_PROBES",
        defaults.max_concurrent_probes,
    )?;

    Ok(AppConfig {
        log_level,
        catalog_path,
        catalog_url,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        max_concurrent_probes,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
