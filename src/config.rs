// Runtime configuration. Built once in `main` and handed to the fetcher,
// store and exporter constructors, so tests can point them at a mock server
// and temporary files.

use std::fmt;
use std::path::PathBuf;

pub const ENV_BASE_URL: &str = "SHARE_TRACKER_API_BASE_URL";
pub const ENV_ACCESS_TOKEN: &str = "SHARE_TRACKER_ACCESS_TOKEN";
pub const ENV_JSON_PATH: &str = "SHARE_TRACKER_JSON_PATH";
pub const ENV_CSV_PATH: &str = "SHARE_TRACKER_CSV_PATH";

pub const DEFAULT_BASE_URL: &str = "https://graph.facebook.com/v16.0";
pub const DEFAULT_JSON_PATH: &str = "facebook_post_shares.json";
pub const DEFAULT_CSV_PATH: &str = "facebook_post_shares.csv";

/// Where to reach the graph API and with which credential.
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub access_token: String,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Locations of the JSON snapshot and the CSV export.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Build the configuration from `SHARE_TRACKER_*` environment variables,
    /// falling back to the built-in defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an arbitrary key lookup.
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let base_url = get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Config {
            api: ApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                access_token: get(ENV_ACCESS_TOKEN).unwrap_or_default(),
            },
            storage: StorageConfig {
                json_path: get(ENV_JSON_PATH)
                    .unwrap_or_else(|| DEFAULT_JSON_PATH.into())
                    .into(),
                csv_path: get(ENV_CSV_PATH)
                    .unwrap_or_else(|| DEFAULT_CSV_PATH.into())
                    .into(),
            },
        }
    }
}
