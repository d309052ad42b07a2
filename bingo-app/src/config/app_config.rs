//! Runtime application configuration loaded from the environment.

use std::path::PathBuf;
use std::time::Duration;

use bingo_card::CardLayout;
use show_catalog::{CatalogBackend, MockDelays};

use super::defaults::{describe, get_default};
use super::validation::validate_setting;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".bingo-cards";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub catalog_backend: CatalogBackend,
    pub mock_list_delay_ms: u64,
    pub mock_get_delay_ms: u64,
    pub card_size: usize,
    pub free_center: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog_backend: CatalogBackend::Sqlite,
            mock_list_delay_ms: 500,
            mock_get_delay_ms: 300,
            card_size: 5,
            free_center: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`. Unset or empty keys take their
    /// default; invalid values are logged and replaced by the default.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String {
            let default = get_default(key).unwrap_or_default();
            let Some(value) = lookup(key).map(|v| v.trim().to_string()) else {
                return default.to_string();
            };
            if value.is_empty() {
                return default.to_string();
            }
            match validate_setting(key, &value) {
                Ok(()) => value,
                Err(e) => {
                    tracing::warn!(
                        key,
                        value = %value,
                        error = %e,
                        default,
                        setting = describe(key).unwrap_or_default(),
                        "Invalid setting, using default"
                    );
                    default.to_string()
                }
            }
        };

        let data_dir = match g("BINGO_DATA_DIR") {
            dir if dir.is_empty() => default_data_dir(),
            dir => PathBuf::from(dir),
        };
        let catalog_backend = match g("CATALOG_BACKEND").as_str() {
            "mock" => CatalogBackend::Mock,
            _ => CatalogBackend::Sqlite,
        };

        Self {
            data_dir,
            catalog_backend,
            mock_list_delay_ms: parse_u64(&g("MOCK_LIST_DELAY_MS"), 500),
            mock_get_delay_ms: parse_u64(&g("MOCK_GET_DELAY_MS"), 300),
            card_size: parse_usize(&g("CARD_SIZE"), 5),
            free_center: g("FREE_CENTER") == "true",
        }
    }

    pub fn mock_delays(&self) -> MockDelays {
        MockDelays {
            list: Duration::from_millis(self.mock_list_delay_ms),
            get: Duration::from_millis(self.mock_get_delay_ms),
        }
    }

    pub fn card_layout(&self) -> CardLayout {
        CardLayout::new(self.card_size, self.free_center).unwrap_or_default()
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("shows.db")
    }
}

/// `~/.bingo-cards`, or a relative directory when no home is known.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

fn parse_u64(s: &str, default: u64) -> u64 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

fn parse_usize(s: &str, default: usize) -> usize {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}
