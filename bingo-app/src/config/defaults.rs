//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (
        "BINGO_DATA_DIR",
        "",
        "Directory holding shows.db (empty: ~/.bingo-cards)",
    ),
    ("CATALOG_BACKEND", "sqlite", "Catalog storage: 'sqlite' or 'mock'"),
    (
        "MOCK_LIST_DELAY_MS",
        "500",
        "Latency of list and search calls on the mock catalog",
    ),
    (
        "MOCK_GET_DELAY_MS",
        "300",
        "Latency of lookups by id on the mock catalog",
    ),
    ("CARD_SIZE", "5", "Cells per side of a bingo card (3-9)"),
    (
        "FREE_CENTER",
        "true",
        "Pin a free space when a show has no center phrase",
    ),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

/// Human-readable description of a setting key, or `None` if not defined.
pub fn describe(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.description)
}
