use std::sync::Arc;

use bingo_card::CardLayout;
use show_catalog::ShowCatalog;

use crate::config::AppConfig;

/// Application shared state handed to every screen.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Show catalog chosen at startup
    catalog: Arc<dyn ShowCatalog>,
    /// Application configuration
    config: AppConfig,
}

impl SharedState {
    /// Create shared state from an already-opened catalog and loaded config.
    pub fn new(catalog: Arc<dyn ShowCatalog>, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(SharedStateInner { catalog, config }),
        }
    }

    pub fn catalog(&self) -> &dyn ShowCatalog {
        self.inner.catalog.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn card_layout(&self) -> CardLayout {
        self.inner.config.card_layout()
    }
}
