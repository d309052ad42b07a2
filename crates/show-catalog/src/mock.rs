use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use show_db::defaults::SEED_SHOWS;
use show_db::{CreateShowInput, Show, title_matches};

use crate::{CatalogBackend, CatalogError, ShowCatalog};

/// Latency injected before each read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDelays {
    pub list: Duration,
    pub get: Duration,
}

impl Default for MockDelays {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            get: Duration::from_millis(300),
        }
    }
}

impl MockDelays {
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
        }
    }
}

/// Read-only catalog serving a fixed list from memory.
#[derive(Clone)]
pub struct MockCatalog {
    shows: Arc<[Show]>,
    delays: MockDelays,
}

impl MockCatalog {
    pub fn new(shows: Vec<Show>, delays: MockDelays) -> Self {
        Self {
            shows: shows.into(),
            delays,
        }
    }

    /// Catalog holding the example shows.
    pub fn seeded(delays: MockDelays) -> Self {
        Self::new(SEED_SHOWS.to_vec(), delays)
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn refuse<T>(operation: &'static str) -> Result<T, CatalogError> {
        tracing::warn!(operation, "Write attempted against the mock catalog");
        Err(CatalogError::Unsupported(operation))
    }
}

#[async_trait]
impl ShowCatalog for MockCatalog {
    fn backend(&self) -> CatalogBackend {
        CatalogBackend::Mock
    }

    async fn list(&self) -> Result<Vec<Show>, CatalogError> {
        Self::pause(self.delays.list).await;
        Ok(self.shows.to_vec())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Show>, CatalogError> {
        Self::pause(self.delays.get).await;
        Ok(self.shows.iter().find(|show| show.id == id).cloned())
    }

    async fn add(&self, _show: Show) -> Result<(), CatalogError> {
        Self::refuse("add")
    }

    async fn create(&self, _input: CreateShowInput) -> Result<Show, CatalogError> {
        Self::refuse("create")
    }

    async fn update(&self, _show: Show) -> Result<(), CatalogError> {
        Self::refuse("update")
    }

    async fn delete(&self, _id: i64) -> Result<(), CatalogError> {
        Self::refuse("delete")
    }

    async fn search_by_title(&self, query: &str) -> Result<Vec<Show>, CatalogError> {
        Self::pause(self.delays.list).await;
        Ok(self
            .shows
            .iter()
            .filter(|show| title_matches(&show.show_title, query))
            .cloned()
            .collect())
    }
}
