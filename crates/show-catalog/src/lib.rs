//! The show catalog contract and its storage backends.
//!
//! Callers hold an `Arc<dyn ShowCatalog>` built once at startup and never
//! learn which backend sits behind it:
//!
//! - [`SqliteCatalog`] persists shows through [`show_db::Database`].
//! - [`MockCatalog`] serves a fixed seed list from memory with artificial
//!   latency and refuses every write.

mod mock;
mod sqlite;

pub use mock::{MockCatalog, MockDelays};
pub use sqlite::SqliteCatalog;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use show_db::{CreateShowInput, DbError, Show};

/// Which implementation backs a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogBackend {
    Sqlite,
    Mock,
}

impl CatalogBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogBackend::Sqlite => "sqlite",
            CatalogBackend::Mock => "mock",
        }
    }
}

/// Persistent store of [`Show`] records.
///
/// Every write has committed by the time its future resolves. Backends keep no
/// cache, so a read always reflects the last completed write.
#[async_trait]
pub trait ShowCatalog: Send + Sync {
    fn backend(&self) -> CatalogBackend;

    /// All shows in id order.
    async fn list(&self) -> Result<Vec<Show>, CatalogError>;

    /// The show with this id, or `None` when there is none.
    async fn get_by_id(&self, id: i64) -> Result<Option<Show>, CatalogError>;

    /// Insert a show under its own id. A taken id is a
    /// [`DbError::Conflict`].
    async fn add(&self, show: Show) -> Result<(), CatalogError>;

    /// Insert a new show and assign its id.
    async fn create(&self, input: CreateShowInput) -> Result<Show, CatalogError>;

    /// Replace the show stored under `show.id`, inserting it when absent.
    async fn update(&self, show: Show) -> Result<(), CatalogError>;

    /// Remove a show. Unknown ids are ignored.
    async fn delete(&self, id: i64) -> Result<(), CatalogError>;

    /// Shows whose title contains `query`, ignoring case. An empty query
    /// returns every show.
    async fn search_by_title(&self, query: &str) -> Result<Vec<Show>, CatalogError>;
}

/// Catalog error type.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Storage(#[from] DbError),

    #[error("{0} is not supported by the read-only catalog")]
    Unsupported(&'static str),
}
