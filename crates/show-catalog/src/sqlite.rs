use async_trait::async_trait;
use show_db::{CreateShowInput, Database, Show};

use crate::{CatalogBackend, CatalogError, ShowCatalog};

/// Durable catalog over the SQLite database.
#[derive(Clone)]
pub struct SqliteCatalog {
    db: Database,
}

impl SqliteCatalog {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShowCatalog for SqliteCatalog {
    fn backend(&self) -> CatalogBackend {
        CatalogBackend::Sqlite
    }

    async fn list(&self) -> Result<Vec<Show>, CatalogError> {
        let shows = self.db.get_all_shows()?;
        tracing::debug!(count = shows.len(), "Listed shows");
        Ok(shows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Show>, CatalogError> {
        let show = self.db.get_show(id)?;
        tracing::debug!(id, found = show.is_some(), "Fetched show");
        Ok(show)
    }

    async fn add(&self, show: Show) -> Result<(), CatalogError> {
        self.db.add_show(&show)?;
        tracing::debug!(id = show.id, "Added show");
        Ok(())
    }

    async fn create(&self, input: CreateShowInput) -> Result<Show, CatalogError> {
        let show = self.db.create_show(&input)?;
        tracing::debug!(id = show.id, "Created show");
        Ok(show)
    }

    async fn update(&self, show: Show) -> Result<(), CatalogError> {
        self.db.upsert_show(&show)?;
        tracing::debug!(id = show.id, "Updated show");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let removed = self.db.delete_show(id)?;
        tracing::debug!(id, removed, "Deleted show");
        Ok(())
    }

    async fn search_by_title(&self, query: &str) -> Result<Vec<Show>, CatalogError> {
        let shows = self.db.search_shows_by_title(query)?;
        tracing::debug!(query, count = shows.len(), "Searched shows");
        Ok(shows)
    }
}
