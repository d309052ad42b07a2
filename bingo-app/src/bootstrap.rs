use std::sync::Arc;

use anyhow::Context;
use show_catalog::{CatalogBackend, MockCatalog, ShowCatalog, SqliteCatalog};
use show_db::Database;

use crate::app::SharedState;
use crate::config::AppConfig;

/// Load configuration and open the configured catalog (fatal on error).
pub fn init_foundation() -> Result<SharedState, anyhow::Error> {
    load_dotenv();
    let config = AppConfig::from_env();
    let catalog = open_catalog(&config)?;
    tracing::info!(
        backend = catalog.backend().as_str(),
        card_size = config.card_size,
        "Catalog ready"
    );
    Ok(SharedState::new(catalog, config))
}

/// Build the catalog backend named by the configuration.
pub fn open_catalog(config: &AppConfig) -> Result<Arc<dyn ShowCatalog>, anyhow::Error> {
    match config.catalog_backend {
        CatalogBackend::Sqlite => {
            std::fs::create_dir_all(&config.data_dir).with_context(|| {
                format!("failed to create data directory {}", config.data_dir.display())
            })?;
            let db_path = config.db_path();
            tracing::info!("Opening database at {}", db_path.display());
            let db = Database::open(&db_path)
                .with_context(|| format!("failed to open {}", db_path.display()))?;
            tracing::info!(shows = db.count_shows()?, "Show catalog loaded");
            Ok(Arc::new(SqliteCatalog::new(db)))
        }
        CatalogBackend::Mock => {
            let delays = config.mock_delays();
            tracing::info!(?delays, "Using read-only mock catalog");
            Ok(Arc::new(MockCatalog::seeded(delays)))
        }
    }
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_mock_catalog() {
        let config = AppConfig {
            catalog_backend: CatalogBackend::Mock,
            mock_list_delay_ms: 0,
            mock_get_delay_ms: 0,
            ..AppConfig::default()
        };
        let catalog = open_catalog(&config).unwrap();
        assert_eq!(catalog.backend(), CatalogBackend::Mock);
        assert!(!catalog.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_sqlite_catalog_seeds_once() {
        let dir = std::env::temp_dir().join(format!("bingo-app-test-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let config = AppConfig {
            data_dir: dir.clone(),
            ..AppConfig::default()
        };

        let catalog = open_catalog(&config).unwrap();
        let seeded = catalog.list().await.unwrap().len();
        assert!(seeded > 0);
        catalog.delete(1).await.unwrap();
        drop(catalog);

        let reopened = open_catalog(&config).unwrap();
        assert_eq!(reopened.backend(), CatalogBackend::Sqlite);
        assert_eq!(reopened.list().await.unwrap().len(), seeded - 1);
        drop(reopened);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unopenable_database_is_fatal() {
        let dir = std::env::temp_dir().join(format!("bingo-app-bad-db-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let config = AppConfig {
            data_dir: dir.clone(),
            ..AppConfig::default()
        };
        // A directory where the database file should be.
        std::fs::create_dir_all(config.db_path()).unwrap();

        let err = open_catalog(&config).err().expect("open should fail");
        std::fs::remove_dir_all(&dir).unwrap();
        assert!(err.chain().any(|cause| cause.is::<show_db::DbError>()));
        assert!(matches!(
            err.downcast_ref::<show_db::DbError>(),
            Some(show_db::DbError::Sqlite(_))
        ));
    }
}
