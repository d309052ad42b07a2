//! Database schema definitions and versioning.

mod schema_sql;

use rusqlite::Connection;

use crate::DbError;
use crate::defaults::SEED_SHOWS;
use crate::shows::insert_show;

use schema_sql::SCHEMA;

/// Version written to `PRAGMA user_version`. Bump only when the shape of a
/// show row changes.
pub const SCHEMA_VERSION: i64 = 1;

/// Create the schema on first open and reject databases written by a newer
/// build. When `seed` is set, a freshly created catalog receives the example
/// shows in the same transaction as the tables.
pub fn run_migrations(conn: &mut Connection, seed: bool) -> Result<(), DbError> {
    let version = read_version(conn)?;
    if version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchema(version));
    }
    if version == SCHEMA_VERSION {
        return Ok(());
    }

    tracing::info!(from = version, to = SCHEMA_VERSION, "Creating show catalog schema");
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA)?;
    if seed {
        for show in SEED_SHOWS.iter() {
            insert_show(&tx, show)?;
        }
        tracing::info!(count = SEED_SHOWS.len(), "Seeded show catalog");
    }
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;
    Ok(())
}

pub fn read_version(conn: &Connection) -> Result<i64, DbError> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}
