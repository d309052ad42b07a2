//! Show records and their CRUD queries.

use rusqlite::{Connection, ErrorCode, Row};
use serde::{Deserialize, Serialize};

use crate::{Database, DbError};

/// A television show together with the phrase pool its bingo cards draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: i64,
    pub show_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_title: Option<String>,
    /// Phrase pinned to the middle cell of every card for this show.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_square: Option<String>,
    #[serde(default)]
    pub phrases: Vec<String>,
}

/// Everything a show carries except its identity, as submitted by the
/// creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShowInput {
    pub show_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_square: Option<String>,
    #[serde(default)]
    pub phrases: Vec<String>,
}

impl CreateShowInput {
    pub fn with_id(self, id: i64) -> Show {
        Show::from_input(id, self)
    }
}

impl Show {
    pub fn from_input(id: i64, input: CreateShowInput) -> Self {
        Self {
            id,
            show_title: input.show_title,
            game_title: input.game_title,
            center_square: input.center_square,
            phrases: input.phrases,
        }
    }
}

/// Case-insensitive substring test used by every title search. Only the
/// empty query matches everything; whitespace is part of the query.
pub fn title_matches(title: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    title.to_lowercase().contains(&query.to_lowercase())
}

fn validate_title(title: &str) -> Result<(), DbError> {
    if title.trim().is_empty() {
        return Err(DbError::InvalidData("show title must not be empty".into()));
    }
    Ok(())
}

fn encode_phrases(phrases: &[String]) -> Result<String, DbError> {
    serde_json::to_string(phrases).map_err(|e| DbError::InvalidData(format!("invalid phrases: {e}")))
}

fn show_from_row(row: &Row<'_>) -> Result<Show, rusqlite::Error> {
    let raw: String = row.get(4)?;
    let phrases = serde_json::from_str::<Vec<String>>(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Show {
        id: row.get(0)?,
        show_title: row.get(1)?,
        game_title: row.get(2)?,
        center_square: row.get(3)?,
        phrases,
    })
}

/// Map a primary key collision to [`DbError::Conflict`] and pass everything
/// else through.
fn map_id_conflict(err: rusqlite::Error, id: i64) -> DbError {
    if err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
        DbError::Conflict(format!("show {id} already exists"))
    } else {
        err.into()
    }
}

/// Plain insert with a caller-chosen id. Also used by the schema seeding,
/// which runs inside its own transaction.
pub(crate) fn insert_show(conn: &Connection, show: &Show) -> Result<(), DbError> {
    validate_title(&show.show_title)?;
    let phrases_json = encode_phrases(&show.phrases)?;
    conn.execute(
        "INSERT INTO shows (id, show_title, game_title, center_square, phrases_json)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            show.id,
            show.show_title,
            show.game_title,
            show.center_square,
            phrases_json,
        ],
    )
    .map_err(|e| map_id_conflict(e, show.id))?;
    Ok(())
}

const SELECT_SHOW: &str =
    "SELECT id, show_title, game_title, center_square, phrases_json FROM shows";

impl Database {
    pub fn get_all_shows(&self) -> Result<Vec<Show>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_SHOW} ORDER BY id"))?;
            let rows = stmt.query_map([], show_from_row)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }

    pub fn get_show(&self, id: i64) -> Result<Option<Show>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_SHOW} WHERE id = ?1"))?;
            let mut rows = stmt.query_map([id], show_from_row)?;
            rows.next().transpose().map_err(Into::into)
        })
    }

    /// Insert a show under its own id. Fails with [`DbError::Conflict`] when
    /// the id is taken.
    pub fn add_show(&self, show: &Show) -> Result<(), DbError> {
        self.with_conn(|conn| insert_show(conn, show))
    }

    /// Insert a show and let SQLite pick the id. Ids are never handed out
    /// twice, even after the show holding one is deleted.
    pub fn create_show(&self, input: &CreateShowInput) -> Result<Show, DbError> {
        validate_title(&input.show_title)?;
        let phrases_json = encode_phrases(&input.phrases)?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO shows (show_title, game_title, center_square, phrases_json)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![
                    input.show_title,
                    input.game_title,
                    input.center_square,
                    phrases_json,
                ],
            )?;
            let id = conn.last_insert_rowid();
            Ok(Show::from_input(id, input.clone()))
        })
    }

    /// Replace the show stored under `show.id`, inserting it if absent.
    pub fn upsert_show(&self, show: &Show) -> Result<(), DbError> {
        validate_title(&show.show_title)?;
        let phrases_json = encode_phrases(&show.phrases)?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO shows (id, show_title, game_title, center_square, phrases_json)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    show_title = excluded.show_title,
                    game_title = excluded.game_title,
                    center_square = excluded.center_square,
                    phrases_json = excluded.phrases_json",
                rusqlite::params![
                    show.id,
                    show.show_title,
                    show.game_title,
                    show.center_square,
                    phrases_json,
                ],
            )?;
            Ok(())
        })
    }

    /// Remove a show. Deleting an unknown id is not an error; the return
    /// value reports whether a row was removed.
    pub fn delete_show(&self, id: i64) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let deleted = conn.execute("DELETE FROM shows WHERE id = ?1", [id])?;
            Ok(deleted > 0)
        })
    }

    /// Shows whose title contains `query`, ignoring case. Rows stream out of
    /// the cursor and only matches are kept.
    pub fn search_shows_by_title(&self, query: &str) -> Result<Vec<Show>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_SHOW} ORDER BY id"))?;
            let rows = stmt.query_map([], show_from_row)?;
            let mut matches = Vec::new();
            for row in rows {
                let show = row?;
                if title_matches(&show.show_title, query) {
                    matches.push(show);
                }
            }
            Ok(matches)
        })
    }

    pub fn count_shows(&self) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM shows", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}
