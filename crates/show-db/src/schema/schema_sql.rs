pub(super) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS shows (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    show_title TEXT NOT NULL,
    game_title TEXT,
    center_square TEXT,
    phrases_json TEXT NOT NULL DEFAULT '[]'
);

CREATE INDEX IF NOT EXISTS idx_shows_show_title ON shows(show_title);
"#;
