//! SQLite schema definitions and SQL query constants.

/// SQL statement to create the key-value table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value BLOB NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const SELECT_VALUE: &str = r#"
SELECT value
FROM kv
WHERE key = ?1
"#;

pub const UPSERT_VALUE: &str = r#"
INSERT INTO kv (key, value, updated_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
"#;

pub const DELETE_VALUE: &str = r#"
DELETE FROM kv
WHERE key = ?1
"#;
