//! v001 -- Initial schema creation.
//!
//! Creates the single `slices` table.  Each application slice is one row:
//! a complete JSON snapshot of its in-memory value, overwritten wholesale
//! on every accepted mutation.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS slices (
    key        TEXT PRIMARY KEY NOT NULL,   -- slice name (user_profile, drama_catalog, ad_config)
    json       TEXT NOT NULL,               -- complete snapshot of the slice value
    updated_at TEXT NOT NULL                -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
