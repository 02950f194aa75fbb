//! Table bootstrap helpers.

use rusqlite::Connection;

use crate::errors::{AppError, AppResult};

const CHECK_TABLE: &str = "SELECT tbl_name FROM sqlite_master WHERE type='table' AND name = ?1";

/// Schema for the calendar events table.
pub const CREATE_EVENTS_TABLE: &str = "
CREATE TABLE events (
    jm_key          TEXT PRIMARY KEY,
    creation_date   TEXT NOT NULL,
    start           TEXT NOT NULL,
    length          INTEGER NOT NULL DEFAULT 0,
    title           TEXT NOT NULL,
    description     TEXT NOT NULL DEFAULT ''
)";

/// Make sure `table_name` exists.
///
/// No-op when the table is already present. When it is absent, the supplied
/// CREATE statement is executed; a missing or blank statement fails with
/// [`AppError::SqlDefinition`].
pub fn ensure_table(conn: &Connection, table_name: &str, sql: Option<&str>) -> AppResult<()> {
    let mut stmt = conn.prepare(CHECK_TABLE)?;
    if stmt.exists([table_name])? {
        log::info!("table exists with table name: {table_name}");
        return Ok(());
    }

    match sql {
        Some(s) if !s.trim().is_empty() => {
            conn.execute_batch(s)?;
            log::info!("created table: {table_name}");
            Ok(())
        }
        _ => {
            log::error!("cant create a table with sql: {sql:?}");
            Err(AppError::SqlDefinition(table_name.to_string()))
        }
    }
}

/// Initialize the database.
/// All schema is guaranteed by `ensure_table`, so re-running is harmless.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_table(conn, "events", Some(CREATE_EVENTS_TABLE))
}
