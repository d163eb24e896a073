use crate::errors::AppResult;
use rusqlite::Connection;
use tracing::debug;

/// Create the `guardias` table if it is missing. Safe to call on every run.
pub fn ensure_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS guardias (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            tipo_guardia    TEXT NOT NULL,
            abogado_cede    TEXT NOT NULL,
            abogado_recibe  TEXT NOT NULL
        );
        "#,
    )?;
    debug!("schema ready");
    Ok(())
}

/// Number of records currently stored.
pub fn guardias_count(conn: &Connection) -> AppResult<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM guardias", [], |row| row.get(0))?;
    Ok(count)
}
