//! SQLite connection wrapper (one short-lived handle per operation).

use rusqlite::{Connection, Result};
use std::path::Path;
use tracing::debug;

/// Owns a single connection; the handle is released when the value is dropped.
pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(db = %path.display(), "opening database");
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }
}
