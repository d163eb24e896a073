//! CSV → `guardias` bulk load with full-replace semantics.

use crate::errors::{AppError, AppResult};
use crate::models::guardia::NewGuardia;
use csv::ReaderBuilder;
use rusqlite::{Connection, params};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const FIELDS_PER_ROW: usize = 3;

/// Replace the whole table with the content of the CSV at `path`.
/// Returns the number of inserted rows.
pub fn load_from_csv<P: AsRef<Path>>(conn: &mut Connection, path: P) -> AppResult<usize> {
    let path = path.as_ref();
    debug!(csv = %path.display(), "reading input");
    let file = File::open(path)?;
    load_from_reader(conn, file)
}

/// First empty line after the header, outside quoted fields (1-based).
///
/// The csv reader skips empty lines; an empty line is a row with zero
/// fields and must fail the load like any other short row.
fn find_blank_line(data: &str) -> Option<u64> {
    let mut line = 1u64;
    let mut in_quotes = false;
    // the header line is never checked
    let mut at_line_start = false;
    let mut chars = data.chars().peekable();

    while let Some(ch) = chars.next() {
        if at_line_start && !in_quotes {
            match ch {
                '\n' => return Some(line),
                '\r' if chars.peek() == Some(&'\n') => return Some(line),
                _ => {}
            }
        }
        at_line_start = false;

        match ch {
            '"' => in_quotes = !in_quotes,
            '\n' => {
                line += 1;
                at_line_start = true;
            }
            _ => {}
        }
    }
    None
}

/// Same as [`load_from_csv`] for any reader.
///
/// The first row is always treated as a header and discarded. The delete and
/// all the inserts run in one transaction: if any row fails, nothing changes.
pub fn load_from_reader<R: Read>(conn: &mut Connection, mut reader: R) -> AppResult<usize> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;

    if let Some(line) = find_blank_line(&data) {
        return Err(AppError::InvalidRow { line, found: 0 });
    }

    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_bytes());

    let tx = conn.transaction()?;

    tx.execute("DELETE FROM guardias", [])?;
    // Restart surrogate ids at 1 on every load.
    tx.execute("DELETE FROM sqlite_sequence WHERE name = 'guardias'", [])?;

    let mut inserted = 0usize;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO guardias (tipo_guardia, abogado_cede, abogado_recibe)
             VALUES (?1, ?2, ?3)",
        )?;

        for result in rdr.records() {
            let record = result?;
            if record.len() != FIELDS_PER_ROW {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(AppError::InvalidRow {
                    line,
                    found: record.len(),
                });
            }

            let row: NewGuardia = record.deserialize(None)?;
            stmt.execute(params![row.tipo_guardia, row.abogado_cede, row.abogado_recibe])?;
            inserted += 1;
        }
    }

    tx.commit()?;
    info!(rows = inserted, "guardias table replaced");
    Ok(inserted)
}
