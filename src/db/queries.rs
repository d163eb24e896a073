//! Read-only aggregate queries over `guardias`.
//!
//! Every function returns a fully materialised value. Count ties are broken by
//! lawyer name so two runs over the same data always agree.

use crate::errors::{AppError, AppResult};
use crate::models::breakdown::Breakdown;
use crate::models::direction::Direction;
use crate::models::guardia::GuardiaRecord;
use crate::models::stats::{CedeRecibe, LawyerCount};
use rusqlite::{Connection, Result, Row};
use tracing::debug;

fn map_count(row: &Row) -> Result<LawyerCount> {
    Ok(LawyerCount {
        abogado: row.get(0)?,
        cantidad: row.get(1)?,
    })
}

fn collect_counts(conn: &Connection, sql: &str) -> AppResult<Vec<LawyerCount>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], map_count)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// How many shifts each lawyer gave away, most first.
pub fn cessions_by_lawyer(conn: &Connection) -> AppResult<Vec<LawyerCount>> {
    let out = collect_counts(
        conn,
        "SELECT abogado_cede, COUNT(*) AS cantidad
         FROM guardias
         GROUP BY abogado_cede
         ORDER BY cantidad DESC, abogado_cede ASC",
    )?;
    debug!(rows = out.len(), "cessions by lawyer");
    Ok(out)
}

/// How many shifts each lawyer took over, most first.
pub fn receptions_by_lawyer(conn: &Connection) -> AppResult<Vec<LawyerCount>> {
    let out = collect_counts(
        conn,
        "SELECT abogado_recibe, COUNT(*) AS cantidad
         FROM guardias
         GROUP BY abogado_recibe
         ORDER BY cantidad DESC, abogado_recibe ASC",
    )?;
    debug!(rows = out.len(), "receptions by lawyer");
    Ok(out)
}

/// Lawyers present on both sides, with both totals.
pub fn lawyers_who_cede_and_receive(conn: &Connection) -> AppResult<Vec<CedeRecibe>> {
    let mut stmt = conn.prepare(
        r#"
        WITH cede AS (
            SELECT abogado_cede AS abogado, COUNT(*) AS n
            FROM guardias
            GROUP BY abogado_cede
        ),
        recibe AS (
            SELECT abogado_recibe AS abogado, COUNT(*) AS n
            FROM guardias
            GROUP BY abogado_recibe
        )
        SELECT cede.abogado, cede.n AS cesiones, recibe.n AS recepciones
        FROM cede
        JOIN recibe ON recibe.abogado = cede.abogado
        WHERE cede.n > 0 AND recibe.n > 0
        ORDER BY cesiones DESC, recepciones DESC, cede.abogado ASC
        "#,
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(CedeRecibe {
            abogado: row.get(0)?,
            cesiones: row.get(1)?,
            recepciones: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    debug!(rows = out.len(), "lawyers who cede and receive");
    Ok(out)
}

/// Nested breakdown per lawyer, built in a single pass over a query sorted by
/// lawyer, direction, shift type, counterpart.
pub fn breakdown_by_lawyer(conn: &Connection) -> AppResult<Breakdown> {
    let mut stmt = conn.prepare(
        r#"
        SELECT abogado, direccion, tipo_guardia, contraparte, COUNT(*) AS cantidad
        FROM (
            SELECT abogado_cede AS abogado, 'cede' AS direccion,
                   tipo_guardia, abogado_recibe AS contraparte
            FROM guardias
            UNION ALL
            SELECT abogado_recibe AS abogado, 'recibe' AS direccion,
                   tipo_guardia, abogado_cede AS contraparte
            FROM guardias
        )
        GROUP BY abogado, direccion, tipo_guardia, contraparte
        ORDER BY abogado ASC, direccion ASC, tipo_guardia ASC, contraparte ASC
        "#,
    )?;

    let mut rows = stmt.query([])?;
    let mut breakdown = Breakdown::new();

    while let Some(row) = rows.next()? {
        let abogado: String = row.get(0)?;
        let dir_str: String = row.get(1)?;
        let tipo: String = row.get(2)?;
        let contraparte: String = row.get(3)?;
        let cantidad: i64 = row.get(4)?;

        let dir = Direction::from_db_str(&dir_str)
            .ok_or_else(|| AppError::Other(format!("Unknown direction: {}", dir_str)))?;

        breakdown.push(&abogado, dir, &tipo, &contraparte, cantidad);
    }

    debug!(lawyers = breakdown.lawyers.len(), "breakdown by lawyer");
    Ok(breakdown)
}

/// All stored records in insertion order.
pub fn all_guardias(conn: &Connection) -> AppResult<Vec<GuardiaRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, tipo_guardia, abogado_cede, abogado_recibe
         FROM guardias
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(GuardiaRecord {
            id: row.get("id")?,
            tipo_guardia: row.get("tipo_guardia")?,
            abogado_cede: row.get("abogado_cede")?,
            abogado_recibe: row.get("abogado_recibe")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
