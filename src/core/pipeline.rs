//! End-to-end run: schema → load → aggregates → HTML file.
//!
//! Every step opens its own short-lived connection; the handle is released as
//! soon as the step returns.

use crate::db::initialize::ensure_schema;
use crate::db::loader::load_from_csv;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::report::{ReportData, render_report};
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths used by a run. Built from [`crate::config::Config`] plus CLI overrides.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub database: PathBuf,
    pub input_csv: PathBuf,
    pub output_html: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub output: PathBuf,
}

/// Create the table if missing.
pub fn prepare(db: &Path) -> AppResult<()> {
    let pool = DbPool::new(db)?;
    ensure_schema(&pool.conn)
}

/// Full-replace load of `csv` into the store.
pub fn load(db: &Path, csv: &Path) -> AppResult<usize> {
    let mut pool = DbPool::new(db)?;
    load_from_csv(&mut pool.conn, csv)
}

/// Run the four aggregate queries, one connection each.
pub fn compute_report(db: &Path) -> AppResult<ReportData> {
    let cesiones = {
        let pool = DbPool::new(db)?;
        queries::cessions_by_lawyer(&pool.conn)?
    };
    let recepciones = {
        let pool = DbPool::new(db)?;
        queries::receptions_by_lawyer(&pool.conn)?
    };
    let cede_y_recibe = {
        let pool = DbPool::new(db)?;
        queries::lawyers_who_cede_and_receive(&pool.conn)?
    };
    let desglose = {
        let pool = DbPool::new(db)?;
        queries::breakdown_by_lawyer(&pool.conn)?
    };

    Ok(ReportData {
        cesiones,
        recepciones,
        cede_y_recibe,
        desglose,
    })
}

/// Render and write the HTML document, overwriting `out`.
pub fn write_report(data: &ReportData, out: &Path) -> AppResult<()> {
    let html = render_report(data);
    fs::write(out, html.as_bytes())?;
    info!(output = %out.display(), bytes = html.len(), "report written");
    Ok(())
}

pub struct Pipeline;

impl Pipeline {
    pub fn run(cfg: &PipelineConfig) -> AppResult<RunSummary> {
        // 1️⃣ schema
        prepare(&cfg.database)?;

        // 2️⃣ full-replace load
        let rows_loaded = load(&cfg.database, &cfg.input_csv)?;

        // 3️⃣ aggregates
        let data = compute_report(&cfg.database)?;

        // 4️⃣ render + write
        write_report(&data, &cfg.output_html)?;

        success(format!("Informe generado: {}", cfg.output_html.display()));

        Ok(RunSummary {
            rows_loaded,
            output: cfg.output_html.clone(),
        })
    }
}
