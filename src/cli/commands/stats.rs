use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{compute_report, prepare};
use crate::db::pool::DbPool;
use crate::db::queries::all_guardias;
use crate::errors::AppResult;
use crate::models::stats::LawyerCount;
use crate::ui::messages::{header, warning};
use crate::utils::table::Table;
use std::path::Path;

fn count_table(rows: &[LawyerCount]) -> Table {
    let mut table = Table::new(&["N°", "Abogado", "Cantidad"]);
    for (i, r) in rows.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            r.abogado.clone(),
            r.cantidad.to_string(),
        ]);
    }
    table
}

fn print_records(db: &Path) -> AppResult<()> {
    let pool = DbPool::new(db)?;
    let mut table = Table::new(&["Id", "Tipo", "Cede", "Recibe"]);
    for r in all_guardias(&pool.conn)? {
        table.add_row(vec![
            r.id.to_string(),
            r.tipo_guardia,
            r.abogado_cede,
            r.abogado_recibe,
        ]);
    }

    header("Guardias");
    println!("{}", table.render());
    Ok(())
}

/// Handle the `stats` command: same aggregates as the report, as text.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Stats { records } = cmd else {
        return Ok(());
    };

    let db = cfg.database_path();
    prepare(&db)?;
    let data = compute_report(&db)?;

    if data.cesiones.is_empty() {
        warning("No hay guardias cargadas.");
        return Ok(());
    }

    if *records {
        print_records(&db)?;
    }

    header("Cesiones por Abogado");
    println!("{}", count_table(&data.cesiones).render());

    header("Recepciones por Abogado");
    println!("{}", count_table(&data.recepciones).render());

    header("Abogados que Ceden y Reciben Guardias");
    let mut both = Table::new(&["N°", "Abogado", "Cesiones", "Recepciones"]);
    for (i, r) in data.cede_y_recibe.iter().enumerate() {
        both.add_row(vec![
            (i + 1).to_string(),
            r.abogado.clone(),
            r.cesiones.to_string(),
            r.recepciones.to_string(),
        ]);
    }
    println!("{}", both.render());

    Ok(())
}
