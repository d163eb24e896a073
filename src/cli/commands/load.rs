use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{load, prepare};
use crate::db::initialize::guardias_count;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { csv } = cmd {
        let db = cfg.database_path();
        let csv = csv
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.input_path());

        prepare(&db)?;
        let rows = load(&db, &csv)?;

        let stored = {
            let pool = DbPool::new(&db)?;
            guardias_count(&pool.conn)?
        };

        success(format!(
            "Loaded {} rows from {} ({} guardias stored)",
            rows,
            csv.display(),
            stored
        ));
    }
    Ok(())
}
