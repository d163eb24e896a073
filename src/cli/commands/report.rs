use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{compute_report, prepare, write_report};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { out } = cmd {
        let db = cfg.database_path();
        let out = out
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.output_path());

        prepare(&db)?;
        let data = compute_report(&db)?;
        write_report(&data, &out)?;

        success(format!("Informe generado: {}", out.display()));
    }
    Ok(())
}
