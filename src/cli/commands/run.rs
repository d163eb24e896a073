use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::{Pipeline, PipelineConfig};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { csv, out } = cmd {
        let pipeline = PipelineConfig {
            database: cfg.database_path(),
            input_csv: csv
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| cfg.input_path()),
            output_html: out
                .as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| cfg.output_path()),
        };

        let summary = Pipeline::run(&pipeline)?;
        info(format!("{} guardias procesadas", summary.rows_loaded));
    }
    Ok(())
}
