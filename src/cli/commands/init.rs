use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::pipeline::prepare;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped with `--test`)
///  - the `guardias` table in the SQLite database
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = cfg.init_all(cli.test)?;
    if !cli.test {
        info(format!("Config file : {}", path.display()));
    }

    let db = cfg.database_path();
    prepare(&db)?;

    success(format!("Database initialized at {}", db.display()));
    Ok(())
}
