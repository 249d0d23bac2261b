use crate::cli::commands::report::run_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ReportKind;

/// Handle the `daily` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Daily { file, opts } = cmd {
        run_report(file, opts, cfg, ReportKind::Daily)?;
    }
    Ok(())
}
