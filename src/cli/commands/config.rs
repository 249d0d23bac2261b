use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

use crate::cli::parser::Commands;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path: show_path,
        init,
        edit_config,
        editor,
        force,
    } = cmd
    {
        if *show_path {
            println!("{}", path.display());
        }

        if *init {
            ConfigLogic::init(path, *force)?;
        }

        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(path, editor)?;
        }

        // no flag: print as default action
        if !(*show_path || *init || *print_config || *edit_config) {
            ConfigLogic::print(cfg)?;
        }
    }

    Ok(())
}
