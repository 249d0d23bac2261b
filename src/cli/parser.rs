use crate::core::calculator::expected::parse_expected_hours;
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rworkhours
/// CLI application to compute worked hours from check-in/check-out sheets
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute worked hours from a check-in/check-out spreadsheet and compare them with a monthly target",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print diagnostic logs on stderr
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the `total` and `daily` reports.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Expected working hours for the period (default from config, else 0)
    #[arg(long, short = 'e', value_name = "HOURS", value_parser = parse_expected_hours)]
    pub expected: Option<f64>,

    /// Worksheet to read (default: first sheet)
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Write the result table to a file
    #[arg(long, short = 'x')]
    pub export: bool,

    /// Export format (default from config, else xlsx)
    #[arg(long, value_enum, requires = "export")]
    pub format: Option<ExportFormat>,

    /// Output directory for the exported file
    #[arg(long, value_name = "DIR", requires = "export")]
    pub out: Option<PathBuf>,

    /// Overwrite an existing export without asking
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Total worked hours for the file (sessions may cross midnight)
    Total {
        /// Input spreadsheet (.xlsx, .xls, .ods or .csv)
        file: PathBuf,

        #[command(flatten)]
        opts: ReportArgs,
    },

    /// Worked hours per calendar date (only same-day sessions count)
    Daily {
        /// Input spreadsheet (.xlsx, .xls, .ods or .csv)
        file: PathBuf,

        #[command(flatten)]
        opts: ReportArgs,
    },

    /// Manage the configuration file (view, create or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use", requires = "edit_config")]
        editor: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file with --init")]
        force: bool,
    },
}
