use crate::cli::parser::ReportArgs;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ReportKind};
use crate::input::read_table;
use crate::models::AggregateResult;
use crate::ui::messages::success;
use crate::ui::summary::{print_daily_table, print_summary};
use std::path::Path;
use tracing::info;

/// Shared flow of `total` and `daily`: read, aggregate, print, export.
pub(crate) fn run_report(
    file: &Path,
    opts: &ReportArgs,
    cfg: &Config,
    kind: ReportKind,
) -> AppResult<AggregateResult> {
    let sheet = opts.sheet.as_deref().or(cfg.sheet.as_deref());
    let table = read_table(file, sheet)?;

    let expected = Some(opts.expected.unwrap_or(cfg.expected_monthly_hours));

    let result = match kind {
        ReportKind::Total => Core::total_report(&table, expected)?,
        ReportKind::Daily => Core::daily_report(&table, expected)?,
    };

    info!(
        user = %result.user,
        total_hours = result.total_hours,
        days = result.daily.len(),
        "aggregation done"
    );

    success("Calculation completed successfully");
    print_summary(&result);

    if kind == ReportKind::Daily {
        print_daily_table(&result);
    }

    if opts.export {
        let format = opts.format.unwrap_or(cfg.export_format);
        let out_dir = opts.out.clone().unwrap_or_else(|| cfg.output_dir());
        ExportLogic::export(&result, kind, format, &out_dir, opts.force)?;
    }

    Ok(result)
}
