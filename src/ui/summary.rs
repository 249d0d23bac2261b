//! Terminal rendering of an aggregation result.

use crate::export::{ReportKind, ReportTable};
use crate::models::{AggregateResult, Balance};
use crate::ui::messages::header;
use crate::utils::colors::{BOLD, RESET, color_for_delta};
use crate::utils::formatting::{hours2readable, hours2str};
use crate::utils::table::{Align, Column, Table};

/// User, totals and the overtime/undertime line.
pub fn print_summary(result: &AggregateResult) {
    header("Summary");
    println!("{BOLD}User:{RESET} {}", result.user);
    println!(
        "{BOLD}Total Hours Worked:{RESET} {} ({})",
        hours2str(result.total_hours, false),
        hours2readable(result.total_hours)
    );
    println!(
        "{BOLD}Expected Monthly Hours:{RESET} {}",
        hours2str(result.expected_hours.unwrap_or(0.0), false)
    );

    let line = balance_line(result.balance());
    let color = color_for_delta(result.delta().unwrap_or(result.total_hours));
    println!("{color}{line}{RESET}");
}

/// Plain text of the balance line, without colors.
pub fn balance_line(balance: Balance) -> String {
    match balance {
        Balance::Overtime(h) => format!("🟢 Overtime: {} hours", hours2str(h, false)),
        Balance::Undertime(h) => format!("🔴 Undertime: {} hours", hours2str(h, false)),
        Balance::Exact => "⚖️  Exactly met expected hours".to_string(),
    }
}

/// Date / Hours Worked table of the daily breakdown.
pub fn print_daily_table(result: &AggregateResult) {
    header("Daily Work Hours");

    if result.daily.is_empty() {
        println!("No completed same-day sessions.");
        return;
    }

    let projected = ReportTable::from_result(ReportKind::Daily, result);
    let headers = projected.headers();

    let mut table = Table::new(vec![
        Column {
            header: headers[0].to_string(),
            align: Align::Left,
        },
        Column {
            header: headers[1].to_string(),
            align: Align::Right,
        },
    ]);

    for row in projected.to_strings() {
        table.add_row(row);
    }

    print!("{}", table.render());
    println!(
        "{BOLD}{} day(s), {} hours{RESET}",
        result.daily.len(),
        hours2str(result.total_hours, false)
    );
}
