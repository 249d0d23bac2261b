//! Formatting utilities used for CLI and export outputs.

/// Round to 2 decimals on the exact decimal value of `value` (ties to even).
///
/// es: 450 s = 0.125 h → 0.12, 2214 s = 0.615 h → 0.61
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Seconds → hours, rounded to 2 decimals.
pub fn secs2hours(secs: f64) -> f64 {
    round2(secs / 3600.0)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(unicode_width::UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(unicode_width::UnicodeWidthStr::width(s));
    format!("{}{s}", " ".repeat(fill))
}

/// Hours as a 2-decimal string, optionally signed.
///
/// es: `7.5` → "7.50", `-1.25` with sign → "-1.25", `2.0` with sign → "+2.00"
pub fn hours2str(hours: f64, want_sign: bool) -> String {
    let h = round2(hours);
    if want_sign && h > 0.0 {
        format!("+{h:.2}")
    } else {
        format!("{h:.2}")
    }
}

/// Hours as a human readable duration, es: `7.5` → "07h 30m".
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours.abs() * 60.0).round() as i64;
    let sign = if hours < 0.0 && total_minutes > 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, total_minutes / 60, total_minutes % 60)
}
