// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ExportValue, ReportTable, notify_export_success};
use crate::ui::messages::info;
use crate::utils::time::date_to_excel_serial;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HOURS_FORMAT: &str = "0.00";
const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Export XLSX con styling e auto-larghezza colonne.
pub(crate) fn export_xlsx(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(table.kind.sheet_name())
        .map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = table.headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    for (row_index, values) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, value, band_color)?;

            let shown = UnicodeWidthStr::width(value.as_display().as_str());
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(shown);
            }
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Scrive una singola cella: ore come numero, date come seriale Excel, testo.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &ExportValue,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match value {
        ExportValue::Hours(h) => {
            let fmt = base.set_num_format(HOURS_FORMAT).set_align(FormatAlign::Right);
            worksheet
                .write_with_format(row, col, *h, &fmt)
                .map_err(to_export_error)?;
        }
        ExportValue::Date(d) => {
            let fmt = base.set_num_format(DATE_FORMAT);
            worksheet
                .write_with_format(row, col, date_to_excel_serial(*d), &fmt)
                .map_err(to_export_error)?;
        }
        ExportValue::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &base)
                .map_err(to_export_error)?;
        }
    }

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
