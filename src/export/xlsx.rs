// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SummaryExport, get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_1: u32 = 0xEAF3FB;
const BAND_2: u32 = 0xFFFFFF;
const SUGGEST_BG: u32 = 0xFCE4D6;

/// Columns holding counters (written as numbers, right aligned).
const NUMERIC_COLUMNS: [usize; 3] = [2, 3, 4];

/// XLSX summary with styled header, banded rows and auto column widths.
/// Rows with a day-off suggestion are highlighted.
pub(crate) fn export_xlsx(rows: &[SummaryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Summary").map_err(to_export_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if r.is_suggested() {
            Color::RGB(SUGGEST_BG)
        } else if row_index % 2 == 0 {
            Color::RGB(BAND_1)
        } else {
            Color::RGB(BAND_2)
        };

        for (col, value) in row_to_cells(r).iter().enumerate() {
            write_cell(worksheet, row, col, value, bg)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(ws: &mut Worksheet, row: u32, col: usize, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if NUMERIC_COLUMNS.contains(&col)
        && let Ok(num) = s.parse::<f64>()
    {
        let fmt = base.set_align(FormatAlign::Right);
        ws.write_with_format(row, col as u16, num, &fmt)
            .map_err(to_export_error)?;
        return Ok(());
    }

    ws.write_with_format(row, col as u16, s, &base)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
