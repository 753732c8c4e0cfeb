//! Spreadsheet export of the in-memory result set.
//!
//! The export always operates on the records captured by the last successful
//! response, so the file and the rendered list agree row for row.

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::{Deserialize, Serialize};

use crate::constants::{EXPORT_FILE_PREFIX, SHEET_NAME};
use crate::types::Business;

/// Fixed column order of the exported table.
pub const COLUMNS: [&str; 7] = [
    "name",
    "address",
    "website",
    "phone",
    "reviewsCount",
    "averageRating",
    "coordinates",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn ext(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Deterministic export filename for a search term. The term is sanitized for
/// the filesystem but otherwise interpolated as typed.
pub fn export_file_name(term: &str, format: ExportFormat) -> String {
    format!(
        "{}{}.{}",
        EXPORT_FILE_PREFIX,
        sanitize_filename::sanitize(term.trim()),
        format.ext()
    )
}

/// Writes the result set into `dir` and returns the written path.
pub fn export_businesses(
    dir: &Path,
    term: &str,
    businesses: &[Business],
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(term, format));
    match format {
        ExportFormat::Xlsx => write_xlsx(&path, businesses)?,
        ExportFormat::Csv => write_csv(&path, businesses)?,
    }
    Ok(path)
}

fn write_xlsx(path: &Path, businesses: &[Business]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, title) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (row, business) in businesses.iter().enumerate() {
        for (col, cell) in business.export_row().iter().enumerate() {
            sheet.write_string(row as u32 + 1, col as u16, cell)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn write_csv(path: &Path, businesses: &[Business]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;
    for business in businesses {
        writer.write_record(&business.export_row())?;
    }
    writer.flush()?;
    Ok(())
}
