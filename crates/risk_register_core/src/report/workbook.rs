//! Workbook table model and xlsx writer.
//!
//! # Responsibility
//! - Describe sheets as positioned tables, free labels and an optional image.
//! - Provide the narrow "write named tables to named sheets" seam.
//!
//! # Invariants
//! - Sheets are written in slice order; names are used verbatim.
//! - Each table block writes its header row at `start_row`, data rows below.

use super::{ReportError, ReportResult};
use rust_xlsxwriter::{Format, Image, Workbook, Worksheet};
use std::path::{Path, PathBuf};

/// One cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Number(f64),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Header row plus data rows anchored at a zero-based row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub start_row: u32,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Free-standing text cell, e.g. a section title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellLabel {
    pub row: u32,
    pub col: u16,
    pub text: String,
}

/// Image file anchored at a zero-based cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAnchor {
    pub row: u32,
    pub col: u16,
    pub path: PathBuf,
}

/// One named worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub blocks: Vec<TableBlock>,
    pub labels: Vec<CellLabel>,
    pub image: Option<ImageAnchor>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
            labels: Vec::new(),
            image: None,
        }
    }
}

/// Writes named sheets to a workbook file.
pub trait WorkbookWriter {
    fn write_workbook(&self, sheets: &[Sheet], path: &Path) -> ReportResult<()>;
}

impl<T: WorkbookWriter + ?Sized> WorkbookWriter for &T {
    fn write_workbook(&self, sheets: &[Sheet], path: &Path) -> ReportResult<()> {
        (**self).write_workbook(sheets, path)
    }
}

/// `.xlsx` writer backed by `rust_xlsxwriter`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWorkbookWriter;

impl WorkbookWriter for XlsxWorkbookWriter {
    fn write_workbook(&self, sheets: &[Sheet], path: &Path) -> ReportResult<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let label_format = Format::new().set_bold().set_italic();

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(sheet.name.as_str())?;

            for block in &sheet.blocks {
                write_block(worksheet, block, &header_format)?;
            }
            for label in &sheet.labels {
                worksheet.write_string_with_format(
                    label.row,
                    label.col,
                    label.text.as_str(),
                    &label_format,
                )?;
            }
            worksheet.autofit();

            if let Some(anchor) = &sheet.image {
                let image = Image::new(&anchor.path)?;
                worksheet.insert_image(anchor.row, anchor.col, &image)?;
            }
        }

        workbook.save(path)?;
        log::info!(
            "event=workbook_written module=report status=ok path={} sheets={}",
            path.display(),
            sheets.len()
        );
        Ok(())
    }
}

fn write_block(
    worksheet: &mut Worksheet,
    block: &TableBlock,
    header_format: &Format,
) -> ReportResult<()> {
    for (col, header) in block.headers.iter().enumerate() {
        worksheet.write_string_with_format(
            block.start_row,
            column_index(col)?,
            header.as_str(),
            header_format,
        )?;
    }

    for (offset, row) in block.rows.iter().enumerate() {
        let row_num = block.start_row + 1 + row_index(offset)?;
        for (col, value) in row.iter().enumerate() {
            let col_num = column_index(col)?;
            match value {
                CellValue::Text(text) => {
                    worksheet.write_string(row_num, col_num, text.as_str())?;
                }
                CellValue::Integer(number) => {
                    worksheet.write_number(row_num, col_num, *number as f64)?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number(row_num, col_num, *number)?;
                }
            }
        }
    }
    Ok(())
}

fn column_index(col: usize) -> ReportResult<u16> {
    u16::try_from(col).map_err(|_| ReportError::Layout(format!("column {col} out of range")))
}

fn row_index(row: usize) -> ReportResult<u32> {
    u32::try_from(row).map_err(|_| ReportError::Layout(format!("row {row} out of range")))
}
