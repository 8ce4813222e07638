#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;

use api_catalog_translate::{TranslateError, TranslationBackend};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

/// A cell for [`write_xlsx`]. `Date` takes `YYYY-MM-DD HH:MM:SS` and is
/// stored as a real Excel date with a date number format.
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Date(&'a str),
    Empty,
}

pub use Cell::{Date, Empty, Number, Text};

/// Write a single-sheet workbook; the first row is the header row.
pub fn write_xlsx(path: &Path, rows: &[Vec<Cell<'_>>]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Text(s) => {
                    sheet.write_string(r as u32, c as u16, *s).unwrap();
                }
                Number(n) => {
                    sheet.write_number(r as u32, c as u16, *n).unwrap();
                }
                Date(s) => {
                    let date = ExcelDateTime::parse_from_str(s).unwrap();
                    sheet
                        .write_datetime_with_format(r as u32, c as u16, &date, &date_format)
                        .unwrap();
                }
                Empty => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Backend that prefixes `en:` and records each call.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: RefCell<Vec<String>>,
}

impl TranslationBackend for RecordingBackend {
    fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.calls.borrow_mut().push(text.to_string());
        Ok(format!("en:{text}"))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Backend whose every call fails, like an unreachable service.
pub struct FailingBackend;

impl TranslationBackend for FailingBackend {
    fn translate(&self, _text: &str) -> Result<String, TranslateError> {
        Err(TranslateError::ServerError { status: 503 })
    }

    fn name(&self) -> &str {
        "failing"
    }
}
