//! Spreadsheet loading: the first worksheet of an `.xlsx` file as a header
//! row plus data rows.

use std::collections::HashMap;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::error::SheetError;

/// One cell's value. `Missing` covers empty cells and cell errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Missing,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(String),
}

static MISSING: CellValue = CellValue::Missing;

/// Text cell contents that mean "no value". Matched exactly, before trimming.
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

impl CellValue {
    /// String form of the value, untrimmed. `None` for missing cells.
    ///
    /// Whole floats print without a fraction (`3`, not `3.0`) since xlsx
    /// stores every number as a float.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Text(s) | Self::DateTime(s) => Some(s.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::Float(f) => Some(format_float(*f)),
            Self::Bool(true) => Some("True".to_string()),
            Self::Bool(false) => Some("False".to_string()),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{f}")
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Self::Missing,
            Data::String(s) if NA_MARKERS.contains(&s.as_str()) => Self::Missing,
            Data::String(s) => Self::Text(s.clone()),
            Data::Int(n) => Self::Int(*n),
            Data::Float(f) => Self::Float(*f),
            Data::Bool(b) => Self::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => Self::DateTime(naive.format("%Y-%m-%d %H:%M:%S").to_string()),
                None => Self::Float(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Self::Text(s.clone()),
        }
    }
}

/// A table with named columns. Column names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|cells| Row {
            headers: &self.headers,
            cells,
        })
    }

    /// Trim leading and trailing whitespace from every column name.
    ///
    /// Case, inner whitespace, and punctuation are left alone.
    pub fn normalize_headers(&mut self) {
        for header in &mut self.headers {
            let trimmed = header.trim();
            if trimmed.len() != header.len() {
                *header = trimmed.to_string();
            }
        }
    }
}

/// A borrowed view of one data row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [CellValue],
}

impl<'a> Row<'a> {
    /// The cell under column `name`, or `None` if no such column exists.
    ///
    /// A row shorter than the header row reads as missing past its end.
    pub fn get(&self, name: &str) -> Option<&'a CellValue> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(self.cells.get(idx).unwrap_or(&MISSING))
    }
}

/// Read the first worksheet of the workbook at `path`.
///
/// The first row of the used range is the header row. An empty worksheet
/// yields an empty sheet.
pub fn read_sheet(path: &Path) -> Result<Sheet, SheetError> {
    let display = path.display().to_string();

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| SheetError::Open {
        path: display.clone(),
        source: e,
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SheetError::NoWorksheets(display.clone()))?
        .map_err(|e| SheetError::Read {
            path: display.clone(),
            source: e,
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Sheet::default());
    };

    let headers = unique_headers(header_row.iter().map(header_text));
    let body = rows
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();

    Ok(Sheet::new(headers, body))
}

/// Header cells keep not-available markers as literal names; only empty
/// cells are unnamed.
fn header_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) if !s.is_empty() => Some(s.clone()),
        other => CellValue::from(other).as_text(),
    }
}

/// Name every column: blank headers become `Unnamed: <index>` and repeats
/// get `.1`, `.2`, ... suffixes in order of appearance. A suffixed name that
/// is already taken is suffixed again, so `A, A, A.1` becomes
/// `A, A.1, A.1.1`.
pub(crate) fn unique_headers(raw: impl IntoIterator<Item = Option<String>>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    raw.into_iter()
        .enumerate()
        .map(|(i, name)| {
            let mut header = name.unwrap_or_else(|| format!("Unnamed: {i}"));
            let mut count = counts.get(&header).copied().unwrap_or(0);
            while count > 0 {
                counts.insert(header.clone(), count + 1);
                header = format!("{header}.{count}");
                count = counts.get(&header).copied().unwrap_or(0);
            }
            counts.insert(header.clone(), count + 1);
            header
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/sheet_tests.rs"]
mod tests;
