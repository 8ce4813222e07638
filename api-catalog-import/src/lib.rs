//! Import API vendor spreadsheets into a translated JSON catalog.
//!
//! This crate owns the whole pipeline: reading `.xlsx` sheets, normalizing
//! headers, picking logical fields by candidate header lists, translating
//! text fields, and writing the concatenated catalog.

pub mod catalog;
pub mod error;
pub mod file_import;
pub mod picker;
pub mod progress;
pub mod sheet;

pub use catalog::{
    CatalogOptions, CatalogSummary, SHEET_EXTENSION, build_catalog, collect_records,
    discover_sheets, write_catalog,
};
pub use error::{ImportError, SheetError};
pub use file_import::{FileImport, ImportStats, import_file, import_sheet};
pub use picker::{pick_fields, pick_first};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use sheet::{CellValue, Row, Sheet, read_sheet};
