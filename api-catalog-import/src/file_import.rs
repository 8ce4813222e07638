//! Turn one spreadsheet into catalog records.

use std::path::Path;

use api_catalog_core::{CatalogRecord, Category};
use api_catalog_translate::{TranslationBackend, Translator};

use crate::error::ImportError;
use crate::picker::pick_fields;
use crate::sheet::{Sheet, read_sheet};

/// Statistics from importing one or more files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub rows_read: u64,
    pub rows_skipped: u64,
    pub records: u64,
    pub cache_hits: u64,
    /// Distinct non-empty texts sent to the backend.
    pub cache_misses: u64,
}

impl ImportStats {
    pub fn merge(&mut self, other: &ImportStats) {
        self.rows_read += other.rows_read;
        self.rows_skipped += other.rows_skipped;
        self.records += other.records;
        self.cache_hits += other.cache_hits;
        self.cache_misses += other.cache_misses;
    }
}

/// Records produced from one file, in row order.
#[derive(Debug, Default)]
pub struct FileImport {
    pub records: Vec<CatalogRecord>,
    pub stats: ImportStats,
}

/// Import the spreadsheet at `path`.
///
/// The category is the file name without its extension. Pass
/// [`api_catalog_translate::PassThrough`] as `backend` to keep the original
/// text in the translated fields. Read errors are returned as-is; there is
/// no per-row recovery.
pub fn import_file(
    path: &Path,
    backend: &dyn TranslationBackend,
) -> Result<FileImport, ImportError> {
    let category_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let source_file = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let sheet = read_sheet(path)?;
    Ok(import_sheet(
        sheet,
        &Category::new(category_name),
        &source_file,
        backend,
    ))
}

/// Map every qualifying row of an already-loaded sheet to a record.
///
/// Rows with neither a vendor name nor a product are dropped silently.
/// Each call starts a fresh translation cache.
pub fn import_sheet(
    mut sheet: Sheet,
    category: &Category,
    source_file: &str,
    backend: &dyn TranslationBackend,
) -> FileImport {
    sheet.normalize_headers();
    if sheet.is_empty() {
        log::debug!("{source_file}: no data rows");
    }

    let mut translator = Translator::new(backend);
    let mut stats = ImportStats::default();
    let mut records = Vec::with_capacity(sheet.len());

    for row in sheet.rows() {
        stats.rows_read += 1;
        let fields = pick_fields(&row);
        if fields.is_blank() {
            stats.rows_skipped += 1;
            continue;
        }
        records.push(CatalogRecord::from_fields(
            category,
            fields,
            source_file,
            |text| translator.translate(text),
        ));
    }

    stats.records = records.len() as u64;
    stats.cache_hits = translator.cache().hits();
    stats.cache_misses = translator.cache().misses();

    log::debug!(
        "{}: {} distinct text(s) translated, {} cache hit(s)",
        source_file,
        translator.cache().len(),
        stats.cache_hits
    );
    if stats.rows_skipped > 0 {
        log::debug!(
            "{}: skipped {} row(s) without vendor or product",
            source_file,
            stats.rows_skipped
        );
    }

    FileImport { records, stats }
}

#[cfg(test)]
#[path = "tests/file_import_tests.rs"]
mod tests;
