//! Build the full catalog from a directory of spreadsheets.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use api_catalog_core::CatalogRecord;
use api_catalog_translate::TranslationBackend;

use crate::error::ImportError;
use crate::file_import::{ImportStats, import_file};
use crate::progress::ImportProgress;

/// Extension of the spreadsheet files picked up from the source directory.
pub const SHEET_EXTENSION: &str = "xlsx";

/// Where to read spreadsheets from and where to write the catalog.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    pub directory: PathBuf,
    pub output: PathBuf,
}

/// Outcome of a successful [`build_catalog`] run.
#[derive(Debug)]
pub struct CatalogSummary {
    pub files: usize,
    pub records: usize,
    pub stats: ImportStats,
    pub output: PathBuf,
}

/// List the `.xlsx` files directly inside `dir`, sorted by file name.
pub fn discover_sheets(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    if !dir.is_dir() {
        return Err(ImportError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = fs::read_dir(dir)
        .map_err(|e| ImportError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            let path = e.path();
            path.is_file() && path.extension().is_some_and(|ext| ext == SHEET_EXTENSION)
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    Ok(entries.into_iter().map(|e| e.path()).collect())
}

/// Import every spreadsheet in `dir`, concatenating records in file order and
/// then row order. The first unreadable file aborts the run.
pub fn collect_records(
    dir: &Path,
    backend: &dyn TranslationBackend,
    progress: &dyn ImportProgress,
) -> Result<(Vec<CatalogRecord>, ImportStats, usize), ImportError> {
    let files = discover_sheets(dir)?;
    let mut records = Vec::new();
    let mut stats = ImportStats::default();

    for (i, path) in files.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        progress.on_file(i + 1, files.len(), &name);

        let imported = import_file(path, backend)?;
        log::debug!(
            "{}: {} record(s) from {} row(s), {} translation call(s), {} cache hit(s)",
            name,
            imported.stats.records,
            imported.stats.rows_read,
            imported.stats.cache_misses,
            imported.stats.cache_hits,
        );
        stats.merge(&imported.stats);
        records.extend(imported.records);
    }

    Ok((records, stats, files.len()))
}

/// Write `records` as a pretty-printed JSON array, replacing any existing
/// file and creating parent directories as needed. Non-ASCII text is written
/// as-is.
pub fn write_catalog(path: &Path, records: &[CatalogRecord]) -> Result<(), ImportError> {
    let write_err = |e: std::io::Error| ImportError::Write {
        path: path.display().to_string(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| ImportError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

/// Run the whole pipeline: discover, import, translate, write.
pub fn build_catalog(
    options: &CatalogOptions,
    backend: &dyn TranslationBackend,
    progress: &dyn ImportProgress,
) -> Result<CatalogSummary, ImportError> {
    progress.on_phase(&format!(
        "Importing spreadsheets from {} ({})",
        options.directory.display(),
        backend.name()
    ));
    let (records, stats, files) = collect_records(&options.directory, backend, progress)?;

    progress.on_phase(&format!("Writing {}", options.output.display()));
    write_catalog(&options.output, &records)?;

    progress.on_complete(&format!(
        "{} record(s) from {} file(s); {} row(s) skipped",
        records.len(),
        files,
        stats.rows_skipped
    ));

    Ok(CatalogSummary {
        files,
        records: records.len(),
        stats,
        output: options.output.clone(),
    })
}
