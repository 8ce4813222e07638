//! First-match field extraction over candidate header lists.

use api_catalog_core::{CatalogField, RowFields, candidates};

use crate::sheet::{CellValue, Row};

/// Value of the first candidate column that exists in `row`, is not
/// missing, and is non-blank after trimming. Empty string if none is.
pub fn pick_first(row: &Row<'_>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| row.get(key))
        .filter_map(CellValue::as_text)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Pick every logical catalog field from `row`.
pub fn pick_fields(row: &Row<'_>) -> RowFields {
    let mut fields = RowFields::default();
    for field in CatalogField::ALL {
        fields.set(field, pick_first(row, candidates(field)));
    }
    fields
}

#[cfg(test)]
#[path = "tests/picker_tests.rs"]
mod tests;
