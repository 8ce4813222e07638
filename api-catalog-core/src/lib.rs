//! API vendor catalog data model, slug rules, and header candidate tables.
//!
//! This crate has no I/O. The importer fills [`CatalogRecord`]s from
//! spreadsheet rows using the [`fields`] tables, and the CLI serializes them.

pub mod fields;
pub mod slug;
pub mod types;

pub use fields::{CatalogField, candidates};
pub use slug::slugify;
pub use types::*;
