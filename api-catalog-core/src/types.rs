//! Data model types for the API vendor catalog.

use serde::{Deserialize, Serialize};

use crate::fields::CatalogField;
use crate::slug::slugify;

// ── Category ────────────────────────────────────────────────────────────────

/// A catalog category, derived from a source spreadsheet's file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }
}

// ── Row fields ──────────────────────────────────────────────────────────────

/// The logical fields picked out of one spreadsheet row, before translation.
///
/// Every value is trimmed; absent columns become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    pub domain_code: String,
    pub vendor_name: String,
    pub api_product: String,
    pub api_focus: String,
    pub primary_users: String,
}

impl RowFields {
    /// A row with neither a vendor name nor a product carries nothing worth
    /// cataloguing and is dropped by the importer.
    pub fn is_blank(&self) -> bool {
        self.vendor_name.is_empty() && self.api_product.is_empty()
    }

    pub fn get(&self, field: CatalogField) -> &str {
        match field {
            CatalogField::DomainCode => &self.domain_code,
            CatalogField::VendorName => &self.vendor_name,
            CatalogField::ApiProduct => &self.api_product,
            CatalogField::ApiFocus => &self.api_focus,
            CatalogField::PrimaryUsers => &self.primary_users,
        }
    }

    pub fn set(&mut self, field: CatalogField, value: String) {
        match field {
            CatalogField::DomainCode => self.domain_code = value,
            CatalogField::VendorName => self.vendor_name = value,
            CatalogField::ApiProduct => self.api_product = value,
            CatalogField::ApiFocus => self.api_focus = value,
            CatalogField::PrimaryUsers => self.primary_users = value,
        }
    }
}

// ── Record ──────────────────────────────────────────────────────────────────

/// One normalized, translated catalog entry.
///
/// Serialized field order is the output JSON key order. Every field is a
/// string; nothing is ever null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogRecord {
    pub domain_code: String,
    pub category: String,
    pub category_slug: String,
    pub vendor_name: String,
    pub vendor_name_en: String,
    pub api_product: String,
    pub api_product_en: String,
    pub api_focus: String,
    pub api_focus_en: String,
    pub primary_users: String,
    pub primary_users_en: String,
    pub source_file: String,
}

impl CatalogRecord {
    /// Assemble a record from picked row fields.
    ///
    /// `translate` is called once for each translated field, in output order.
    pub fn from_fields(
        category: &Category,
        fields: RowFields,
        source_file: &str,
        mut translate: impl FnMut(&str) -> String,
    ) -> Self {
        let mut translated = RowFields::default();
        for field in CatalogField::ALL.into_iter().filter(CatalogField::is_translated) {
            translated.set(field, translate(fields.get(field)));
        }

        Self {
            domain_code: fields.domain_code,
            category: category.name.clone(),
            category_slug: category.slug.clone(),
            vendor_name: fields.vendor_name,
            vendor_name_en: translated.vendor_name,
            api_product: fields.api_product,
            api_product_en: translated.api_product,
            api_focus: fields.api_focus,
            api_focus_en: translated.api_focus,
            primary_users: fields.primary_users,
            primary_users_en: translated.primary_users,
            source_file: source_file.to_string(),
        }
    }
}
