//! Header candidate tables for the logical catalog fields.
//!
//! Source spreadsheets were authored by different people and spell the same
//! column differently. Each logical field lists the accepted header spellings
//! in preference order; the first one present and non-blank in a row wins.
//! New spellings go into these tables, not into the importer.

/// A logical field extracted from a spreadsheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogField {
    DomainCode,
    VendorName,
    ApiProduct,
    ApiFocus,
    PrimaryUsers,
}

impl CatalogField {
    /// All fields, in the order the importer extracts them.
    pub const ALL: [CatalogField; 5] = [
        Self::DomainCode,
        Self::VendorName,
        Self::ApiProduct,
        Self::ApiFocus,
        Self::PrimaryUsers,
    ];

    /// Output key of the original-language value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DomainCode => "domain_code",
            Self::VendorName => "vendor_name",
            Self::ApiProduct => "api_product",
            Self::ApiFocus => "api_focus",
            Self::PrimaryUsers => "primary_users",
        }
    }

    /// Whether the field gets a translated `_en` counterpart.
    pub fn is_translated(&self) -> bool {
        !matches!(self, Self::DomainCode)
    }
}

impl std::fmt::Display for CatalogField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DOMAIN_CODE_KEYS: &[&str] = &["領域編號", "領域", "類別"];

pub const VENDOR_KEYS: &[&str] = &["廠商名稱"];

pub const PRODUCT_KEYS: &[&str] = &[
    "API 核心功能/產品",
    "API 核心功能",
    "API 核心功能/側重",
    "核心功能",
];

pub const FOCUS_KEYS: &[&str] = &[
    "API 類型/側重",
    "主要優勢",
    "主要優勢與特色",
    "主要強項與API特色",
    "專注 的領域",
    "補充資訊/專長",
    "支援的主要 支付方式 (部分)",
];

pub const PRIMARY_USER_KEYS: &[&str] = &[
    "主要應用者/場景",
    "典型應用者",
    "典型使用者/專注領域",
    "典型應用場景",
    "主要服務區域或目標客群",
    "適用場景",
];

/// Accepted header spellings for `field`, most preferred first.
pub fn candidates(field: CatalogField) -> &'static [&'static str] {
    match field {
        CatalogField::DomainCode => DOMAIN_CODE_KEYS,
        CatalogField::VendorName => VENDOR_KEYS,
        CatalogField::ApiProduct => PRODUCT_KEYS,
        CatalogField::ApiFocus => FOCUS_KEYS,
        CatalogField::PrimaryUsers => PRIMARY_USER_KEYS,
    }
}
