use api_catalog_core::*;

fn sample_fields() -> RowFields {
    RowFields {
        domain_code: "A01".to_string(),
        vendor_name: "綠界科技".to_string(),
        api_product: "金流 API".to_string(),
        api_focus: String::new(),
        primary_users: "電商平台".to_string(),
    }
}

#[test]
fn category_derives_slug() {
    let category = Category::new("Payments & Billing API");
    assert_eq!(category.name, "Payments & Billing API");
    assert_eq!(category.slug, "payments-billing-api");
}

#[test]
fn blank_row_needs_vendor_or_product() {
    let mut fields = RowFields::default();
    assert!(fields.is_blank());

    fields.primary_users = "開發者".to_string();
    fields.domain_code = "B".to_string();
    assert!(fields.is_blank());

    fields.api_product = "簡訊".to_string();
    assert!(!fields.is_blank());

    let vendor_only = RowFields {
        vendor_name: "Twilio".to_string(),
        ..Default::default()
    };
    assert!(!vendor_only.is_blank());
}

#[test]
fn set_and_get_round_trip_per_field() {
    let mut fields = RowFields::default();
    for field in CatalogField::ALL {
        fields.set(field, field.as_str().to_uppercase());
    }
    for field in CatalogField::ALL {
        assert_eq!(fields.get(field), field.as_str().to_uppercase());
    }
}

#[test]
fn from_fields_translates_in_output_order() {
    let category = Category::new("Payments");
    let mut seen = Vec::new();
    let record = CatalogRecord::from_fields(&category, sample_fields(), "Payments.xlsx", |text| {
        seen.push(text.to_string());
        format!("<{text}>")
    });

    assert_eq!(seen, vec!["綠界科技", "金流 API", "", "電商平台"]);
    assert_eq!(record.domain_code, "A01");
    assert_eq!(record.category, "Payments");
    assert_eq!(record.category_slug, "payments");
    assert_eq!(record.vendor_name, "綠界科技");
    assert_eq!(record.vendor_name_en, "<綠界科技>");
    assert_eq!(record.api_product_en, "<金流 API>");
    assert_eq!(record.api_focus_en, "<>");
    assert_eq!(record.primary_users_en, "<電商平台>");
    assert_eq!(record.source_file, "Payments.xlsx");
}

#[test]
fn serialized_record_has_exact_field_set_in_order() {
    let category = Category::new("Payments");
    let record =
        CatalogRecord::from_fields(&category, sample_fields(), "Payments.xlsx", str::to_string);
    let json = serde_json::to_string_pretty(&record).unwrap();

    let keys = [
        "domain_code",
        "category",
        "category_slug",
        "vendor_name",
        "vendor_name_en",
        "api_product",
        "api_product_en",
        "api_focus",
        "api_focus_en",
        "primary_users",
        "primary_users_en",
        "source_file",
    ];
    let mut last = 0;
    for key in keys {
        let pos = json.find(&format!("\"{key}\"")).unwrap();
        assert!(pos >= last, "{key} out of order");
        last = pos;
    }

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_object().unwrap().len(), keys.len());
    assert!(json.contains("綠界科技"), "non-ASCII text must not be escaped");
}

#[test]
fn deserialize_rejects_extra_fields() {
    let json = r#"{
        "domain_code": "", "category": "", "category_slug": "",
        "vendor_name": "", "vendor_name_en": "", "api_product": "",
        "api_product_en": "", "api_focus": "", "api_focus_en": "",
        "primary_users": "", "primary_users_en": "", "source_file": "",
        "extra": ""
    }"#;
    assert!(serde_json::from_str::<CatalogRecord>(json).is_err());
}
