use marketdesk_model::{FieldType, RecordSchema, SchemaField};

// ── SchemaField constructors ─────────────────────────────────────

#[test]
fn text_field_searchable() {
    let f = SchemaField::text("name", true);
    assert_eq!(f.name, "name");
    assert_eq!(f.field_type, FieldType::Text);
    assert!(f.searchable);
}

#[test]
fn text_field_not_searchable() {
    let f = SchemaField::text("description", false);
    assert!(!f.searchable);
}

#[test]
fn enumeration_keeps_options() {
    let f = SchemaField::enumeration("status", &["active", "draft"]);
    assert_eq!(f.field_type, FieldType::Enum);
    assert_eq!(
        f.enum_options,
        Some(vec!["active".to_string(), "draft".to_string()])
    );
    assert!(!f.searchable);
}

#[test]
fn category_has_no_fixed_options() {
    let f = SchemaField::category("category_name");
    assert_eq!(f.field_type, FieldType::Enum);
    assert_eq!(f.enum_options, None);
}

#[test]
fn number_datetime_bool_list() {
    assert_eq!(SchemaField::number("price").field_type, FieldType::Number);
    assert_eq!(SchemaField::datetime("created_at").field_type, FieldType::DateTime);
    assert_eq!(SchemaField::bool("active").field_type, FieldType::Bool);
    assert_eq!(SchemaField::list("variants").field_type, FieldType::List);
}

// ── RecordSchema ─────────────────────────────────────────────────

fn make_product_schema() -> RecordSchema {
    RecordSchema::new(
        "product",
        vec![
            SchemaField::text("product_name", true),
            SchemaField::text("sku", true),
            SchemaField::text("description", false),
            SchemaField::number("base_price"),
            SchemaField::datetime("created_at"),
        ],
    )
}

#[test]
fn default_id_field() {
    assert_eq!(make_product_schema().id_field, "id");
}

#[test]
fn with_id_field_overrides() {
    let s = make_product_schema().with_id_field("product_id");
    assert_eq!(s.id_field, "product_id");
}

#[test]
fn searchable_fields_in_declaration_order() {
    let s = make_product_schema();
    let fields: Vec<&str> = s.searchable_fields().collect();
    assert_eq!(fields, vec!["product_name", "sku"]);
}

#[test]
fn field_lookup() {
    let s = make_product_schema();
    assert_eq!(s.field_type("base_price"), Some(FieldType::Number));
    assert_eq!(s.field_type("missing"), None);
    assert!(s.field("sku").is_some());
}

#[test]
fn is_temporal() {
    let s = make_product_schema();
    assert!(s.is_temporal("created_at"));
    assert!(!s.is_temporal("product_name"));
    assert!(!s.is_temporal("missing"));
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn schema_serde_roundtrip() {
    let s = make_product_schema();
    let json = serde_json::to_string(&s).unwrap();
    let parsed: RecordSchema = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, s);
}

#[test]
fn field_type_serializes_snake_case() {
    let json = serde_json::to_string(&FieldType::DateTime).unwrap();
    assert_eq!(json, r#""date_time""#);
}

#[test]
fn schema_from_config_json_with_defaults() {
    let json = r#"{
        "entity_type": "vendor",
        "fields": [
            {"name": "name", "field_type": "text", "searchable": true},
            {"name": "status", "field_type": "enum", "options": ["active", "pending"]},
            {"name": "joinedAt", "field_type": "date_time"}
        ]
    }"#;
    let s: RecordSchema = serde_json::from_str(json).unwrap();
    assert_eq!(s.id_field, "id");
    assert_eq!(s.fields.len(), 3);
    assert!(!s.fields[2].searchable);
    assert_eq!(s.fields[1].enum_options.as_ref().map(Vec::len), Some(2));
}
