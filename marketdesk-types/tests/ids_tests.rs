use marketdesk_types::RecordId;
use std::collections::HashSet;
use std::str::FromStr;

// ── Construction ──────────────────────────────────────────────────

#[test]
fn generate_is_unique() {
    let a = RecordId::generate();
    let b = RecordId::generate();
    assert_ne!(a, b);
}

#[test]
fn from_integer() {
    let id = RecordId::from(42_i64);
    assert_eq!(id.as_str(), "42");
}

#[test]
fn from_uuid() {
    let uuid = uuid::Uuid::now_v7();
    let id = RecordId::from(uuid);
    assert_eq!(id.to_string(), uuid.to_string());
}

#[test]
fn parse_trims_whitespace() {
    let id = RecordId::parse("  sub-7 ").unwrap();
    assert_eq!(id.as_str(), "sub-7");
}

#[test]
fn parse_empty_rejected() {
    assert!(RecordId::parse("").is_err());
    assert!(RecordId::parse("   ").is_err());
}

#[test]
fn from_str_matches_parse() {
    let id = RecordId::from_str("abc").unwrap();
    assert_eq!(id, RecordId::parse("abc").unwrap());
}

#[test]
fn hash_and_eq() {
    let id = RecordId::from(7_i64);
    let mut set = HashSet::new();
    set.insert(id.clone());
    set.insert(id);
    assert_eq!(set.len(), 1);
}

// ── Serde ─────────────────────────────────────────────────────────

#[test]
fn deserialize_numeric_id() {
    let id: RecordId = serde_json::from_str("17").unwrap();
    assert_eq!(id.as_str(), "17");
}

#[test]
fn deserialize_string_id() {
    let id: RecordId = serde_json::from_str(r#""sub-3""#).unwrap();
    assert_eq!(id.as_str(), "sub-3");
}

#[test]
fn deserialize_empty_string_rejected() {
    assert!(serde_json::from_str::<RecordId>(r#""""#).is_err());
}

#[test]
fn serialize_as_plain_string() {
    let json = serde_json::to_string(&RecordId::from(5_i64)).unwrap();
    assert_eq!(json, r#""5""#);
}
