use marketdesk_types::Timestamp;
use proptest::prelude::*;

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_rfc3339_utc() {
    let ts = Timestamp::parse("2024-03-01T10:15:00.000Z").unwrap();
    assert_eq!(ts.as_secs(), 1_709_288_100);
}

#[test]
fn parse_rfc3339_with_offset() {
    let utc = Timestamp::parse("2024-03-01T10:15:00Z").unwrap();
    let offset = Timestamp::parse("2024-03-01T15:45:00+05:30").unwrap();
    assert_eq!(utc, offset);
}

#[test]
fn parse_sql_style() {
    let sql = Timestamp::parse("2024-03-01 10:15:00").unwrap();
    let iso = Timestamp::parse("2024-03-01T10:15:00Z").unwrap();
    assert_eq!(sql, iso);
}

#[test]
fn parse_naive_iso_with_fraction() {
    let ts = Timestamp::parse("2024-03-01T10:15:00.250").unwrap();
    assert_eq!(ts.as_millis() % 1000, 250);
}

#[test]
fn parse_bare_date_is_midnight() {
    let ts = Timestamp::parse("2024-03-01").unwrap();
    let midnight = Timestamp::parse("2024-03-01T00:00:00Z").unwrap();
    assert_eq!(ts, midnight);
}

#[test]
fn parse_trims_whitespace() {
    assert!(Timestamp::parse(" 2024-03-01 ").is_ok());
}

#[test]
fn parse_garbage_rejected() {
    assert!(Timestamp::parse("yesterday").is_err());
    assert!(Timestamp::parse("").is_err());
    assert!(Timestamp::parse("2024-13-45").is_err());
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn ordering_is_chronological() {
    let a = Timestamp::parse("2023-12-31T23:59:59Z").unwrap();
    let b = Timestamp::parse("2024-01-01T00:00:00Z").unwrap();
    assert!(a < b);
}

#[test]
fn from_millis_and_back() {
    let ts = Timestamp::from_millis(1_700_000_000_123).unwrap();
    assert_eq!(ts.as_millis(), 1_700_000_000_123);
}

#[test]
fn from_secs_and_back() {
    let ts = Timestamp::from_secs(1_700_000_000).unwrap();
    assert_eq!(ts.as_secs(), 1_700_000_000);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn deserialize_sql_string() {
    let ts: Timestamp = serde_json::from_str(r#""2024-03-01 10:15:00""#).unwrap();
    assert_eq!(ts, Timestamp::parse("2024-03-01T10:15:00Z").unwrap());
}

#[test]
fn deserialize_invalid_string_fails() {
    assert!(serde_json::from_str::<Timestamp>(r#""not a date""#).is_err());
}

#[test]
fn serialize_is_rfc3339() {
    let ts = Timestamp::parse("2024-03-01T10:15:00Z").unwrap();
    let json = serde_json::to_string(&ts).unwrap();
    assert_eq!(json, r#""2024-03-01T10:15:00+00:00""#);
}

proptest! {
    #[test]
    fn ordering_matches_epoch_millis(a in 0i64..4_000_000_000_000, b in 0i64..4_000_000_000_000) {
        let ta = Timestamp::from_millis(a).unwrap();
        let tb = Timestamp::from_millis(b).unwrap();
        prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
    }

    #[test]
    fn display_parses_back(secs in 0i64..4_000_000_000) {
        let ts = Timestamp::from_secs(secs).unwrap();
        let parsed = Timestamp::parse(&ts.to_string()).unwrap();
        prop_assert_eq!(ts, parsed);
    }
}
