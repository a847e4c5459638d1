mod common;

use common::{expiring_token, super_admin_token, token, vendor_token};
use marketdesk_model::UserRole;
use marketdesk_session::{Claims, ProductScope, Session, SessionError, SessionStore};
use marketdesk_types::{RecordId, Timestamp};
use pretty_assertions::assert_eq;

// ── Token decoding ───────────────────────────────────────────────

#[test]
fn decodes_claims() {
    let claims = Claims::decode(&vendor_token(12)).unwrap();
    assert_eq!(claims.id, Some(RecordId::from(7_i64)));
    assert_eq!(claims.email, "shop@example.com");
    assert_eq!(claims.role, "vendor_admin");
    assert_eq!(claims.vendor_id, Some(12));
    assert_eq!(claims.exp, None);
}

#[test]
fn rejects_wrong_segment_count() {
    assert!(matches!(
        Claims::decode("only.two"),
        Err(SessionError::InvalidTokenFormat(_))
    ));
    assert!(matches!(
        Session::from_token(""),
        Err(SessionError::InvalidTokenFormat(_))
    ));
}

#[test]
fn rejects_bad_base64_and_json() {
    assert!(matches!(
        Claims::decode("a.!!!.c"),
        Err(SessionError::InvalidEncoding(_))
    ));
    assert!(matches!(
        Session::from_token(&token("not json")),
        Err(SessionError::InvalidPayload(_))
    ));
}

#[test]
fn accepts_padded_payload() {
    let tok = super_admin_token();
    let mut parts: Vec<String> = tok.split('.').map(String::from).collect();
    parts[1].push_str("==");
    assert!(Session::from_token(&parts.join(".")).is_ok());
}

// ── Session validation ───────────────────────────────────────────

#[test]
fn builds_session_from_valid_token() {
    let session = Session::from_token(&super_admin_token()).unwrap();
    let user = session.user();
    assert_eq!(user.id, RecordId::from(1_i64));
    assert_eq!(user.name, "Admin User");
    assert_eq!(user.role, UserRole::SuperAdmin);
    assert_eq!(user.vendor_id, None);
    assert_eq!(session.bearer(), format!("Bearer {}", super_admin_token()));
}

#[test]
fn missing_claims_are_rejected() {
    let cases = [
        (r#"{"email":"a@b.c","name":"A","role":"staff"}"#, "id"),
        (r#"{"id":1,"name":"A","role":"staff"}"#, "email"),
        (r#"{"id":1,"email":"a@b.c","name":"  ","role":"staff"}"#, "name"),
        (r#"{"id":1,"email":"a@b.c","name":"A"}"#, "role"),
    ];
    for (payload, claim) in cases {
        match Session::from_token(&token(payload)) {
            Err(SessionError::MissingClaim(missing)) => assert_eq!(missing, claim),
            other => panic!("expected missing {claim}, got {other:?}"),
        }
    }
}

#[test]
fn unknown_role_is_rejected() {
    let tok = token(r#"{"id":1,"email":"a@b.c","name":"A","role":"customer"}"#);
    assert!(matches!(
        Session::from_token(&tok),
        Err(SessionError::UnknownRole(role)) if role == "customer"
    ));
}

#[test]
fn expiry_is_inclusive() {
    let session = Session::from_token(&expiring_token(1_700_000_000)).unwrap();
    assert!(!session.is_expired(Timestamp::from_secs(1_699_999_999).unwrap()));
    assert!(session.is_expired(Timestamp::from_secs(1_700_000_000).unwrap()));

    let forever = Session::from_token(&super_admin_token()).unwrap();
    assert!(!forever.is_expired(Timestamp::from_secs(4_000_000_000).unwrap()));
}

// ── SessionStore ─────────────────────────────────────────────────

#[test]
fn login_and_logout() {
    let mut store = SessionStore::new();
    assert!(store.current().is_none());

    let email = store.login(&vendor_token(5)).unwrap().user().email.clone();
    assert_eq!(email, "shop@example.com");
    assert!(store.current().is_some());

    store.logout();
    assert!(store.current().is_none());
    store.logout();
}

#[test]
fn failed_login_keeps_previous_session() {
    let mut store = SessionStore::new();
    store.login(&super_admin_token()).unwrap();
    assert!(store.login("garbage").is_err());
    assert_eq!(
        store.current().map(|s| s.user().role),
        Some(UserRole::SuperAdmin)
    );
}

#[test]
fn expired_session_is_dropped() {
    let mut store = SessionStore::new();
    let now = Timestamp::from_secs(1_800_000_000).unwrap();
    assert!(matches!(store.authenticated(now), Err(SessionError::NotLoggedIn)));

    store.login(&expiring_token(1_900_000_000)).unwrap();
    assert!(store.is_authenticated(now));

    let later = Timestamp::from_secs(1_900_000_001).unwrap();
    assert!(matches!(store.authenticated(later), Err(SessionError::Expired(_))));
    assert!(store.current().is_none());
}

// ── ProductScope ─────────────────────────────────────────────────

#[test]
fn super_admin_sees_all_products() {
    let session = Session::from_token(&super_admin_token()).unwrap();
    let scope = session.product_scope().unwrap();
    assert_eq!(scope, ProductScope::All);
    assert_eq!(scope.api_path(), "/api/products");
    assert!(scope.permits(None));
    assert!(scope.permits(Some(99)));
}

#[test]
fn vendor_roles_are_bound_to_their_vendor() {
    let session = Session::from_token(&vendor_token(42)).unwrap();
    let scope = session.product_scope().unwrap();
    assert_eq!(scope, ProductScope::Vendor(42));
    assert_eq!(scope.api_path(), "/api/products/vendor/42");
    assert!(scope.permits(Some(42)));
    assert!(!scope.permits(Some(41)));
    assert!(!scope.permits(None));
}

#[test]
fn vendor_role_without_vendor_id_has_no_scope() {
    let tok = token(r#"{"id":1,"email":"a@b.c","name":"A","role":"staff"}"#);
    let session = Session::from_token(&tok).unwrap();
    assert!(matches!(
        session.product_scope(),
        Err(SessionError::MissingVendor(role)) if role == "staff"
    ));
}

#[test]
fn scope_serializes_tagged() {
    let json = serde_json::to_string(&ProductScope::Vendor(3)).unwrap();
    assert_eq!(json, r#"{"scope":"vendor","vendor_id":3}"#);
}
