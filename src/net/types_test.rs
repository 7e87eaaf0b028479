use super::*;
use serde_json::json;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_case_insensitively() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("Consultant".parse::<Role>(), Ok(Role::Consultant));
    assert_eq!(" MEMBER ".parse::<Role>(), Ok(Role::Member));
}

#[test]
fn role_rejects_unknown_label() {
    assert_eq!("superuser".parse::<Role>(), Err(RoleParseError("superuser".to_owned())));
}

#[test]
fn role_serializes_upper_case() {
    assert_eq!(serde_json::to_value(Role::Manager).unwrap(), json!("MANAGER"));
}

#[test]
fn role_deserialize_error_names_label() {
    let err = serde_json::from_value::<Role>(json!("USER")).unwrap_err();
    assert!(err.to_string().contains("USER"));
}

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_minimal_camel_case_profile() {
    let user: User = serde_json::from_value(json!({
        "fullName": "Nguyen Van Quan",
        "email": "admin@ctpn.org",
        "role": "admin"
    }))
    .unwrap();
    assert_eq!(user.full_name, "Nguyen Van Quan");
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.id, None);
    assert!(!user.verified);
}

#[test]
fn user_ignores_unknown_fields() {
    let user: User = serde_json::from_value(json!({
        "fullName": "Tran Thi Huong",
        "email": "member2@ctpn.org",
        "role": "MEMBER",
        "avatar": "x.png"
    }))
    .unwrap();
    assert_eq!(user.email, "member2@ctpn.org");
}

// =============================================================
// Envelope / payload
// =============================================================

#[test]
fn envelope_without_data_decodes() {
    let env: ApiEnvelope<AuthPayload> =
        serde_json::from_value(json!({ "success": false, "message": "Bad credentials" })).unwrap();
    assert!(!env.success);
    assert_eq!(env.message, "Bad credentials");
    assert!(env.data.is_none());
}

#[test]
fn auth_payload_splits_into_user_and_token() {
    let payload: AuthPayload = serde_json::from_value(json!({
        "token": "jwt-abc",
        "tokenType": "Bearer",
        "email": "staff@ctpn.org",
        "fullName": "Le Minh Tuan",
        "role": "STAFF",
        "expiresAt": "2025-07-01T10:00:00",
        "verified": true
    }))
    .unwrap();
    let (user, token) = payload.into_parts();
    assert_eq!(token, "jwt-abc");
    assert_eq!(user.role, Role::Staff);
    assert!(user.verified);
}

#[test]
fn register_request_serializes_camel_case() {
    let req = RegisterRequest {
        email: "a@b.vn".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        full_name: "A B".to_owned(),
        phone: String::new(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["confirmPassword"], "secret1");
    assert_eq!(value["fullName"], "A B");
}
