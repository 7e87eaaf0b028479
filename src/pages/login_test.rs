use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  member1@ctpn.org ", "secret"),
        Ok(LoginRequest { email: "member1@ctpn.org".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.vn", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("member1", "secret"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let req = validate_login_input("a@b.vn", " pass with spaces ").unwrap();
    assert_eq!(req.password, " pass with spaces ");
}
