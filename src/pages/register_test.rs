use super::*;

fn valid_form() -> RegisterForm {
    RegisterForm {
        full_name: " Tran Thi Huong ".to_owned(),
        email: "member2@ctpn.org".to_owned(),
        phone: "0901234574".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
        accept_terms: true,
    }
}

// =============================================================
// looks_like_email
// =============================================================

#[test]
fn looks_like_email_accepts_common_addresses() {
    assert!(looks_like_email("a@b.vn"));
    assert!(looks_like_email("first.last@sub.example.org"));
}

#[test]
fn looks_like_email_rejects_missing_parts() {
    assert!(!looks_like_email("plainaddress"));
    assert!(!looks_like_email("@ctpn.org"));
    assert!(!looks_like_email("user@ctpn"));
    assert!(!looks_like_email("user@.org"));
    assert!(!looks_like_email("user@ctpn."));
}

// =============================================================
// validate_registration
// =============================================================

#[test]
fn valid_form_builds_trimmed_request() {
    let req = validate_registration(&valid_form()).unwrap();
    assert_eq!(req.full_name, "Tran Thi Huong");
    assert_eq!(req.email, "member2@ctpn.org");
    assert_eq!(req.confirm_password, "secret1");
}

#[test]
fn empty_form_flags_every_required_field() {
    let errors = validate_registration(&RegisterForm::default()).unwrap_err();
    assert_eq!(errors.full_name, Some("Enter your full name."));
    assert_eq!(errors.email, Some("Enter your email."));
    assert_eq!(errors.password, Some("Enter a password."));
    assert_eq!(errors.confirm_password, None);
    assert_eq!(errors.accept_terms, Some("Please accept the terms of use."));
}

#[test]
fn short_password_is_rejected() {
    let form = RegisterForm { password: "12345".to_owned(), confirm_password: "12345".to_owned(), ..valid_form() };
    let errors = validate_registration(&form).unwrap_err();
    assert_eq!(errors.password, Some("Password must be at least 6 characters."));
    assert_eq!(errors.confirm_password, None);
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let form = RegisterForm { confirm_password: "secret2".to_owned(), ..valid_form() };
    let errors = validate_registration(&form).unwrap_err();
    assert_eq!(errors.confirm_password, Some("Passwords do not match."));
    assert_eq!(errors.password, None);
}

#[test]
fn malformed_email_is_rejected() {
    let form = RegisterForm { email: "member2".to_owned(), ..valid_form() };
    let errors = validate_registration(&form).unwrap_err();
    assert_eq!(errors.email, Some("Email address is not valid."));
}

#[test]
fn terms_must_be_accepted() {
    let form = RegisterForm { accept_terms: false, ..valid_form() };
    let errors = validate_registration(&form).unwrap_err();
    assert_eq!(errors, RegisterErrors { accept_terms: Some("Please accept the terms of use."), ..RegisterErrors::default() });
}
