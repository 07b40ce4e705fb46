use super::*;

#[test]
fn login_requires_both_fields() {
    let errors = validate_login("", "").unwrap_err();
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
    assert!(validate_login("a@b.com", "pw").is_ok());
}

#[test]
fn signup_requires_confirmation() {
    let errors = validate_signup("a@b.com", "", "").unwrap_err();
    assert_eq!(errors.get("confirm_password"), Some("Please confirm your password"));
}

#[test]
fn signup_rejects_mismatch() {
    let errors = validate_signup("a@b.com", "pw1", "pw2").unwrap_err();
    assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
    assert_eq!(errors.get("email"), None);

    let errors = validate_signup("a@b.com", "pw1", "").unwrap_err();
    assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
}

#[test]
fn document_name_is_trimmed_before_check() {
    assert_eq!(
        validate_document_name("   "),
        Err("File name is required".to_string())
    );
    assert!(validate_document_name(" q3 ").is_ok());
}
