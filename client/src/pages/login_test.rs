use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@x.edu ", "secret"),
        Ok(("a@x.edu".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(validate_login_input("a@x.edu", " pw "), Ok(("a@x.edu".to_owned(), " pw ".to_owned())));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err(MISSING_CREDENTIALS_MESSAGE));
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_CREDENTIALS_MESSAGE));
    assert_eq!(validate_login_input("a@x.edu", ""), Err(MISSING_CREDENTIALS_MESSAGE));
}

#[test]
fn validate_login_input_does_not_check_format() {
    assert!(validate_login_input("not-an-email", "x").is_ok());
}
