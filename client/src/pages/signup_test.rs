use super::*;

#[test]
fn validate_signup_input_trims_name_and_email() {
    let request = validate_signup_input(" Asha ", " asha@x.edu ", "pw").unwrap();
    assert_eq!(
        request,
        SignupRequest { name: "Asha".to_owned(), email: "asha@x.edu".to_owned(), password: "pw".to_owned() }
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(validate_signup_input("", "a@x.edu", "pw"), Err(MISSING_SIGNUP_FIELDS_MESSAGE));
    assert_eq!(validate_signup_input("Asha", "  ", "pw"), Err(MISSING_SIGNUP_FIELDS_MESSAGE));
    assert_eq!(validate_signup_input("Asha", "a@x.edu", ""), Err(MISSING_SIGNUP_FIELDS_MESSAGE));
}
