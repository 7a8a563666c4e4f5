use super::*;

#[test]
fn email_shape_accepts_ordinary_addresses() {
    assert!(email_shape_ok("user@example.com"));
    assert!(email_shape_ok("a.b+c@mail.example.co"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    assert!(!email_shape_ok(""));
    assert!(!email_shape_ok("no-at-sign"));
    assert!(!email_shape_ok("@example.com"));
    assert!(!email_shape_ok("user@"));
    assert!(!email_shape_ok("user@nodot"));
    assert!(!email_shape_ok("user@.com"));
    assert!(!email_shape_ok("user@example."));
    assert!(!email_shape_ok("user@a..b"));
}

#[test]
fn sign_in_input_trims_and_requires_both_fields() {
    assert_eq!(
        validate_sign_in_input("  user@example.com  ", "hunter22"),
        Ok(("user@example.com".to_owned(), "hunter22".to_owned()))
    );
    assert_eq!(
        validate_sign_in_input("", "pw"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_sign_in_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn sign_in_input_rejects_malformed_email() {
    assert_eq!(
        validate_sign_in_input("not-an-email", "hunter22"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn sign_up_input_accepts_valid_fields() {
    let input = validate_sign_up_input(" Ada ", " ada@example.com ", "longenough", "longenough");
    assert_eq!(
        input,
        Ok(SignUpInput {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "longenough".to_owned(),
        })
    );
}

#[test]
fn sign_up_input_checks_rules_in_order() {
    assert_eq!(
        validate_sign_up_input("", "a@b.co", "longenough", "longenough"),
        Err("Enter your name.")
    );
    assert_eq!(
        validate_sign_up_input("Ada", "", "longenough", "longenough"),
        Err("Enter an email address.")
    );
    assert_eq!(
        validate_sign_up_input("Ada", "bad-email", "longenough", "longenough"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_sign_up_input("Ada", "a@b.co", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert_eq!(
        validate_sign_up_input("Ada", "a@b.co", "longenough", "different"),
        Err("Passwords do not match.")
    );
}

#[test]
fn reset_password_input_enforces_length_and_match() {
    assert_eq!(
        validate_reset_password_input("longenough", "longenough"),
        Ok("longenough".to_owned())
    );
    assert_eq!(
        validate_reset_password_input("short", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert_eq!(
        validate_reset_password_input("longenough", "different"),
        Err("Passwords do not match.")
    );
}

#[test]
fn forgot_password_input_requires_valid_email() {
    assert_eq!(
        validate_forgot_password_input(" ada@example.com "),
        Ok("ada@example.com".to_owned())
    );
    assert_eq!(validate_forgot_password_input("  "), Err("Enter an email address."));
    assert_eq!(
        validate_forgot_password_input("nope"),
        Err("Enter a valid email address.")
    );
}
