//! Client-side form validation for the auth flows.
//!
//! DESIGN
//! ======
//! Pure helpers returning trimmed values or a static display message, so
//! submit handlers stay one-liners and the rules are unit testable without a
//! browser. Validation here only blocks obviously-bad submissions; the API
//! server is the authority and its messages are surfaced verbatim.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum accepted password length, matching the API's policy.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Loose email shape check: one `@` with a non-empty local part and a
/// dotted, non-empty domain. Anything stricter belongs to the server.
pub fn email_shape_ok(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// Validate sign-in fields. Returns trimmed `(email, password)`.
///
/// # Errors
///
/// Returns a display message when a field is empty or the email is malformed.
pub fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email_shape_ok(email) {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validated sign-up fields, trimmed and ready to submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validate sign-up fields: name and email present, email well-shaped,
/// password long enough and matching its confirmation.
///
/// # Errors
///
/// Returns a display message for the first failing rule.
pub fn validate_sign_up_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<SignUpInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if email.is_empty() {
        return Err("Enter an email address.");
    }
    if !email_shape_ok(email) {
        return Err("Enter a valid email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignUpInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Validate the reset-password form. Returns the accepted password.
///
/// # Errors
///
/// Returns a display message when the password is too short or the
/// confirmation differs.
pub fn validate_reset_password_input(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}

/// Validate the forgot-password form. Returns the trimmed email.
///
/// # Errors
///
/// Returns a display message when the email is missing or malformed.
pub fn validate_forgot_password_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email address.");
    }
    if !email_shape_ok(email) {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}
