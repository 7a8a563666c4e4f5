use super::*;

#[test]
fn api_base_defaults_to_same_origin_prefix() {
    assert_eq!(api_base(), "/api");
}

#[test]
fn auth_endpoint_formats_expected_paths() {
    assert_eq!(auth_endpoint("signin"), "/api/auth/signin");
    assert_eq!(auth_endpoint("verify-token"), "/api/auth/verify-token");
}

#[test]
fn reset_password_endpoint_carries_token_query() {
    assert_eq!(
        reset_password_endpoint("abc123"),
        "/api/auth/reset-password?token=abc123"
    );
}

#[test]
fn verify_email_endpoint_carries_token_query() {
    assert_eq!(
        verify_email_endpoint("abc123"),
        "/api/auth/verify-email?token=abc123"
    );
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(503), "request failed: 503");
}

#[test]
fn error_message_prefers_server_message_field() {
    assert_eq!(
        error_message(r#"{"message":"Invalid credentials"}"#, 401),
        "Invalid credentials"
    );
}

#[test]
fn error_message_falls_back_on_non_json_bodies() {
    assert_eq!(error_message("<html>oops</html>", 500), "request failed: 500");
    assert_eq!(error_message("", 404), "request failed: 404");
}

#[test]
fn error_message_falls_back_when_message_is_not_a_string() {
    assert_eq!(error_message(r#"{"message":42}"#, 400), "request failed: 400");
    assert_eq!(error_message(r#"{"error":"nope"}"#, 400), "request failed: 400");
}
