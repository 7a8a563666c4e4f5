use super::*;

#[test]
fn resource_input_trims_fields() {
    assert_eq!(
        validate_resource_input("  Rust Book  ", " https://doc.rust-lang.org/book/ "),
        Ok((
            "Rust Book".to_owned(),
            "https://doc.rust-lang.org/book/".to_owned()
        ))
    );
}

#[test]
fn resource_input_requires_title() {
    assert_eq!(
        validate_resource_input("  ", "https://example.com"),
        Err("Enter a title first.")
    );
}

#[test]
fn resource_input_requires_http_url() {
    assert_eq!(
        validate_resource_input("Title", "example.com"),
        Err("Enter a full http(s) URL.")
    );
    assert_eq!(
        validate_resource_input("Title", "ftp://example.com"),
        Err("Enter a full http(s) URL.")
    );
    assert!(validate_resource_input("Title", "http://example.com").is_ok());
}
