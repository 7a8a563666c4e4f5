use super::*;

#[test]
fn note_input_trims_title() {
    assert_eq!(validate_note_input("  Weekly plan  "), Ok("Weekly plan".to_owned()));
}

#[test]
fn note_input_requires_title() {
    assert_eq!(validate_note_input("   "), Err("Enter a title first."));
}
