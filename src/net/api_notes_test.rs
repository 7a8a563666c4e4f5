use super::*;

#[test]
fn notes_endpoint_formats_collection_path() {
    assert_eq!(notes_endpoint(), "/api/notes");
}

#[test]
fn note_endpoint_formats_item_path() {
    assert_eq!(note_endpoint("n42"), "/api/notes/n42");
}
