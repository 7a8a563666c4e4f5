use super::*;

#[test]
fn diary_endpoint_formats_collection_path() {
    assert_eq!(diary_endpoint(), "/api/diary");
}

#[test]
fn diary_entry_endpoint_formats_item_path() {
    assert_eq!(diary_entry_endpoint("d3"), "/api/diary/d3");
}
