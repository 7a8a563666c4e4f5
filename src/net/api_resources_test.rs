use super::*;

#[test]
fn resources_endpoint_formats_collection_path() {
    assert_eq!(resources_endpoint(), "/api/resources");
}

#[test]
fn resource_endpoint_formats_item_path() {
    assert_eq!(resource_endpoint("r1"), "/api/resources/r1");
}
