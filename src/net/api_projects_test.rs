use super::*;

#[test]
fn projects_endpoint_formats_collection_path() {
    assert_eq!(projects_endpoint(), "/api/projects");
}

#[test]
fn project_endpoint_formats_item_path() {
    assert_eq!(project_endpoint("p9"), "/api/projects/p9");
}
