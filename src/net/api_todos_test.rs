use super::*;

#[test]
fn todos_endpoint_formats_collection_path() {
    assert_eq!(todos_endpoint(), "/api/todos");
}

#[test]
fn todo_endpoint_formats_item_path() {
    assert_eq!(todo_endpoint("t7"), "/api/todos/t7");
}
