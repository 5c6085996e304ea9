use api_contract::ApiResponse;

#[test]
fn api_response_success() {
    let response = ApiResponse::success("ok");
    assert!(response.success);
    assert!(response.data.is_some());
    assert!(response.error.is_none());
}

#[test]
fn api_response_error() {
    let response = ApiResponse::<()>::error("RESOURCE.NOT_FOUND", "site not found");
    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(response.error.is_some());
}

#[test]
fn api_response_error_serializes_code() {
    let response = ApiResponse::<()>::error("INVALID.REQUEST", "prompt required");
    let value = serde_json::to_value(response).expect("serialize");
    assert_eq!(value["success"], false);
    assert!(value["data"].is_null());
    assert_eq!(value["error"]["code"], "INVALID.REQUEST");
}
