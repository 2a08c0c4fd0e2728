use super::*;

#[test]
fn get_request_has_no_body_or_headers() {
    let req = ApiRequest::get("/api/auth/check");
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/api/auth/check");
    assert!(req.headers.is_empty());
    assert!(req.body.is_none());
}

#[test]
fn with_header_and_body_accumulate() {
    let req = ApiRequest::post("/api/process-text")
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"text":"hi"}"#);
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.headers, vec![("Content-Type".to_owned(), "application/json".to_owned())]);
    assert_eq!(req.body.as_deref(), Some(r#"{"text":"hi"}"#));
}

#[test]
fn has_header_ignores_case() {
    let req = ApiRequest::post("/x").with_header("content-type", "text/plain");
    assert!(req.has_header("Content-Type"));
    assert!(!req.has_header("Authorization"));
}

#[test]
fn response_ok_covers_2xx_only() {
    assert!(ApiResponse { status: 200, body: String::new() }.ok());
    assert!(ApiResponse { status: 204, body: String::new() }.ok());
    assert!(!ApiResponse { status: 301, body: String::new() }.ok());
    assert!(!ApiResponse { status: 401, body: String::new() }.ok());
    assert!(!ApiResponse { status: 500, body: String::new() }.ok());
}

#[test]
fn response_json_decodes_body() {
    let resp = ApiResponse { status: 200, body: r#"{"success": true}"#.to_owned() };
    let value: serde_json::Value = resp.json().unwrap();
    assert_eq!(value["success"], serde_json::json!(true));
}

#[test]
fn response_json_reports_decode_error() {
    let resp = ApiResponse { status: 200, body: "<html>".to_owned() };
    let err = resp.json::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)));
}

#[test]
fn server_stub_fails_with_network_error() {
    let result = futures::executor::block_on(HttpTransport.send(ApiRequest::get("/api/auth/check")));
    assert!(matches!(result, Err(TransportError::Network(_))));
}
