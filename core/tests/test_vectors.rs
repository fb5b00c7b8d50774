//! Verify build/parse against the JSON test vectors in `test-vectors/`.
//!
//! Each case describes the expected request, a simulated response, and
//! either the expected parse result or the expected error variant.
//! Results are compared as parsed values, not raw strings.

use todo_viewer_core::{ApiError, HttpMethod, HttpResponse, TodoClient, TodoItem};

const BASE_URL: &str = "http://localhost:3000";

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = TodoClient::new(&format!("{BASE_URL}/todos"));
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_list_todos();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        assert!(req.body.is_none(), "{name}: body should be None");
        assert!(req.headers.is_empty(), "{name}: no custom headers");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = c.parse_list_todos(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "HttpError" => assert!(matches!(err, ApiError::HttpError { .. }), "{name}: expected HttpError"),
                "DeserializationError" => assert!(
                    matches!(err, ApiError::DeserializationError(_)),
                    "{name}: expected DeserializationError"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let todos = result.unwrap();
            let expected: Vec<TodoItem> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(todos, expected, "{name}: parsed result");
        }
    }
}
