//! Assertions for RFC 7807 problem+json error responses.
//!
//! Validates the envelope produced by the backend's `AppError`: status,
//! content type, the `x-trace-id` header, and the body's `code` /
//! `trace_id` fields.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE};
use serde_json::Value;

/// Validate that a response follows the ProblemDetails structure and return
/// the parsed body for further assertions.
pub async fn assert_problem_details<B>(
    resp: ServiceResponse<B>,
    expected_status: u16,
    expected_code: &str,
) -> Value
where
    B: MessageBody,
{
    assert_eq!(resp.status().as_u16(), expected_status);

    // Extract headers before consuming the response
    let headers = resp.headers().clone();

    // x-trace-id (header names are case-insensitive; use a typed HeaderName)
    let trace_hdr = HeaderName::from_static("x-trace-id");
    let trace_id = headers
        .get(&trace_hdr)
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8")
        .to_string();
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    // Content-Type may include parameters (e.g., charset)
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body = actix_web::test::read_body(resp).await;
    let json: Value = serde_json::from_slice(&body).expect("body should be valid problem+json");

    assert_eq!(
        json["code"].as_str(),
        Some(expected_code),
        "unexpected problem code in body: {json}"
    );
    assert_eq!(json["status"].as_u64(), Some(u64::from(expected_status)));
    assert_eq!(
        json["trace_id"].as_str(),
        Some(trace_id.as_str()),
        "trace_id in body should match the x-trace-id header"
    );
    assert!(
        json["type"].as_str().unwrap_or_default().ends_with(expected_code),
        "problem type URI should end with the code: {json}"
    );

    json
}
