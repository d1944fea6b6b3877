// Error-to-status mapping and response envelope shape

use axum::http::StatusCode;
use issuedive::db::models::api::ApiResponse;
use issuedive::error::{AppError, ErrorCode};

#[test]
fn error_variants_map_to_expected_statuses() {
    let cases = [
        (
            AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"),
            StatusCode::NOT_FOUND,
        ),
        (
            AppError::validation("bad input"),
            StatusCode::BAD_REQUEST,
        ),
        (
            AppError::duplicate(ErrorCode::DuplicateLabel, "Label already exists"),
            StatusCode::CONFLICT,
        ),
        (
            AppError::auth("Missing or invalid X-User-Id header"),
            StatusCode::UNAUTHORIZED,
        ),
        (
            AppError::forbidden("Only the author can edit a comment"),
            StatusCode::FORBIDDEN,
        ),
        (
            AppError::internal("boom"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(error.status_code(), expected, "{:?}", error);
    }
}

#[test]
fn error_codes_serialize_in_screaming_case() {
    assert_eq!(ErrorCode::IssueNotFound.as_str(), "ISSUE_NOT_FOUND");
    assert_eq!(ErrorCode::DuplicateEmail.as_str(), "DUPLICATE_EMAIL");
    assert_eq!(ErrorCode::InvalidParentComment.as_str(), "INVALID_PARENT_COMMENT");
    assert_eq!(ErrorCode::IssueLabelNotFound.as_str(), "ISSUE_LABEL_NOT_FOUND");
}

#[test]
fn envelope_carries_code_and_message() {
    let response = ApiResponse::<()>::error(ErrorCode::LabelNotFound, "Label not found");
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["code"], "LABEL_NOT_FOUND");
    assert_eq!(value["error"]["message"], "Label not found");
    assert!(value.get("data").is_none());
    assert!(value["timestamp"].is_string());
}

#[test]
fn success_envelope_has_no_error() {
    let response = ApiResponse::success(serde_json::json!({"id": 1}));
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["id"], 1);
    assert!(value.get("error").is_none());
}
