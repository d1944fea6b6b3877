// Validation and mutation-guard tests for comments

use axum::http::StatusCode;
use chrono::Utc;
use issuedive::db::models::comment::Comment;
use issuedive::error::{AppError, ErrorCode};
use issuedive::services::comments_service::{check_comment_access, check_parent_comment};
use uuid::Uuid;

fn stored_comment(issue_id: Uuid, author_id: Uuid) -> Comment {
    let now = Utc::now();
    Comment {
        id: Uuid::new_v4(),
        issue_id,
        author_id,
        body: "text".to_string(),
        parent_comment_id: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn author_on_the_right_issue_may_mutate() {
    let issue = Uuid::new_v4();
    let author = Uuid::new_v4();
    let comment = stored_comment(issue, author);

    assert!(check_comment_access(&comment, issue, author).is_ok());
}

#[test]
fn non_author_mutation_is_forbidden() {
    let issue = Uuid::new_v4();
    let comment = stored_comment(issue, Uuid::new_v4());

    let err = check_comment_access(&comment, issue, Uuid::new_v4()).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
}

#[test]
fn comment_from_another_issue_is_bad_request() {
    // issue mismatch is reported before ownership
    let comment = stored_comment(Uuid::new_v4(), Uuid::new_v4());

    let err = check_comment_access(&comment, Uuid::new_v4(), Uuid::new_v4()).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    match err {
        AppError::Validation { code, .. } => assert_eq!(code, ErrorCode::BadRequest),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn parent_on_another_issue_is_invalid() {
    let parent = stored_comment(Uuid::new_v4(), Uuid::new_v4());

    assert!(check_parent_comment(&parent, parent.issue_id).is_ok());

    let err = check_parent_comment(&parent, Uuid::new_v4()).unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    match err {
        AppError::Validation { code, .. } => {
            assert_eq!(code, ErrorCode::InvalidParentComment)
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn validate_comment_create_and_update() {
    use issuedive::validation::comment::{validate_create_comment, validate_update_comment};

    assert!(validate_create_comment("hello").is_ok());
    assert!(validate_create_comment("").is_err());
    assert!(validate_create_comment("   ").is_err());
    assert!(validate_create_comment(&"a".repeat(10001)).is_err());

    assert!(validate_update_comment("edit").is_ok());
    assert!(validate_update_comment(" ").is_err());
    assert!(validate_update_comment(&"a".repeat(10001)).is_err());
}
