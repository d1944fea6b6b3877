// Query-parameter parsing for issue listing

use issuedive::db::enums::IssueStatus;
use issuedive::db::repositories::issues::{SortField, SortOrder};
use issuedive::error::{AppError, ErrorCode};
use issuedive::routes::issues::IssueQueryParams;
use issuedive::services::issues_service::parse_filter;
use uuid::Uuid;

fn empty_params() -> IssueQueryParams {
    IssueQueryParams {
        status: None,
        author_id: None,
        assignee_id: None,
        label_ids: None,
        page: None,
        size: None,
        sort: None,
        order: None,
    }
}

fn expect_validation_code(err: AppError, expected: ErrorCode) {
    match err {
        AppError::Validation { code, .. } => assert_eq!(code.as_str(), expected.as_str()),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn defaults_apply_when_no_params_given() {
    let filter = parse_filter(&empty_params()).unwrap();

    assert_eq!(filter.status, None);
    assert_eq!(filter.author_id, None);
    assert_eq!(filter.assignee_id, None);
    assert!(filter.label_ids.is_empty());
    assert_eq!(filter.page, 0);
    assert_eq!(filter.size, 20);
    assert_eq!(filter.sort, SortField::CreatedAt);
    assert_eq!(filter.order, SortOrder::Desc);
}

#[test]
fn status_is_parsed_case_insensitively() {
    for raw in ["OPEN", "open", "Open"] {
        let mut params = empty_params();
        params.status = Some(raw.to_string());
        assert_eq!(parse_filter(&params).unwrap().status, Some(IssueStatus::Open));
    }

    let mut params = empty_params();
    params.status = Some("CLOSED".to_string());
    assert_eq!(parse_filter(&params).unwrap().status, Some(IssueStatus::Closed));
}

#[test]
fn unknown_status_is_rejected() {
    let mut params = empty_params();
    params.status = Some("ARCHIVED".to_string());
    expect_validation_code(parse_filter(&params).unwrap_err(), ErrorCode::InvalidStatus);
}

#[test]
fn label_ids_accepts_comma_separated_uuids() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let mut params = empty_params();
    params.label_ids = Some(format!("{}, {}", a, b));

    let filter = parse_filter(&params).unwrap();
    assert_eq!(filter.label_ids, vec![a, b]);
}

#[test]
fn malformed_label_id_is_rejected() {
    let mut params = empty_params();
    params.label_ids = Some(format!("{},not-a-uuid", Uuid::new_v4()));
    expect_validation_code(
        parse_filter(&params).unwrap_err(),
        ErrorCode::InvalidQueryParam,
    );
}

#[test]
fn paging_bounds_are_enforced() {
    let mut params = empty_params();
    params.page = Some(-1);
    expect_validation_code(
        parse_filter(&params).unwrap_err(),
        ErrorCode::InvalidQueryParam,
    );

    let mut params = empty_params();
    params.size = Some(0);
    expect_validation_code(
        parse_filter(&params).unwrap_err(),
        ErrorCode::InvalidQueryParam,
    );

    let mut params = empty_params();
    params.page = Some(3);
    params.size = Some(50);
    let filter = parse_filter(&params).unwrap();
    assert_eq!(filter.page, 3);
    assert_eq!(filter.size, 50);
}

#[test]
fn paging_product_overflow_is_rejected() {
    let mut params = empty_params();
    params.page = Some(i64::MAX);
    params.size = Some(20);
    expect_validation_code(
        parse_filter(&params).unwrap_err(),
        ErrorCode::InvalidQueryParam,
    );
}

#[test]
fn sort_accepts_both_spellings() {
    for raw in ["createdAt", "created_at"] {
        let mut params = empty_params();
        params.sort = Some(raw.to_string());
        assert_eq!(parse_filter(&params).unwrap().sort, SortField::CreatedAt);
    }
    for raw in ["updatedAt", "updated_at"] {
        let mut params = empty_params();
        params.sort = Some(raw.to_string());
        assert_eq!(parse_filter(&params).unwrap().sort, SortField::UpdatedAt);
    }

    let mut params = empty_params();
    params.sort = Some("priority".to_string());
    expect_validation_code(
        parse_filter(&params).unwrap_err(),
        ErrorCode::InvalidQueryParam,
    );
}

#[test]
fn order_defaults_to_desc_and_rejects_garbage() {
    let mut params = empty_params();
    params.order = Some("ASC".to_string());
    assert_eq!(parse_filter(&params).unwrap().order, SortOrder::Asc);

    let mut params = empty_params();
    params.order = Some("sideways".to_string());
    expect_validation_code(
        parse_filter(&params).unwrap_err(),
        ErrorCode::InvalidQueryParam,
    );
}
