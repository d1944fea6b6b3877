use std::collections::HashMap;

use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::enums::IssueStatus,
    db::models::api::PageResponse,
    db::models::issue::{IssueChanges, IssueResponse, NewIssue},
    db::repositories::issue_labels::IssueLabelRepo,
    db::repositories::issues::{IssueFilter, IssueRepo, SortField, SortOrder},
    db::repositories::users::UserRepo,
    error::{AppError, ErrorCode},
    routes::issues::{CreateIssueRequest, IssueQueryParams, UpdateIssueRequest},
    services::context::RequestContext,
    validation::issue::{validate_create_issue, validate_update_issue},
};

const DEFAULT_PAGE_SIZE: i64 = 20;

/// Translates raw query params into a typed filter, rejecting anything the
/// API does not support.
pub fn parse_filter(params: &IssueQueryParams) -> Result<IssueFilter, AppError> {
    let status = match params.status.as_deref() {
        None => None,
        Some(raw) => Some(IssueStatus::parse(raw).ok_or_else(|| {
            AppError::validation_with_code(
                ErrorCode::InvalidStatus,
                "status must be either OPEN or CLOSED",
            )
        })?),
    };

    let label_ids = match params.label_ids.as_deref() {
        None => Vec::new(),
        Some(raw) => raw
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| {
                Uuid::parse_str(part.trim()).map_err(|_| {
                    AppError::validation_with_code(
                        ErrorCode::InvalidQueryParam,
                        format!("label_ids contains an invalid id: {}", part.trim()),
                    )
                })
            })
            .collect::<Result<Vec<Uuid>, AppError>>()?,
    };

    let page = params.page.unwrap_or(0);
    if page < 0 {
        return Err(AppError::validation_with_code(
            ErrorCode::InvalidQueryParam,
            "page must be >= 0",
        ));
    }
    let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);
    if size < 1 {
        return Err(AppError::validation_with_code(
            ErrorCode::InvalidQueryParam,
            "size must be >= 1",
        ));
    }
    // the page offset is page * size; both are client-controlled
    if page.checked_mul(size).is_none() {
        return Err(AppError::validation_with_code(
            ErrorCode::InvalidQueryParam,
            "page and size are out of range",
        ));
    }

    let sort = match params.sort.as_deref() {
        None | Some("createdAt") | Some("created_at") => SortField::CreatedAt,
        Some("updatedAt") | Some("updated_at") => SortField::UpdatedAt,
        Some(other) => {
            return Err(AppError::validation_with_code(
                ErrorCode::InvalidQueryParam,
                format!("unsupported sort field: {}", other),
            ));
        }
    };

    let order = match params.order.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None | Some("desc") => SortOrder::Desc,
        Some("asc") => SortOrder::Asc,
        Some(other) => {
            return Err(AppError::validation_with_code(
                ErrorCode::InvalidQueryParam,
                format!("order must be asc or desc, got {}", other),
            ));
        }
    };

    Ok(IssueFilter {
        status,
        author_id: params.author_id,
        assignee_id: params.assignee_id,
        label_ids,
        page,
        size,
        sort,
        order,
    })
}

pub struct IssuesService;

impl IssuesService {
    pub fn create(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        req: &CreateIssueRequest,
    ) -> Result<IssueResponse, AppError> {
        validate_create_issue(&req.title)?;

        let issue = conn.transaction::<_, AppError, _>(|conn| {
            if !UserRepo::exists_by_id(conn, ctx.user_id)? {
                return Err(AppError::not_found(ErrorCode::UserNotFound, "Author not found"));
            }
            if let Some(assignee_id) = req.assignee_id {
                if !UserRepo::exists_by_id(conn, assignee_id)? {
                    return Err(AppError::not_found(
                        ErrorCode::UserNotFound,
                        "Assignee not found",
                    ));
                }
            }

            let new_issue = NewIssue {
                title: req.title.clone(),
                description: req.description.clone(),
                status: IssueStatus::Open,
                author_id: ctx.user_id,
                assignee_id: req.assignee_id,
            };
            Ok(IssueRepo::insert(conn, &new_issue)?)
        })?;

        Ok(IssueResponse::from_issue(issue, Vec::new()))
    }

    pub fn list(
        conn: &mut PgConnection,
        params: &IssueQueryParams,
    ) -> Result<PageResponse<IssueResponse>, AppError> {
        let filter = parse_filter(params)?;
        let (issues, total) = IssueRepo::list_filtered(conn, &filter)?;

        let issue_ids: Vec<Uuid> = issues.iter().map(|issue| issue.id).collect();
        let pairs = IssueLabelRepo::list_for_issues(conn, &issue_ids)?;
        let mut labels_by_issue: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for pair in pairs {
            labels_by_issue
                .entry(pair.issue_id)
                .or_default()
                .push(pair.label_id);
        }

        let items = issues
            .into_iter()
            .map(|issue| {
                let label_ids = labels_by_issue.remove(&issue.id).unwrap_or_default();
                IssueResponse::from_issue(issue, label_ids)
            })
            .collect();

        Ok(PageResponse::new(items, filter.page, filter.size, total))
    }

    pub fn get_by_id(conn: &mut PgConnection, issue_id: Uuid) -> Result<IssueResponse, AppError> {
        let issue = IssueRepo::find_by_id(conn, issue_id)?
            .ok_or_else(|| AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"))?;
        let label_ids = IssueLabelRepo::label_ids_of_issue(conn, issue_id)?;
        Ok(IssueResponse::from_issue(issue, label_ids))
    }

    pub fn update(
        conn: &mut PgConnection,
        issue_id: Uuid,
        req: &UpdateIssueRequest,
    ) -> Result<IssueResponse, AppError> {
        validate_update_issue(req.title.as_deref())?;

        let issue = conn.transaction::<_, AppError, _>(|conn| {
            if !IssueRepo::exists_by_id(conn, issue_id)? {
                return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
            }
            if let Some(assignee_id) = req.assignee_id {
                if !UserRepo::exists_by_id(conn, assignee_id)? {
                    return Err(AppError::not_found(
                        ErrorCode::UserNotFound,
                        "Assignee not found",
                    ));
                }
            }

            let changes = IssueChanges {
                title: req.title.clone(),
                description: req.description.clone(),
                assignee_id: req.assignee_id,
                updated_at: chrono::Utc::now(),
            };
            Ok(IssueRepo::update_fields(conn, issue_id, &changes)?)
        })?;

        let label_ids = IssueLabelRepo::label_ids_of_issue(conn, issue_id)?;
        Ok(IssueResponse::from_issue(issue, label_ids))
    }

    pub fn change_status(
        conn: &mut PgConnection,
        issue_id: Uuid,
        raw_status: &str,
    ) -> Result<IssueResponse, AppError> {
        let new_status = IssueStatus::parse(raw_status).ok_or_else(|| {
            AppError::validation_with_code(
                ErrorCode::InvalidStatus,
                "status must be either OPEN or CLOSED",
            )
        })?;

        let issue = conn.transaction::<_, AppError, _>(|conn| {
            if !IssueRepo::exists_by_id(conn, issue_id)? {
                return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
            }
            Ok(IssueRepo::set_status(conn, issue_id, new_status)?)
        })?;

        let label_ids = IssueLabelRepo::label_ids_of_issue(conn, issue_id)?;
        Ok(IssueResponse::from_issue(issue, label_ids))
    }

    pub fn delete(conn: &mut PgConnection, issue_id: Uuid) -> Result<(), AppError> {
        conn.transaction::<_, AppError, _>(|conn| {
            if !IssueRepo::exists_by_id(conn, issue_id)? {
                return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
            }
            // No DB-level cascades are relied on.
            IssueLabelRepo::delete_by_issue(conn, issue_id)?;
            crate::db::repositories::comments::CommentRepo::delete_by_issue(conn, issue_id)?;
            IssueRepo::delete_by_id(conn, issue_id)?;
            Ok(())
        })
    }
}
