use std::collections::HashSet;

use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::issue::{IssueLabelsResponse, NewIssueLabel},
    db::models::label::Label,
    db::repositories::issue_labels::IssueLabelRepo,
    db::repositories::issues::IssueRepo,
    db::repositories::labels::LabelRepo,
    error::{AppError, ErrorCode},
};

pub struct IssueLabelsService;

impl IssueLabelsService {
    /// Attaches labels to an issue. Already-attached pairs are skipped, not
    /// errors; any unknown label id fails the whole request.
    pub fn attach(
        conn: &mut PgConnection,
        issue_id: Uuid,
        label_ids: &[Uuid],
    ) -> Result<IssueLabelsResponse, AppError> {
        conn.transaction::<_, AppError, _>(|conn| {
            if !IssueRepo::exists_by_id(conn, issue_id)? {
                return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
            }

            let labels = LabelRepo::find_by_ids(conn, label_ids)?;
            let found: HashSet<Uuid> = labels.iter().map(|label| label.id).collect();
            if let Some(missing) = label_ids.iter().find(|id| !found.contains(id)) {
                return Err(AppError::not_found(
                    ErrorCode::LabelNotFound,
                    format!("Label not found: id={}", missing),
                ));
            }

            for label in &labels {
                if !IssueLabelRepo::exists(conn, issue_id, label.id)? {
                    IssueLabelRepo::insert(
                        conn,
                        &NewIssueLabel {
                            issue_id,
                            label_id: label.id,
                        },
                    )?;
                }
            }

            let current = IssueLabelRepo::labels_of_issue(conn, issue_id)?;
            Ok(IssueLabelsResponse {
                issue_id,
                labels: current,
            })
        })
    }

    pub fn list(conn: &mut PgConnection, issue_id: Uuid) -> Result<IssueLabelsResponse, AppError> {
        if !IssueRepo::exists_by_id(conn, issue_id)? {
            return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
        }
        let labels = IssueLabelRepo::labels_of_issue(conn, issue_id)?;
        Ok(IssueLabelsResponse { issue_id, labels })
    }

    /// Detaches one label and returns its view.
    pub fn detach(
        conn: &mut PgConnection,
        issue_id: Uuid,
        label_id: Uuid,
    ) -> Result<Label, AppError> {
        conn.transaction::<_, AppError, _>(|conn| {
            if !IssueRepo::exists_by_id(conn, issue_id)? {
                return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
            }
            let label = LabelRepo::find_by_id(conn, label_id)?
                .ok_or_else(|| AppError::not_found(ErrorCode::LabelNotFound, "Label not found"))?;

            if !IssueLabelRepo::exists(conn, issue_id, label_id)? {
                return Err(AppError::not_found(
                    ErrorCode::IssueLabelNotFound,
                    format!("Label {} is not attached to issue {}", label_id, issue_id),
                ));
            }

            IssueLabelRepo::delete_pair(conn, issue_id, label_id)?;
            Ok(label)
        })
    }
}
