use crate::db::enums::IssueStatus;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Issue models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::issues)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Issue {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub author_id: Uuid,
    pub assignee_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::issues)]
pub struct NewIssue {
    pub title: String,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub author_id: Uuid,
    pub assignee_id: Option<Uuid>,
}

/// Partial update applied via `PUT /issues/{id}`. Absent fields are left
/// untouched; `updated_at` is always bumped.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::issues)]
pub struct IssueChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assignee_id: Option<Uuid>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// Issue label models (many-to-many association)
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::issue_labels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IssueLabel {
    pub issue_id: Uuid,
    pub label_id: Uuid,
    pub added_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::issue_labels)]
pub struct NewIssueLabel {
    pub issue_id: Uuid,
    pub label_id: Uuid,
}

/// Issue view returned by the API, label ids included.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct IssueResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: IssueStatus,
    pub author_id: Uuid,
    pub assignee_id: Option<Uuid>,
    pub label_ids: Vec<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl IssueResponse {
    pub fn from_issue(issue: Issue, label_ids: Vec<Uuid>) -> Self {
        Self {
            id: issue.id,
            title: issue.title,
            description: issue.description,
            status: issue.status,
            author_id: issue.author_id,
            assignee_id: issue.assignee_id,
            label_ids,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
        }
    }
}

/// Labels currently attached to an issue, returned by the attach endpoint.
#[derive(Serialize, Clone, Debug)]
pub struct IssueLabelsResponse {
    pub issue_id: Uuid,
    pub labels: Vec<crate::db::models::label::Label>,
}
