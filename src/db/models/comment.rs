use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Comment models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub parent_comment_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment {
    pub issue_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub parent_comment_id: Option<Uuid>,
}

#[derive(Serialize, Clone, Debug)]
pub struct CommentCountResponse {
    pub issue_id: Uuid,
    pub count: i64,
}
