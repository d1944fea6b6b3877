use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Label models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug)]
#[diesel(table_name = crate::schema::labels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Label {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::labels)]
pub struct NewLabel {
    pub name: String,
    pub color: String,
    pub description: Option<String>,
}

/// Partial update applied via `PATCH /labels/{id}`.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::labels)]
pub struct LabelChanges {
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
