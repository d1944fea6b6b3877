use diesel::pg::Pg;
use diesel::prelude::*;

use crate::db::enums::IssueStatus;
use crate::db::models::issue::{Issue, IssueChanges, NewIssue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Conjunctive issue filter. `None`/empty dimensions are omitted from the
/// predicate entirely.
#[derive(Debug, Clone)]
pub struct IssueFilter {
    pub status: Option<IssueStatus>,
    pub author_id: Option<uuid::Uuid>,
    pub assignee_id: Option<uuid::Uuid>,
    pub label_ids: Vec<uuid::Uuid>,
    pub page: i64,
    pub size: i64,
    pub sort: SortField,
    pub order: SortOrder,
}

type IssuesBoxed<'a> = crate::schema::issues::BoxedQuery<'a, Pg>;

fn apply_filters<'a>(mut query: IssuesBoxed<'a>, filter: &IssueFilter) -> IssuesBoxed<'a> {
    use crate::schema::issue_labels::dsl as il;
    use crate::schema::issues::dsl as i;

    if let Some(status) = filter.status {
        query = query.filter(i::status.eq(status));
    }
    if let Some(author) = filter.author_id {
        query = query.filter(i::author_id.eq(author));
    }
    if let Some(assignee) = filter.assignee_id {
        query = query.filter(i::assignee_id.eq(assignee));
    }
    if !filter.label_ids.is_empty() {
        // Issues carrying at least one of the requested labels.
        let tagged = il::issue_labels
            .filter(il::label_id.eq_any(filter.label_ids.clone()))
            .select(il::issue_id);
        query = query.filter(i::id.eq_any(tagged));
    }
    query
}

pub struct IssueRepo;

impl IssueRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        issue_id: uuid::Uuid,
    ) -> Result<Option<Issue>, diesel::result::Error> {
        use crate::schema::issues::dsl::*;
        issues
            .filter(id.eq(issue_id))
            .first::<Issue>(conn)
            .optional()
    }

    pub fn exists_by_id(
        conn: &mut PgConnection,
        issue_id: uuid::Uuid,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::issues::dsl::*;
        diesel::select(diesel::dsl::exists(issues.filter(id.eq(issue_id)))).get_result(conn)
    }

    /// One page of issues matching the filter, plus the total matching count.
    /// The same predicate is applied to both queries.
    pub fn list_filtered(
        conn: &mut PgConnection,
        filter: &IssueFilter,
    ) -> Result<(Vec<Issue>, i64), diesel::result::Error> {
        use crate::schema::issues::dsl as i;

        let mut query = apply_filters(i::issues.into_boxed(), filter);
        query = match (filter.sort, filter.order) {
            (SortField::CreatedAt, SortOrder::Asc) => query.order(i::created_at.asc()),
            (SortField::CreatedAt, SortOrder::Desc) => query.order(i::created_at.desc()),
            (SortField::UpdatedAt, SortOrder::Asc) => query.order(i::updated_at.asc()),
            (SortField::UpdatedAt, SortOrder::Desc) => query.order(i::updated_at.desc()),
        };
        let items = query
            .limit(filter.size)
            .offset(filter.page.saturating_mul(filter.size))
            .load::<Issue>(conn)?;

        let total = apply_filters(i::issues.into_boxed(), filter)
            .count()
            .get_result::<i64>(conn)?;

        Ok((items, total))
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_issue: &NewIssue,
    ) -> Result<Issue, diesel::result::Error> {
        diesel::insert_into(crate::schema::issues::table)
            .values(new_issue)
            .get_result(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        issue_id: uuid::Uuid,
        changes: &IssueChanges,
    ) -> Result<Issue, diesel::result::Error> {
        use crate::schema::issues::dsl::*;
        diesel::update(issues.filter(id.eq(issue_id)))
            .set(changes)
            .get_result(conn)
    }

    pub fn set_status(
        conn: &mut PgConnection,
        issue_id: uuid::Uuid,
        new_status: IssueStatus,
    ) -> Result<Issue, diesel::result::Error> {
        use crate::schema::issues::dsl::*;
        diesel::update(issues.filter(id.eq(issue_id)))
            .set((status.eq(new_status), updated_at.eq(diesel::dsl::now)))
            .get_result(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        issue_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::issues::dsl::*;
        diesel::delete(issues.filter(id.eq(issue_id))).execute(conn)
    }
}
