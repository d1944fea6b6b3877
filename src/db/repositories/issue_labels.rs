use diesel::prelude::*;

use crate::db::models::issue::{IssueLabel, NewIssueLabel};
use crate::db::models::label::Label;

pub struct IssueLabelRepo;

impl IssueLabelRepo {
    pub fn exists(
        conn: &mut PgConnection,
        target_issue_id: uuid::Uuid,
        target_label_id: uuid::Uuid,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::issue_labels::dsl::*;
        diesel::select(diesel::dsl::exists(
            issue_labels
                .filter(issue_id.eq(target_issue_id))
                .filter(label_id.eq(target_label_id)),
        ))
        .get_result(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        pair: &NewIssueLabel,
    ) -> Result<IssueLabel, diesel::result::Error> {
        diesel::insert_into(crate::schema::issue_labels::table)
            .values(pair)
            .get_result(conn)
    }

    pub fn labels_of_issue(
        conn: &mut PgConnection,
        target_issue_id: uuid::Uuid,
    ) -> Result<Vec<Label>, diesel::result::Error> {
        use crate::schema::issue_labels::dsl as il;
        use crate::schema::labels::dsl as l;
        il::issue_labels
            .inner_join(l::labels)
            .filter(il::issue_id.eq(target_issue_id))
            .select(Label::as_select())
            .order(il::added_at.asc())
            .load::<Label>(conn)
    }

    pub fn label_ids_of_issue(
        conn: &mut PgConnection,
        target_issue_id: uuid::Uuid,
    ) -> Result<Vec<uuid::Uuid>, diesel::result::Error> {
        use crate::schema::issue_labels::dsl::*;
        issue_labels
            .filter(issue_id.eq(target_issue_id))
            .order(added_at.asc())
            .select(label_id)
            .load::<uuid::Uuid>(conn)
    }

    /// All pairs for a set of issues, used to batch label ids when mapping a
    /// page of issues to views.
    pub fn list_for_issues(
        conn: &mut PgConnection,
        issue_ids: &[uuid::Uuid],
    ) -> Result<Vec<IssueLabel>, diesel::result::Error> {
        use crate::schema::issue_labels::dsl::*;
        issue_labels
            .filter(issue_id.eq_any(issue_ids))
            .order(added_at.asc())
            .load::<IssueLabel>(conn)
    }

    pub fn delete_pair(
        conn: &mut PgConnection,
        target_issue_id: uuid::Uuid,
        target_label_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::issue_labels::dsl::*;
        diesel::delete(
            issue_labels
                .filter(issue_id.eq(target_issue_id))
                .filter(label_id.eq(target_label_id)),
        )
        .execute(conn)
    }

    pub fn delete_by_issue(
        conn: &mut PgConnection,
        target_issue_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::issue_labels::dsl::*;
        diesel::delete(issue_labels.filter(issue_id.eq(target_issue_id))).execute(conn)
    }

    pub fn delete_by_label(
        conn: &mut PgConnection,
        target_label_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::issue_labels::dsl::*;
        diesel::delete(issue_labels.filter(label_id.eq(target_label_id))).execute(conn)
    }
}
