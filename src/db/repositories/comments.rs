use diesel::prelude::*;

use crate::db::models::comment::{Comment, NewComment};

pub struct CommentRepo;

impl CommentRepo {
    pub fn find_by_id(
        conn: &mut PgConnection,
        comment_id: uuid::Uuid,
    ) -> Result<Option<Comment>, diesel::result::Error> {
        use crate::schema::comments::dsl::*;
        comments
            .filter(id.eq(comment_id))
            .first::<Comment>(conn)
            .optional()
    }

    /// Comments of an issue in insertion order, paired with the author's
    /// username for the tree view.
    pub fn list_by_issue_with_author(
        conn: &mut PgConnection,
        target_issue_id: uuid::Uuid,
    ) -> Result<Vec<(Comment, String)>, diesel::result::Error> {
        use crate::schema::comments::dsl as c;
        use crate::schema::users::dsl as u;
        c::comments
            .inner_join(u::users)
            .filter(c::issue_id.eq(target_issue_id))
            .select((Comment::as_select(), u::username))
            .order(c::created_at.asc())
            .load::<(Comment, String)>(conn)
    }

    pub fn list_by_issue(
        conn: &mut PgConnection,
        target_issue_id: uuid::Uuid,
    ) -> Result<Vec<Comment>, diesel::result::Error> {
        use crate::schema::comments::dsl::*;
        comments
            .filter(issue_id.eq(target_issue_id))
            .order(created_at.asc())
            .load::<Comment>(conn)
    }

    pub fn count_by_issue(
        conn: &mut PgConnection,
        target_issue_id: uuid::Uuid,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::comments::dsl::*;
        comments
            .filter(issue_id.eq(target_issue_id))
            .count()
            .get_result(conn)
    }

    pub fn insert(
        conn: &mut PgConnection,
        new_comment: &NewComment,
    ) -> Result<Comment, diesel::result::Error> {
        diesel::insert_into(crate::schema::comments::table)
            .values(new_comment)
            .get_result(conn)
    }

    pub fn update_body(
        conn: &mut PgConnection,
        comment_id: uuid::Uuid,
        new_body: String,
    ) -> Result<Comment, diesel::result::Error> {
        use crate::schema::comments::dsl::*;
        diesel::update(comments.filter(id.eq(comment_id)))
            .set((body.eq(new_body), updated_at.eq(diesel::dsl::now)))
            .get_result(conn)
    }

    pub fn delete_by_ids(
        conn: &mut PgConnection,
        comment_ids: &[uuid::Uuid],
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::comments::dsl::*;
        diesel::delete(comments.filter(id.eq_any(comment_ids))).execute(conn)
    }

    pub fn delete_by_issue(
        conn: &mut PgConnection,
        target_issue_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::comments::dsl::*;
        diesel::delete(comments.filter(issue_id.eq(target_issue_id))).execute(conn)
    }
}
