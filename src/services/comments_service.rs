use std::collections::HashMap;

use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::comment::{Comment, CommentCountResponse, NewComment},
    db::repositories::comments::CommentRepo,
    db::repositories::issues::IssueRepo,
    db::repositories::users::UserRepo,
    error::{AppError, ErrorCode},
    services::comment_tree::{CommentNode, build_comment_tree},
    services::context::RequestContext,
    validation::comment::{validate_create_comment, validate_update_comment},
};

pub struct CommentsService;

impl CommentsService {
    pub fn get_tree(
        conn: &mut PgConnection,
        issue_id: Uuid,
    ) -> Result<Vec<CommentNode>, AppError> {
        if !IssueRepo::exists_by_id(conn, issue_id)? {
            return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
        }
        let comments = CommentRepo::list_by_issue_with_author(conn, issue_id)?;
        Ok(build_comment_tree(comments))
    }

    pub fn create(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        issue_id: Uuid,
        body: String,
        parent_id: Option<Uuid>,
    ) -> Result<Comment, AppError> {
        validate_create_comment(&body)?;

        conn.transaction::<_, AppError, _>(|conn| {
            if !UserRepo::exists_by_id(conn, ctx.user_id)? {
                return Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"));
            }
            if !IssueRepo::exists_by_id(conn, issue_id)? {
                return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
            }

            if let Some(parent_id) = parent_id {
                let parent = CommentRepo::find_by_id(conn, parent_id)?.ok_or_else(|| {
                    AppError::not_found(ErrorCode::CommentNotFound, "Parent comment not found")
                })?;
                check_parent_comment(&parent, issue_id)?;
            }

            let new_comment = NewComment {
                issue_id,
                author_id: ctx.user_id,
                body,
                parent_comment_id: parent_id,
            };
            Ok(CommentRepo::insert(conn, &new_comment)?)
        })
    }

    pub fn update(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        issue_id: Uuid,
        comment_id: Uuid,
        body: String,
    ) -> Result<Comment, AppError> {
        validate_update_comment(&body)?;

        conn.transaction::<_, AppError, _>(|conn| {
            let comment = Self::load_checked(conn, ctx, issue_id, comment_id)?;
            Ok(CommentRepo::update_body(conn, comment.id, body)?)
        })
    }

    /// Deletes the comment and its whole reply subtree.
    pub fn delete(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        issue_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), AppError> {
        conn.transaction::<_, AppError, _>(|conn| {
            let comment = Self::load_checked(conn, ctx, issue_id, comment_id)?;

            let all = CommentRepo::list_by_issue(conn, issue_id)?;
            let doomed = subtree_ids(&all, comment.id);
            CommentRepo::delete_by_ids(conn, &doomed)?;
            Ok(())
        })
    }

    pub fn count(
        conn: &mut PgConnection,
        issue_id: Uuid,
    ) -> Result<CommentCountResponse, AppError> {
        if !IssueRepo::exists_by_id(conn, issue_id)? {
            return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
        }
        let count = CommentRepo::count_by_issue(conn, issue_id)?;
        Ok(CommentCountResponse { issue_id, count })
    }

    /// Shared mutation guard: comment exists (404), belongs to the stated
    /// issue (400), and the acting user wrote it (403).
    fn load_checked(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        issue_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Comment, AppError> {
        let comment = CommentRepo::find_by_id(conn, comment_id)?
            .ok_or_else(|| AppError::not_found(ErrorCode::CommentNotFound, "Comment not found"))?;
        if !IssueRepo::exists_by_id(conn, issue_id)? {
            return Err(AppError::not_found(ErrorCode::IssueNotFound, "Issue not found"));
        }
        check_comment_access(&comment, issue_id, ctx.user_id)?;
        Ok(comment)
    }
}

/// An already-loaded comment may only be mutated through the issue it belongs
/// to (400), and only by its author (403).
pub fn check_comment_access(
    comment: &Comment,
    issue_id: Uuid,
    user_id: Uuid,
) -> Result<(), AppError> {
    if comment.issue_id != issue_id {
        return Err(AppError::bad_request(
            "Comment does not belong to the requested issue",
        ));
    }
    if comment.author_id != user_id {
        return Err(AppError::forbidden("Only the comment author may modify it"));
    }
    Ok(())
}

/// A reply's parent must live on the same issue.
pub fn check_parent_comment(parent: &Comment, issue_id: Uuid) -> Result<(), AppError> {
    if parent.issue_id != issue_id {
        return Err(AppError::validation_with_code(
            ErrorCode::InvalidParentComment,
            "Parent comment belongs to a different issue",
        ));
    }
    Ok(())
}

/// Ids of `root_id` and every descendant, walked breadth-first over the flat
/// comment list.
fn subtree_ids(comments: &[Comment], root_id: Uuid) -> Vec<Uuid> {
    let mut children: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for comment in comments {
        if let Some(parent_id) = comment.parent_comment_id {
            children.entry(parent_id).or_default().push(comment.id);
        }
    }

    let mut ids = vec![root_id];
    let mut cursor = 0;
    while cursor < ids.len() {
        let current = ids[cursor];
        cursor += 1;
        if let Some(kids) = children.get(&current) {
            ids.extend(kids.iter().copied());
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: Uuid, issue_id: Uuid, parent: Option<Uuid>) -> Comment {
        let now = chrono::Utc::now();
        Comment {
            id,
            issue_id,
            author_id: Uuid::new_v4(),
            body: "text".to_string(),
            parent_comment_id: parent,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn subtree_collects_all_descendants() {
        let issue = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let other = Uuid::new_v4();
        let comments = vec![
            comment(a, issue, None),
            comment(b, issue, Some(a)),
            comment(c, issue, Some(b)),
            comment(other, issue, None),
        ];

        let ids = subtree_ids(&comments, a);
        assert_eq!(ids, vec![a, b, c]);

        let leaf = subtree_ids(&comments, other);
        assert_eq!(leaf, vec![other]);
    }
}
