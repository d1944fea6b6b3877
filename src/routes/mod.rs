pub mod auth;
pub mod comments;
pub mod issues;
pub mod labels;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/users", get(auth::list_users))
        .route("/auth/users/:user_id", get(auth::get_user))
        .route("/auth/user/:user_id", delete(auth::delete_user))
        .route("/issues", post(issues::create_issue))
        .route("/issues", get(issues::get_issues))
        .route("/issues/:issue_id", get(issues::get_issue))
        .route("/issues/:issue_id", put(issues::update_issue))
        .route("/issues/:issue_id", delete(issues::delete_issue))
        .route("/issues/:issue_id/status", patch(issues::change_issue_status))
        .route("/issues/:issue_id/labels", post(issues::attach_labels))
        .route("/issues/:issue_id/labels", get(issues::get_issue_labels))
        .route(
            "/issues/:issue_id/labels/:label_id",
            delete(issues::detach_label),
        )
        .route("/issues/:issue_id/comments", get(comments::get_comments))
        .route("/issues/:issue_id/comments", post(comments::create_comment))
        .route(
            "/issues/:issue_id/comments/count",
            get(comments::count_comments),
        )
        .route(
            "/issues/:issue_id/comments/:comment_id",
            patch(comments::update_comment),
        )
        .route(
            "/issues/:issue_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
        .route("/labels", post(labels::create_label))
        .route("/labels", get(labels::get_labels))
        .route("/labels/:label_id", get(labels::get_label))
        .route("/labels/:label_id", patch(labels::update_label))
        .route("/labels/:label_id", delete(labels::delete_label))
        .with_state(state)
}
