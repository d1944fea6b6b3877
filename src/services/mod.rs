pub mod comment_tree;
pub mod comments_service;
pub mod context;
pub mod issue_labels_service;
pub mod issues_service;
pub mod labels_service;
pub mod users_service;
