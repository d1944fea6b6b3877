pub mod comments;
pub mod issue_labels;
pub mod issues;
pub mod labels;
pub mod users;
