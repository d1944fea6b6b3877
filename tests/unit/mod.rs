mod comment_tree;
mod comments;
mod errors;
mod issue_filter;
mod issues;
mod labels;
mod users;
