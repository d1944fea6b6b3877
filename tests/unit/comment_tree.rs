// Reply-tree assembly from flat comment batches

use chrono::{Duration, TimeZone, Utc};
use issuedive::db::models::comment::Comment;
use issuedive::services::comment_tree::{CommentNode, build_comment_tree};
use uuid::Uuid;

fn comment(n: u128, issue_id: Uuid, parent: Option<u128>) -> (Comment, String) {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let comment = Comment {
        id: Uuid::from_u128(n),
        issue_id,
        author_id: Uuid::from_u128(1000 + n),
        body: format!("comment {}", n),
        parent_comment_id: parent.map(Uuid::from_u128),
        created_at: base + Duration::seconds(n as i64),
        updated_at: base + Duration::seconds(n as i64),
    };
    (comment, format!("user{}", n))
}

fn count_nodes(nodes: &[CommentNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}

#[test]
fn builds_nested_tree_in_input_order() {
    let issue = Uuid::new_v4();
    let tree = build_comment_tree(vec![
        comment(1, issue, None),
        comment(2, issue, Some(1)),
        comment(3, issue, Some(1)),
        comment(4, issue, Some(2)),
        comment(5, issue, None),
    ]);

    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].id, Uuid::from_u128(1));
    assert_eq!(tree[1].id, Uuid::from_u128(5));

    let first = &tree[0];
    assert_eq!(first.children.len(), 2);
    assert_eq!(first.children[0].id, Uuid::from_u128(2));
    assert_eq!(first.children[1].id, Uuid::from_u128(3));
    assert_eq!(first.children[0].children.len(), 1);
    assert_eq!(first.children[0].children[0].id, Uuid::from_u128(4));

    assert_eq!(count_nodes(&tree), 5);
}

#[test]
fn orphaned_reply_is_promoted_to_root() {
    let issue = Uuid::new_v4();
    // parent 99 is not part of the batch
    let tree = build_comment_tree(vec![
        comment(1, issue, None),
        comment(2, issue, Some(1)),
        comment(3, issue, Some(99)),
    ]);

    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].id, Uuid::from_u128(1));
    assert_eq!(tree[1].id, Uuid::from_u128(3));
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].id, Uuid::from_u128(2));
    assert_eq!(count_nodes(&tree), 3);
}

#[test]
fn self_referencing_comment_becomes_root() {
    let issue = Uuid::new_v4();
    let tree = build_comment_tree(vec![comment(7, issue, Some(7))]);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, Uuid::from_u128(7));
    assert!(tree[0].children.is_empty());
}

#[test]
fn deep_chain_keeps_every_node() {
    let issue = Uuid::new_v4();
    let mut comments = vec![comment(1, issue, None)];
    for n in 2..=200u128 {
        comments.push(comment(n, issue, Some(n - 1)));
    }

    let tree = build_comment_tree(comments);
    assert_eq!(tree.len(), 1);
    assert_eq!(count_nodes(&tree), 200);

    let mut node = &tree[0];
    let mut depth = 1;
    while let Some(child) = node.children.first() {
        node = child;
        depth += 1;
    }
    assert_eq!(depth, 200);
}

#[test]
fn mutual_parent_cycle_is_broken_not_dropped() {
    let issue = Uuid::new_v4();
    let tree = build_comment_tree(vec![
        comment(1, issue, Some(2)),
        comment(2, issue, Some(1)),
    ]);

    assert_eq!(count_nodes(&tree), 2);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, Uuid::from_u128(1));
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].id, Uuid::from_u128(2));
}

#[test]
fn longer_cycle_with_hanging_reply_keeps_all_nodes() {
    let issue = Uuid::new_v4();
    // 1 -> 2 -> 3 -> 1 plus a normal reply to 3
    let tree = build_comment_tree(vec![
        comment(1, issue, Some(3)),
        comment(2, issue, Some(1)),
        comment(3, issue, Some(2)),
        comment(4, issue, Some(3)),
    ]);

    assert_eq!(count_nodes(&tree), 4);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, Uuid::from_u128(1));
}

#[test]
fn cycle_next_to_ordinary_roots_keeps_roots_first() {
    let issue = Uuid::new_v4();
    let tree = build_comment_tree(vec![
        comment(1, issue, Some(2)),
        comment(2, issue, Some(1)),
        comment(3, issue, None),
    ]);

    assert_eq!(count_nodes(&tree), 3);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].id, Uuid::from_u128(3));
    assert_eq!(tree[1].id, Uuid::from_u128(1));
}

#[test]
fn empty_batch_yields_empty_tree() {
    assert!(build_comment_tree(Vec::new()).is_empty());
}

#[test]
fn author_names_travel_with_nodes() {
    let issue = Uuid::new_v4();
    let tree = build_comment_tree(vec![comment(1, issue, None), comment(2, issue, Some(1))]);

    assert_eq!(tree[0].author, "user1");
    assert_eq!(tree[0].children[0].author, "user2");
}

#[test]
fn replies_arriving_before_parent_still_attach() {
    let issue = Uuid::new_v4();
    // the repository orders by created_at, but defend against ties
    let tree = build_comment_tree(vec![
        comment(2, issue, Some(1)),
        comment(1, issue, None),
    ]);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, Uuid::from_u128(1));
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].id, Uuid::from_u128(2));
}
