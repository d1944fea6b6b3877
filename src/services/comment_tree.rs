use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::db::models::comment::Comment;

/// One node of the reply tree returned by `GET /issues/{id}/comments`.
#[derive(Serialize, Clone, Debug)]
pub struct CommentNode {
    pub id: Uuid,
    pub issue_id: Uuid,
    pub author_id: Uuid,
    pub author: String,
    pub body: String,
    pub parent_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    fn new(comment: Comment, author: String) -> Self {
        Self {
            id: comment.id,
            issue_id: comment.issue_id,
            author_id: comment.author_id,
            author,
            body: comment.body,
            parent_id: comment.parent_comment_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            children: Vec::new(),
        }
    }
}

/// Assembles the reply tree from the flat, insertion-ordered comment list of
/// one issue. Arena-style: nodes live in flat slots, the tree is wired through
/// index lists, so no recursive descent and no ownership cycles.
///
/// A comment whose parent id is set but absent from the batch is promoted to
/// a root rather than dropped, and a parent cycle is broken by promoting its
/// first member. Sibling order follows input order. O(n).
pub fn build_comment_tree(comments: Vec<(Comment, String)>) -> Vec<CommentNode> {
    let index: HashMap<Uuid, usize> = comments
        .iter()
        .enumerate()
        .map(|(slot, (comment, _))| (comment.id, slot))
        .collect();

    let mut child_lists: Vec<Vec<usize>> = vec![Vec::new(); comments.len()];
    let mut roots: Vec<usize> = Vec::new();
    for (slot, (comment, _)) in comments.iter().enumerate() {
        let parent_slot = comment
            .parent_comment_id
            .filter(|parent_id| *parent_id != comment.id)
            .and_then(|parent_id| index.get(&parent_id).copied());
        match parent_slot {
            Some(parent) => child_lists[parent].push(slot),
            // true root, or dangling parent reference: promote
            None => roots.push(slot),
        }
    }

    let mut slots: Vec<Option<CommentNode>> = comments
        .into_iter()
        .map(|(comment, author)| Some(CommentNode::new(comment, author)))
        .collect();

    // Preorder walk of the arena; visiting it in reverse reaches every child
    // before its parent, so each take() below moves a finished subtree.
    let mut order = Vec::with_capacity(slots.len());
    let mut visited = vec![false; slots.len()];
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    for &slot in &roots {
        visited[slot] = true;
    }
    let mut scan = 0;
    loop {
        while let Some(slot) = stack.pop() {
            order.push(slot);
            // an already-visited child closes a parent cycle; drop that edge
            child_lists[slot].retain(|&child| !visited[child]);
            for &child in child_lists[slot].iter().rev() {
                visited[child] = true;
                stack.push(child);
            }
        }
        // anything still unvisited sits on a parent cycle; promote one member
        // to a root and keep walking
        while scan < visited.len() && visited[scan] {
            scan += 1;
        }
        if scan == visited.len() {
            break;
        }
        visited[scan] = true;
        roots.push(scan);
        stack.push(scan);
    }
    for &slot in order.iter().rev() {
        let children: Vec<CommentNode> = child_lists[slot]
            .iter()
            .filter_map(|&child| slots[child].take())
            .collect();
        if let Some(node) = slots[slot].as_mut() {
            node.children = children;
        }
    }

    roots.iter().filter_map(|&slot| slots[slot].take()).collect()
}
