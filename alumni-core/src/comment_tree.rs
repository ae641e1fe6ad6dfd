//! Assembles the nested reply threads of a forum topic.
//!
//! The input is the flat list of comments of a single topic, each
//! paired with the profile of its author if the author still exists.
//! Comments are visited in ascending order of creation and a reply is
//! only attached if its parent has already been visited. Replies with
//! a parent that does not resolve are dropped silently, together with
//! all of their own replies. This covers deleted parents, references
//! into other topics, self references, and parents that have been
//! created after the reply.

use std::collections::HashMap;

use crate::{
    avatar::AvatarUrls,
    entities::{Author, Comment, Id},
};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub comment           : Comment,
    /// `None` if the author no longer exists.
    pub author_name       : Option<String>,
    pub author_avatar_url : String,
    pub replies           : Vec<CommentNode>,
}

impl CommentNode {
    fn new(comment: Comment, author: Option<Author>, avatar_urls: &AvatarUrls) -> Self {
        let (author_name, author_avatar_url) = match author {
            Some(Author { name, avatar }) => (Some(name), avatar_urls.resolve(Some(&avatar))),
            None => (None, avatar_urls.resolve(None)),
        };
        Self {
            comment,
            author_name,
            author_avatar_url,
            replies: vec![],
        }
    }

    /// Number of nodes in this subtree, including this node.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(&node.replies);
        }
        count
    }
}

// The derived drop glue recurses once per nesting level.
impl Drop for CommentNode {
    fn drop(&mut self) {
        let mut replies = std::mem::take(&mut self.replies);
        while let Some(mut reply) = replies.pop() {
            replies.append(&mut reply.replies);
        }
    }
}

pub fn build_comment_tree<I>(comments: I, avatar_urls: &AvatarUrls) -> Vec<CommentNode>
where
    I: IntoIterator<Item = (Comment, Option<Author>)>,
{
    let mut comments: Vec<_> = comments.into_iter().collect();
    // Stable, i.e. comments with equal timestamps keep their storage order
    comments.sort_by_key(|(comment, _)| comment.created_at);

    // Arena of all attached nodes in visiting order. The parent of a
    // node always precedes the node itself.
    let mut nodes: Vec<Option<CommentNode>> = Vec::with_capacity(comments.len());
    let mut parents: Vec<Option<usize>> = Vec::with_capacity(comments.len());
    let mut index_by_id: HashMap<Id, usize> = HashMap::with_capacity(comments.len());

    for (comment, author) in comments {
        let parent = match &comment.parent_id {
            None => None,
            Some(parent_id) => {
                let Some(&parent_index) = index_by_id.get(parent_id) else {
                    log::debug!(
                        "Dropping reply {} with unresolved parent {}",
                        comment.id,
                        parent_id
                    );
                    continue;
                };
                Some(parent_index)
            }
        };
        index_by_id.insert(comment.id.clone(), nodes.len());
        parents.push(parent);
        nodes.push(Some(CommentNode::new(comment, author, avatar_urls)));
    }

    // Move the nodes into the replies of their parents, back to front.
    // All replies of a node have been collected when the node itself
    // is reached, but in reverse order.
    let mut roots = Vec::new();
    for index in (0..nodes.len()).rev() {
        let Some(mut node) = nodes[index].take() else {
            continue;
        };
        node.replies.reverse();
        match parents[index] {
            Some(parent_index) => {
                if let Some(parent) = nodes[parent_index].as_mut() {
                    parent.replies.push(node);
                }
            }
            None => roots.push(node),
        }
    }
    roots.reverse();
    roots
}
