use super::{authorize_owner_or_admin, prelude::*};
use crate::{
    avatar::AvatarUrls,
    comment_tree::{build_comment_tree, CommentNode},
    repositories::Error as RepoError,
};

/// Replies may be nested at most this many levels below a root comment.
///
/// Rendered threads are serialized recursively, so the depth of
/// stored threads needs a bound.
pub const MAX_REPLY_DEPTH: usize = 64;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub topic_id: Id,
    /// `None` for root comments.
    pub parent_id: Option<Id>,
    pub text: String,
}

/// Adds a root comment or a reply to an existing topic.
///
/// The parent of a reply must exist and belong to the same topic.
pub fn add_comment<R>(repo: &R, account: &User, new_comment: NewComment) -> Result<Comment>
where
    R: TopicRepo + CommentRepo,
{
    let NewComment {
        topic_id,
        parent_id,
        text,
    } = new_comment;
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyComment);
    }
    let topic = repo.get_topic(topic_id.as_str())?;
    if let Some(parent_id) = &parent_id {
        let parent = match repo.load_comment(parent_id.as_str()) {
            Ok(parent) => parent,
            Err(RepoError::NotFound) => {
                log::debug!("Rejecting reply to nonexistent comment {parent_id}");
                return Err(Error::ParentComment);
            }
            Err(err) => return Err(err.into()),
        };
        if parent.topic_id != topic.id {
            log::debug!(
                "Rejecting reply to comment {} of another topic {}",
                parent.id,
                parent.topic_id
            );
            return Err(Error::ParentComment);
        }
        if reply_depth(repo, &parent)? > MAX_REPLY_DEPTH {
            log::debug!("Rejecting reply to comment {} nested too deeply", parent.id);
            return Err(Error::ReplyDepth);
        }
    }
    let comment = Comment {
        id: Id::new(),
        topic_id: topic.id,
        author_id: account.id.clone(),
        parent_id,
        text: text.to_owned(),
        likes: 0,
        created_at: Timestamp::now(),
    };
    repo.create_comment(&comment)?;
    Ok(comment)
}

/// Nesting level of a new reply to `parent`, counted from 1 for replies
/// to root comments. Stops counting past [`MAX_REPLY_DEPTH`].
fn reply_depth<R: CommentRepo>(repo: &R, parent: &Comment) -> Result<usize> {
    let mut depth = 1;
    let mut ancestor_id = parent.parent_id.clone();
    while let Some(id) = ancestor_id {
        if depth > MAX_REPLY_DEPTH {
            break;
        }
        depth += 1;
        ancestor_id = match repo.load_comment(id.as_str()) {
            Ok(ancestor) => ancestor.parent_id,
            // The thread is already cut off above this ancestor
            Err(RepoError::NotFound) => None,
            Err(err) => return Err(err.into()),
        };
    }
    Ok(depth)
}

pub fn edit_comment<R: CommentRepo>(
    repo: &R,
    account: &User,
    comment_id: &str,
    text: &str,
) -> Result<Comment> {
    let mut comment = repo.load_comment(comment_id)?;
    authorize_owner_or_admin(account, &comment.author_id)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyComment);
    }
    comment.text = text.to_owned();
    repo.update_comment(&comment)?;
    Ok(comment)
}

pub fn like_comment<R: CommentRepo>(repo: &R, comment_id: &str) -> Result<Comment> {
    let mut comment = repo.load_comment(comment_id)?;
    comment.likes = comment.likes.saturating_add(1);
    repo.update_comment(&comment)?;
    Ok(comment)
}

/// Replies of the deleted comment are kept and become unreachable
/// from the rendered tree.
pub fn delete_comment<R: CommentRepo>(repo: &R, account: &User, comment_id: &str) -> Result<()> {
    let comment = repo.load_comment(comment_id)?;
    authorize_owner_or_admin(account, &comment.author_id)?;
    repo.delete_comment(comment.id.as_str())?;
    Ok(())
}

/// The threaded comments of a topic.
///
/// Topics without comments and unknown topics both result in
/// an empty forest.
pub fn load_comment_tree<R: CommentRepo>(
    repo: &R,
    topic_id: &str,
    avatar_urls: &AvatarUrls,
) -> Result<Vec<CommentNode>> {
    let comments = repo.load_comments_of_topic(topic_id)?;
    Ok(build_comment_tree(comments, avatar_urls))
}

/// All comments of a user with the title of the commented topic.
pub fn load_comments_of_author<R: CommentRepo>(
    repo: &R,
    author_id: &str,
) -> Result<Vec<(Comment, Option<String>)>> {
    Ok(repo.load_comments_of_author(author_id)?)
}
