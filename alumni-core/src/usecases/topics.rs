use super::{authorize_admin, authorize_owner_or_admin, prelude::*};
use crate::{avatar::AvatarUrls, util::validate::Validate};

#[derive(Debug, Clone)]
pub struct NewTopic {
    pub title: String,
    pub description: String,
}

pub fn create_topic<R: TopicRepo>(repo: &R, account: &User, new_topic: NewTopic) -> Result<Topic> {
    let NewTopic { title, description } = new_topic;
    let topic = Topic {
        id: Id::new(),
        title: title.trim().to_owned(),
        description: description.trim().to_owned(),
        created_by: account.id.clone(),
        status: TopicStatus::default(),
        created_at: Timestamp::now(),
    };
    topic.validate()?;
    log::debug!("Creating topic {} by user {}", topic.id, account.id);
    repo.create_topic(&topic)?;
    Ok(topic)
}

#[derive(Debug, Clone)]
pub struct TopicUpdate {
    pub id: Id,
    pub title: String,
    pub description: String,
}

pub fn update_topic<R: TopicRepo>(repo: &R, account: &User, update: TopicUpdate) -> Result<Topic> {
    let TopicUpdate {
        id,
        title,
        description,
    } = update;
    let mut topic = repo.get_topic(id.as_str())?;
    authorize_owner_or_admin(account, &topic.created_by)?;
    topic.title = title.trim().to_owned();
    topic.description = description.trim().to_owned();
    topic.validate()?;
    repo.update_topic(&topic)?;
    Ok(topic)
}

pub fn change_topic_status<R: TopicRepo>(
    repo: &R,
    account: &User,
    topic_id: &str,
    status: TopicStatus,
) -> Result<Topic> {
    authorize_admin(account)?;
    let mut topic = repo.get_topic(topic_id)?;
    topic.status = status;
    repo.update_topic(&topic)?;
    log::info!("Changed status of topic {} to {}", topic.id, status);
    Ok(topic)
}

/// Deletes a topic and all of its comments.
///
/// Both deletions must happen within the same transaction.
/// Returns the number of deleted comments.
pub fn delete_topic_with_comments<R>(repo: &R, account: &User, topic_id: &str) -> Result<usize>
where
    R: TopicRepo + CommentRepo,
{
    let topic = repo.get_topic(topic_id)?;
    authorize_owner_or_admin(account, &topic.created_by)?;
    repo.delete_topic(topic.id.as_str())?;
    let deleted_comments = repo.delete_comments_of_topic(topic.id.as_str())?;
    log::info!(
        "Deleted topic {} together with {} comment(s)",
        topic.id,
        deleted_comments
    );
    Ok(deleted_comments)
}

/// A topic enriched with the data needed for rendering lists.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub topic              : Topic,
    pub comment_count      : usize,
    /// `None` if the creator no longer exists.
    pub creator_name       : Option<String>,
    pub creator_avatar_url : String,
}

fn summarize_topic<R>(repo: &R, avatar_urls: &AvatarUrls, topic: Topic) -> Result<TopicSummary>
where
    R: UserRepo + CommentRepo,
{
    let comment_count = repo.count_comments_of_topic(topic.id.as_str())?;
    let creator = repo.try_get_user(topic.created_by.as_str())?;
    let creator_avatar_url = avatar_urls.resolve(creator.as_ref().map(|u| u.avatar.as_str()));
    Ok(TopicSummary {
        topic,
        comment_count,
        creator_name: creator.map(|u| u.name),
        creator_avatar_url,
    })
}

/// Newest first
pub fn load_topic_summaries<R>(repo: &R, avatar_urls: &AvatarUrls) -> Result<Vec<TopicSummary>>
where
    R: UserRepo + TopicRepo + CommentRepo,
{
    repo.all_topics()?
        .into_iter()
        .map(|topic| summarize_topic(repo, avatar_urls, topic))
        .collect()
}

/// Newest first
pub fn load_topic_summaries_of_user<R>(
    repo: &R,
    avatar_urls: &AvatarUrls,
    user_id: &str,
) -> Result<Vec<TopicSummary>>
where
    R: UserRepo + TopicRepo + CommentRepo,
{
    repo.topics_created_by(user_id)?
        .into_iter()
        .map(|topic| summarize_topic(repo, avatar_urls, topic))
        .collect()
}

pub fn load_topic_summary<R>(
    repo: &R,
    avatar_urls: &AvatarUrls,
    topic_id: &str,
) -> Result<TopicSummary>
where
    R: UserRepo + TopicRepo + CommentRepo,
{
    let topic = repo.get_topic(topic_id)?;
    summarize_topic(repo, avatar_urls, topic)
}
