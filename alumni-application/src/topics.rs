use super::*;

pub fn create_topic(
    connections: &sqlite::Connections,
    account_id: &str,
    new_topic: usecases::NewTopic,
) -> Result<Topic> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::create_topic(conn, account, new_topic)
    })
}

pub fn update_topic(
    connections: &sqlite::Connections,
    account_id: &str,
    update: usecases::TopicUpdate,
) -> Result<Topic> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::update_topic(conn, account, update)
    })
}

pub fn change_topic_status(
    connections: &sqlite::Connections,
    account_id: &str,
    topic_id: &str,
    status: TopicStatus,
) -> Result<Topic> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::change_topic_status(conn, account, topic_id, status)
    })
}

/// Deletes the topic together with all of its comments.
pub fn delete_topic(
    connections: &sqlite::Connections,
    account_id: &str,
    topic_id: &str,
) -> Result<usize> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::delete_topic_with_comments(conn, account, topic_id).inspect_err(|err| {
            log::warn!("Failed to delete topic {topic_id}: {err}");
        })
    })
}
