use super::*;

/// Adds a root comment or a reply to a topic.
pub fn add_comment(
    connections: &sqlite::Connections,
    account_id: &str,
    new_comment: usecases::NewComment,
) -> Result<Comment> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::add_comment(conn, account, new_comment)
    })
}

pub fn edit_comment(
    connections: &sqlite::Connections,
    account_id: &str,
    comment_id: &str,
    text: &str,
) -> Result<Comment> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::edit_comment(conn, account, comment_id, text)
    })
}

/// Anonymous likes are accepted.
pub fn like_comment(connections: &sqlite::Connections, comment_id: &str) -> Result<Comment> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::like_comment(conn, comment_id))?)
}

pub fn delete_comment(
    connections: &sqlite::Connections,
    account_id: &str,
    comment_id: &str,
) -> Result<()> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::delete_comment(conn, account, comment_id)
    })
}
