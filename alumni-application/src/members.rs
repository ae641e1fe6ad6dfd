use super::*;

pub fn review_member(
    connections: &sqlite::Connections,
    account_id: &str,
    role: Role,
    user_id: &str,
    status: ApprovalStatus,
) -> Result<User> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::review_member(conn, account, role, user_id, status)
    })
}

pub fn delete_member(
    connections: &sqlite::Connections,
    account_id: &str,
    role: Role,
    user_id: &str,
) -> Result<()> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::delete_member(conn, account, role, user_id)
    })
}
