//! Transactional flows that combine the use cases
//! with the SQLite storage.
//!
//! Every flow that modifies data resolves the account of the
//! caller and executes the use case within a single exclusive
//! transaction.

mod accounts;
mod comments;
mod events;
mod gallery;
mod jobs;
mod members;
mod topics;

pub mod prelude {
    pub use super::{
        accounts::*, comments::*, events::*, gallery::*, jobs::*, members::*, topics::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use alumni_core::{entities::*, usecases};
pub(crate) use alumni_db_sqlite::DbConnection;

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use alumni_db_sqlite::Connections;
}

/// Runs `f` on behalf of the given account within a single transaction.
pub(crate) fn authorized_transaction<T, F>(
    connections: &sqlite::Connections,
    account_id: &str,
    f: F,
) -> Result<T>
where
    F: FnOnce(&DbConnection, &User) -> std::result::Result<T, usecases::Error>,
{
    Ok(connections.exclusive()?.transaction(|conn| {
        let account = usecases::authorize_user_by_id(conn, account_id)?;
        f(conn, &account)
    })?)
}
