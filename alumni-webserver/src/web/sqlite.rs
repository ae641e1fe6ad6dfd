use std::ops::Deref;

use alumni_db_sqlite::{Connections as ConnectionPool, DbReadOnly, DbReadWrite};
use anyhow::Result as Fallible;
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};

/// The database pool of the portal as a request guard.
///
/// Cloning is cheap, all clones share the same pool.
#[derive(Clone)]
pub struct Connections(ConnectionPool);

impl Connections {
    /// For handlers that only read.
    pub fn shared(&self) -> Fallible<DbReadOnly> {
        self.0.shared()
    }

    /// For handlers that write without going through a flow.
    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        self.0.exclusive()
    }
}

impl From<ConnectionPool> for Connections {
    fn from(pool: ConnectionPool) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = ConnectionPool;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        // Managed once at launch, see `rocket_instance`
        let managed = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(managed.inner().clone())
    }
}
