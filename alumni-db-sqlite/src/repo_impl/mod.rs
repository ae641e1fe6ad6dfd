use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};
use num_traits::{FromPrimitive as _, ToPrimitive as _};

use alumni_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

type Result<T> = std::result::Result<T, repo::Error>;

pub(crate) fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

/// Updates and deletes of a single row must affect exactly that row.
fn expect_single_row(count: usize) -> Result<()> {
    match count {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        _ => Err(anyhow!("Affected {count} rows instead of a single one").into()),
    }
}

// The same repository implementation is shared by all
// connection types, they only differ in how the
// underlying connection has been obtained.
macro_rules! impl_repo {
    (@impl $target:ty, $trait:ident {
        $(fn $name:ident(&self $(, $arg:ident: $arg_ty:ty)*) -> $ret:ty;)*
    }) => {
        impl $trait for $target {
            $(
                fn $name(&self $(, $arg: $arg_ty)*) -> $ret {
                    $name(&mut self.conn.borrow_mut() $(, $arg)*)
                }
            )*
        }
    };
    ($trait:ident { $($body:tt)* }) => {
        impl_repo!(@impl DbReadOnly<'_>, $trait { $($body)* });
        impl_repo!(@impl DbReadWrite<'_>, $trait { $($body)* });
        impl_repo!(@impl DbConnection<'_>, $trait { $($body)* });
    };
}

mod comment;
mod event;
mod gallery;
mod job;
mod topic;
mod user;

fn role_into_i16(role: Role) -> i16 {
    role.to_i16().unwrap_or_else(|| {
        log::warn!("Could not convert role {role:?} to i16. Use 0 instead.");
        0
    })
}

fn load_role(role: i16) -> Result<Role> {
    Role::from_i16(role).ok_or_else(|| anyhow!("Invalid role: {role}").into())
}

fn approval_status_into_i16(status: ApprovalStatus) -> i16 {
    status.to_i16().unwrap_or_else(|| {
        log::warn!("Could not convert approval status {status:?} to i16. Use 0 instead.");
        0
    })
}

fn load_approval_status(status: i16) -> Result<ApprovalStatus> {
    ApprovalStatus::from_i16(status)
        .ok_or_else(|| anyhow!("Invalid approval status: {status}").into())
}

fn topic_status_into_i16(status: TopicStatus) -> i16 {
    status.to_i16().unwrap_or_else(|| {
        log::warn!("Could not convert topic status {status:?} to i16. Use 0 instead.");
        0
    })
}

fn load_topic_status(status: i16) -> Result<TopicStatus> {
    TopicStatus::from_i16(status).ok_or_else(|| anyhow!("Invalid topic status: {status}").into())
}

fn load_date(date: &str) -> Result<time::Date> {
    parse_date(date).map_err(|err| anyhow!("Invalid date '{date}': {err}").into())
}
