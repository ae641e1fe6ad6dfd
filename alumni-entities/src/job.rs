use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id          : Id,
    pub title       : String,
    pub company     : String,
    pub location    : String,
    pub description : String,
    pub hr_name     : String,
    pub email       : String,
    pub posted_by   : Id,
    pub created_at  : Timestamp,
}
