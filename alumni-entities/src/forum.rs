use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{id::Id, time::Timestamp};

/// A discussion thread that owns its comments.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id          : Id,
    pub title       : String,
    pub description : String,
    pub created_by  : Id,
    pub status      : TopicStatus,
    pub created_at  : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum TopicStatus {
    Pending  = 0,
    Approved = 1,
    Rejected = 2,
}

impl Default for TopicStatus {
    fn default() -> TopicStatus {
        TopicStatus::Pending
    }
}
