use time::Date;

use crate::{id::Id, time::Timestamp, user::Role};

pub const DEFAULT_EVENT_STATUS: &str = "Upcoming";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id          : Id,
    pub name        : String,
    pub date        : Date,
    pub location    : String,
    pub description : String,
    pub status      : String,
    pub image       : String,
    pub created_at  : Timestamp,
}

/// A user that joined an event.
///
/// The contact details of the attendee and the event are
/// captured when joining and will not follow later changes.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id              : Id,
    pub user_id         : Id,
    pub event_id        : Id,
    pub event_name      : String,
    pub event_date      : Date,
    pub name            : String,
    pub email           : String,
    pub role            : Role,
    pub graduation_year : Option<i32>,
    pub phone_number    : Option<String>,
    pub joined_at       : Timestamp,
}
