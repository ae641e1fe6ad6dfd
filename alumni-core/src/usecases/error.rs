use crate::{
    repositories,
    util::validate::{
        EventInvalidation, GalleryItemInvalidation, JobInvalidation, TopicInvalidation,
    },
};
use alumni_entities::{id::IdParseError, password, time::DateParseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid identifier format")]
    Id,
    #[error("The name is missing")]
    Name,
    #[error("The title is missing")]
    Title,
    #[error("The description is missing")]
    Description,
    #[error("The description is too long")]
    DescriptionTooLong,
    #[error("The location is missing")]
    Location,
    #[error("The company is missing")]
    Company,
    #[error("The image is missing")]
    Image,
    #[error("Invalid date")]
    Date,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("Invalid role")]
    Role,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Empty comment")]
    EmptyComment,
    #[error("The parent comment does not exist in this topic")]
    ParentComment,
    #[error("The reply is nested too deeply")]
    ReplyDepth,
    #[error("The user already joined this event")]
    AlreadyJoined,
    #[error("The user has not joined this event")]
    NotJoined,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The account has been rejected")]
    AccountRejected,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<IdParseError> for Error {
    fn from(_: IdParseError) -> Self {
        Self::Id
    }
}

impl From<DateParseError> for Error {
    fn from(_: DateParseError) -> Self {
        Self::Date
    }
}

impl From<password::ParseError> for Error {
    fn from(err: password::ParseError) -> Self {
        match err {
            password::ParseError::TooShort => Self::Password,
            password::ParseError::Hash(err) => Self::Repo(repositories::Error::Other(
                anyhow::anyhow!("Failed to hash password: {err}"),
            )),
        }
    }
}

impl From<TopicInvalidation> for Error {
    fn from(err: TopicInvalidation) -> Self {
        match err {
            TopicInvalidation::Title => Self::Title,
            TopicInvalidation::Description => Self::Description,
        }
    }
}

impl From<EventInvalidation> for Error {
    fn from(err: EventInvalidation) -> Self {
        match err {
            EventInvalidation::Name => Self::Name,
            EventInvalidation::Location => Self::Location,
        }
    }
}

impl From<JobInvalidation> for Error {
    fn from(err: JobInvalidation) -> Self {
        match err {
            JobInvalidation::Title => Self::Title,
            JobInvalidation::Company => Self::Company,
            JobInvalidation::Email => Self::Email,
        }
    }
}

impl From<GalleryItemInvalidation> for Error {
    fn from(err: GalleryItemInvalidation) -> Self {
        match err {
            GalleryItemInvalidation::ImageUrl => Self::Image,
            GalleryItemInvalidation::DescriptionTooLong => Self::DescriptionTooLong,
        }
    }
}
