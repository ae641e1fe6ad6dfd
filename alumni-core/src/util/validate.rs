use alumni_entities::{
    event::Event,
    forum::Topic,
    gallery::{GalleryItem, MAX_DESCRIPTION_LEN},
    job::Job,
};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Debug, Error)]
pub enum TopicInvalidation {
    #[error("Missing title")]
    Title,
    #[error("Missing description")]
    Description,
}

impl Validate for Topic {
    type Error = TopicInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.title) {
            return Err(Self::Error::Title);
        }
        if is_blank(&self.description) {
            return Err(Self::Error::Description);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum EventInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Missing location")]
    Location,
}

impl Validate for Event {
    type Error = EventInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.name) {
            return Err(Self::Error::Name);
        }
        if is_blank(&self.location) {
            return Err(Self::Error::Location);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum JobInvalidation {
    #[error("Missing title")]
    Title,
    #[error("Missing company")]
    Company,
    #[error("Invalid email")]
    Email,
}

impl Validate for Job {
    type Error = JobInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.title) {
            return Err(Self::Error::Title);
        }
        if is_blank(&self.company) {
            return Err(Self::Error::Company);
        }
        if !is_valid_email(&self.email) {
            return Err(Self::Error::Email);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum GalleryItemInvalidation {
    #[error("Missing image")]
    ImageUrl,
    #[error("The description is too long")]
    DescriptionTooLong,
}

impl Validate for GalleryItem {
    type Error = GalleryItemInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_blank(&self.image_url) {
            return Err(Self::Error::ImageUrl);
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(Self::Error::DescriptionTooLong);
        }
        Ok(())
    }
}
