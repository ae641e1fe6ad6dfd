// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository. Joins that are needed for rendering return
// the referenced data as plain values.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn delete_user(&self, id: &str) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    fn get_users_by_role(&self, role: Role) -> Result<Vec<User>>;
    fn count_users_by_role(&self, role: Role) -> Result<usize>;

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        match self.get_user(id) {
            Ok(user) => Ok(Some(user)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

pub trait TopicRepo {
    fn create_topic(&self, topic: &Topic) -> Result<()>;
    fn update_topic(&self, topic: &Topic) -> Result<()>;
    fn delete_topic(&self, id: &str) -> Result<()>;

    fn get_topic(&self, id: &str) -> Result<Topic>;
    /// Newest first
    fn all_topics(&self) -> Result<Vec<Topic>>;
    /// Newest first
    fn topics_created_by(&self, user_id: &str) -> Result<Vec<Topic>>;
    fn count_topics(&self) -> Result<usize>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: &Comment) -> Result<()>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;
    fn delete_comment(&self, id: &str) -> Result<()>;
    /// Returns the number of deleted comments.
    fn delete_comments_of_topic(&self, topic_id: &str) -> Result<usize>;

    fn load_comment(&self, id: &str) -> Result<Comment>;
    /// All comments of a topic in ascending order of creation,
    /// each joined with its author if the author still exists.
    fn load_comments_of_topic(&self, topic_id: &str) -> Result<Vec<(Comment, Option<Author>)>>;
    /// Newest first, each joined with the title of its topic
    /// if the topic still exists.
    fn load_comments_of_author(&self, author_id: &str)
        -> Result<Vec<(Comment, Option<String>)>>;
    fn count_comments_of_topic(&self, topic_id: &str) -> Result<usize>;
}

pub trait EventRepo {
    fn create_event(&self, event: &Event) -> Result<()>;
    fn delete_event(&self, id: &str) -> Result<()>;

    fn get_event(&self, id: &str) -> Result<Event>;
    /// Ordered by date
    fn all_events(&self) -> Result<Vec<Event>>;
    fn count_events(&self) -> Result<usize>;
}

pub trait RegistrationRepo {
    fn create_registration(&self, registration: &Registration) -> Result<()>;
    fn delete_registration(&self, user_id: &str, event_id: &str) -> Result<()>;
    fn delete_registrations_of_event(&self, event_id: &str) -> Result<usize>;

    fn try_get_registration(&self, user_id: &str, event_id: &str) -> Result<Option<Registration>>;
    fn registrations_of_user(&self, user_id: &str) -> Result<Vec<Registration>>;
    fn registrations_of_event(&self, event_id: &str) -> Result<Vec<Registration>>;
}

pub trait JobRepo {
    fn create_job(&self, job: &Job) -> Result<()>;
    fn update_job(&self, job: &Job) -> Result<()>;
    fn delete_job(&self, id: &str) -> Result<()>;

    fn get_job(&self, id: &str) -> Result<Job>;
    /// Newest first, each joined with the name of the poster
    /// if the poster still exists.
    fn all_jobs(&self) -> Result<Vec<(Job, Option<String>)>>;
    /// Newest first
    fn jobs_posted_by(&self, user_id: &str) -> Result<Vec<Job>>;
    fn count_jobs(&self) -> Result<usize>;
}

pub trait GalleryRepo {
    fn create_gallery_item(&self, item: &GalleryItem) -> Result<()>;
    fn update_gallery_item(&self, item: &GalleryItem) -> Result<()>;
    fn delete_gallery_item(&self, id: &str) -> Result<()>;

    fn get_gallery_item(&self, id: &str) -> Result<GalleryItem>;
    /// Newest first
    fn all_gallery_items(&self) -> Result<Vec<GalleryItem>>;
    /// Newest first
    fn gallery_items_uploaded_by(&self, user_id: &str) -> Result<Vec<GalleryItem>>;
    fn count_gallery_items(&self) -> Result<usize>;
}
