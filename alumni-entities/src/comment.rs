use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub topic_id   : Id,
    pub author_id  : Id,
    /// `None` for root comments.
    pub parent_id  : Option<Id>,
    pub text       : String,
    pub likes      : u32,
    pub created_at : Timestamp,
}

impl Comment {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// The public identity of the author of a comment or topic.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name   : String,
    pub avatar : String,
}
