use crate::{id::Id, time::Timestamp};

pub const MAX_DESCRIPTION_LEN: usize = 300;

pub const UNKNOWN_UPLOADER: &str = "Unknown";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub id            : Id,
    pub image_url     : String,
    pub description   : String,
    pub uploaded_by   : Id,
    pub uploader_name : String,
    pub created_at    : Timestamp,
    pub updated_at    : Timestamp,
}
