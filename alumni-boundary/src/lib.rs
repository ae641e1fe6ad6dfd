use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    /// The HTTP status code of the response
    pub http_status: u16,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Alumni,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Self-maintained details of a user.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub areas_of_interest: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct User {
    pub id         : String,
    pub name       : String,
    pub email      : String,
    pub role       : UserRole,
    pub status     : ApprovalStatus,
    pub avatar     : String,
    #[serde(flatten)]
    pub profile    : Profile,
    pub created_at : i64,
    pub updated_at : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(flatten)]
    pub profile: Profile,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateProfile {
    pub name: String,
    /// Must not differ from the stored email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Must not differ from the stored role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub profile: Profile,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateAvatar {
    pub avatar: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ChangePassword {
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateAdminProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct DashboardCounts {
    pub alumni        : u64,
    pub students      : u64,
    pub topics        : u64,
    pub jobs          : u64,
    pub events        : u64,
    pub gallery_items : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum TopicStatus {
    Pending,
    Approved,
    Rejected,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Topic {
    pub id                 : String,
    pub title              : String,
    pub description        : String,
    pub created_by         : String,
    pub status             : TopicStatus,
    pub created_at         : i64,
    pub comment_count      : u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_name       : Option<String>,
    pub creator_avatar_url : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewTopic {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateTopic {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateTopicStatus {
    pub status: TopicStatus,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Comment {
    pub id         : String,
    pub topic_id   : String,
    pub author_id  : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id  : Option<String>,
    pub text       : String,
    pub likes      : u32,
    pub created_at : i64,
}

/// A comment together with its nested replies.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment           : Comment,
    /// Absent if the author no longer exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name       : Option<String>,
    pub author_avatar_url : String,
    pub replies           : Vec<CommentNode>,
}

impl Drop for CommentNode {
    fn drop(&mut self) {
        // Flatten first, deep threads would overflow the stack otherwise
        let mut replies = std::mem::take(&mut self.replies);
        while let Some(mut reply) = replies.pop() {
            replies.append(&mut reply.replies);
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct AuthorComment {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_title: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewComment {
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct TopicComments {
    pub topic_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct EditComment {
    pub text: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Event {
    pub id          : String,
    pub name        : String,
    /// `YYYY-MM-DD`
    pub date        : String,
    pub location    : String,
    pub description : String,
    pub status      : String,
    pub image       : String,
    pub created_at  : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct JoinEvent {
    pub event_id: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Registration {
    pub id              : String,
    pub user_id         : String,
    pub event_id        : String,
    pub event_name      : String,
    pub event_date      : String,
    pub name            : String,
    pub email           : String,
    pub role            : UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year : Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number    : Option<String>,
    pub joined_at       : i64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Job {
    pub id             : String,
    pub title          : String,
    pub company        : String,
    pub location       : String,
    pub description    : String,
    pub hr_name        : String,
    pub email          : String,
    pub posted_by      : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_by_name : Option<String>,
    pub created_at     : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewJob {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hr_name: String,
    pub email: String,
}

/// Only non-empty values replace the stored ones.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UserJobs {
    pub user: User,
    pub jobs: Vec<Job>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct GalleryItem {
    pub id            : String,
    pub image_url     : String,
    pub description   : String,
    pub uploaded_by   : String,
    pub uploader_name : String,
    pub created_at    : i64,
    pub updated_at    : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct NewGalleryItem {
    pub image_url: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UpdateGalleryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_comment_nodes_are_flattened() {
        let node = CommentNode {
            comment: Comment {
                id: "c1".into(),
                topic_id: "t".into(),
                author_id: "a".into(),
                parent_id: None,
                text: "Hi".into(),
                likes: 2,
                created_at: 1,
            },
            author_name: None,
            author_avatar_url: "/default-avatar.png".into(),
            replies: vec![],
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            serde_json::json!({
                "id": "c1",
                "topic_id": "t",
                "author_id": "a",
                "text": "Hi",
                "likes": 2,
                "created_at": 1,
                "author_avatar_url": "/default-avatar.png",
                "replies": []
            }),
            json
        );
    }

    #[test]
    fn deserialize_new_user_with_optional_profile() {
        let new_user: NewUser = serde_json::from_str(
            r#"{"name":"Bob","email":"bob@example.com","password":"secret1","role":"alumni","skills":["rust"],"social_links":{"linkedin":"bob"}}"#,
        )
        .unwrap();
        assert!(matches!(new_user.role, UserRole::Alumni));
        assert_eq!(vec!["rust"], new_user.profile.skills);
        assert!(new_user.profile.areas_of_interest.is_empty());
        assert_eq!(
            Some("bob"),
            new_user.profile.social_links.linkedin.as_deref()
        );
        assert!(new_user.profile.graduation_year.is_none());
    }

    #[test]
    fn reject_unknown_roles() {
        assert!(serde_json::from_str::<UserRole>(r#""guest""#).is_err());
    }
}
