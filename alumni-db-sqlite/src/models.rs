#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.
// Dates without a time are stored as `YYYY-MM-DD`.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users, treat_none_as_null = true)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub password: String,
    pub role: i16,
    pub status: i16,
    pub avatar: &'a str,
    pub phone_number: Option<&'a str>,
    pub enrollment_number: Option<&'a str>,
    pub degree: Option<&'a str>,
    pub branch: Option<&'a str>,
    pub graduation_year: Option<i32>,
    pub job_title: Option<&'a str>,
    pub experience: Option<&'a str>,
    pub company: Option<&'a str>,
    pub linkedin: Option<&'a str>,
    pub website: Option<&'a str>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: i16,
    pub status: i16,
    pub avatar: String,
    pub phone_number: Option<String>,
    pub enrollment_number: Option<String>,
    pub degree: Option<String>,
    pub branch: Option<String>,
    pub graduation_year: Option<i32>,
    pub job_title: Option<String>,
    pub experience: Option<String>,
    pub company: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = user_skill)]
pub struct UserSkill {
    pub parent_rowid: i64,
    pub skill: String,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = user_interest)]
pub struct UserInterest {
    pub parent_rowid: i64,
    pub interest: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = forum_topic)]
pub struct NewTopic<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub created_by: &'a str,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct TopicEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_by: String,
    pub status: i16,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = forum_comment, treat_none_as_null = true)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub topic_id: &'a str,
    pub author_id: &'a str,
    pub parent_id: Option<&'a str>,
    pub text: &'a str,
    pub likes: i64,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub rowid: i64,
    pub id: String,
    pub topic_id: String,
    pub author_id: String,
    pub parent_id: Option<String>,
    pub text: String,
    pub likes: i64,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = event)]
pub struct NewEvent<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub date: String,
    pub location: &'a str,
    pub description: &'a str,
    pub status: &'a str,
    pub image: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct EventEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub status: String,
    pub image: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = event_registration)]
pub struct NewRegistration<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub event_id: &'a str,
    pub event_name: &'a str,
    pub event_date: String,
    pub name: &'a str,
    pub email: &'a str,
    pub role: i16,
    pub graduation_year: Option<i32>,
    pub phone_number: Option<&'a str>,
    pub joined_at: i64,
}

#[derive(Queryable)]
pub struct RegistrationEntity {
    pub rowid: i64,
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub event_name: String,
    pub event_date: String,
    pub name: String,
    pub email: String,
    pub role: i16,
    pub graduation_year: Option<i32>,
    pub phone_number: Option<String>,
    pub joined_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = job)]
pub struct NewJob<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub description: &'a str,
    pub hr_name: &'a str,
    pub email: &'a str,
    pub posted_by: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct JobEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub hr_name: String,
    pub email: String,
    pub posted_by: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = gallery_item)]
pub struct NewGalleryItem<'a> {
    pub id: &'a str,
    pub image_url: &'a str,
    pub description: &'a str,
    pub uploaded_by: &'a str,
    pub uploader_name: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct GalleryItemEntity {
    pub rowid: i64,
    pub id: String,
    pub image_url: String,
    pub description: String,
    pub uploaded_by: String,
    pub uploader_name: String,
    pub created_at: i64,
    pub updated_at: i64,
}
