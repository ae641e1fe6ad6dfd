///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        email -> Text,
        password -> Text,
        role -> SmallInt,
        status -> SmallInt,
        avatar -> Text,
        phone_number -> Nullable<Text>,
        enrollment_number -> Nullable<Text>,
        degree -> Nullable<Text>,
        branch -> Nullable<Text>,
        graduation_year -> Nullable<Integer>,
        job_title -> Nullable<Text>,
        experience -> Nullable<Text>,
        company -> Nullable<Text>,
        linkedin -> Nullable<Text>,
        website -> Nullable<Text>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

table! {
    user_skill (parent_rowid, skill) {
        parent_rowid -> BigInt,
        skill -> Text,
    }
}

joinable!(user_skill -> users (parent_rowid));

table! {
    user_interest (parent_rowid, interest) {
        parent_rowid -> BigInt,
        interest -> Text,
    }
}

joinable!(user_interest -> users (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Forum
///////////////////////////////////////////////////////////////////////

table! {
    forum_topic (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        description -> Text,
        created_by -> Text,
        status -> SmallInt,
        created_at -> BigInt,
    }
}

// Comments only reference other rows by their public id.
// Neither topics nor parent comments are enforced by the
// database: replies may outlive their parents.
table! {
    forum_comment (rowid) {
        rowid -> BigInt,
        id -> Text,
        topic_id -> Text,
        author_id -> Text,
        parent_id -> Nullable<Text>,
        text -> Text,
        likes -> BigInt,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    event (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        date -> Text,
        location -> Text,
        description -> Text,
        status -> Text,
        image -> Text,
        created_at -> BigInt,
    }
}

table! {
    event_registration (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_id -> Text,
        event_id -> Text,
        event_name -> Text,
        event_date -> Text,
        name -> Text,
        email -> Text,
        role -> SmallInt,
        graduation_year -> Nullable<Integer>,
        phone_number -> Nullable<Text>,
        joined_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Jobs
///////////////////////////////////////////////////////////////////////

table! {
    job (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        company -> Text,
        location -> Text,
        description -> Text,
        hr_name -> Text,
        email -> Text,
        posted_by -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Gallery
///////////////////////////////////////////////////////////////////////

table! {
    gallery_item (rowid) {
        rowid -> BigInt,
        id -> Text,
        image_url -> Text,
        description -> Text,
        uploaded_by -> Text,
        uploader_name -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(
    users,
    user_skill,
    user_interest,
    forum_topic,
    forum_comment,
    event,
    event_registration,
    job,
    gallery_item,
);
