pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, topic_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{id::*, password::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.into();
            self
        }
        /// Hashes the given plain text password.
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn status(mut self, status: ApprovalStatus) -> Self {
            self.user.status = status;
            self
        }
        pub fn avatar(mut self, avatar: &str) -> Self {
            self.user.avatar = avatar.into();
            self
        }
        pub fn graduation_year(mut self, year: i32) -> Self {
            self.user.profile.graduation_year = Some(year);
            self
        }
        pub fn skills(mut self, skills: Vec<impl Into<String>>) -> Self {
            self.user.profile.skills = skills.into_iter().map(Into::into).collect();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            let now = Timestamp::now();
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                    email: "".into(),
                    password: Password::from(String::new()),
                    role: Role::default(),
                    status: ApprovalStatus::default(),
                    avatar: DEFAULT_AVATAR.into(),
                    profile: Profile::default(),
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod topic_builder {

    use super::*;
    use crate::{forum::*, id::*, time::*};

    #[derive(Debug)]
    pub struct TopicBuild {
        topic: Topic,
    }

    impl TopicBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.topic.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.topic.title = title.into();
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.topic.description = description.into();
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.topic.created_by = user_id.into();
            self
        }
        pub fn status(mut self, status: TopicStatus) -> Self {
            self.topic.status = status;
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.topic.created_at = Timestamp::from_millis(millis);
            self
        }
        pub fn finish(self) -> Topic {
            self.topic
        }
    }

    impl Builder for Topic {
        type Build = TopicBuild;
        fn build() -> TopicBuild {
            TopicBuild {
                topic: Topic {
                    id: Id::new(),
                    title: "".into(),
                    description: "".into(),
                    created_by: Id::new(),
                    status: TopicStatus::default(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn topic(mut self, topic_id: &str) -> Self {
            self.comment.topic_id = topic_id.into();
            self
        }
        pub fn author(mut self, user_id: &str) -> Self {
            self.comment.author_id = user_id.into();
            self
        }
        pub fn parent(mut self, parent_id: &str) -> Self {
            self.comment.parent_id = Some(parent_id.into());
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn likes(mut self, likes: u32) -> Self {
            self.comment.likes = likes;
            self
        }
        pub fn created_at(mut self, millis: i64) -> Self {
            self.comment.created_at = Timestamp::from_millis(millis);
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    topic_id: Id::new(),
                    author_id: Id::new(),
                    parent_id: None,
                    text: "".into(),
                    likes: 0,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
