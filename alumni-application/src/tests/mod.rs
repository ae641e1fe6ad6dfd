pub mod prelude {

    pub use alumni_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub fn new_user(email: &str, role: Role) -> usecases::NewUser {
        usecases::NewUser {
            name: "Alice".into(),
            email: email.into(),
            password: "secret1".into(),
            role,
            profile: Profile::default(),
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            alumni_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        /// Creates an approved user, the name is derived from the email.
        pub fn create_user(&self, email: &str, role: Role) -> User {
            let name = email.split('@').next().unwrap_or_default();
            let mut name_chars = name.chars();
            let name = name_chars
                .next()
                .map(|first| first.to_uppercase().chain(name_chars).collect::<String>())
                .unwrap_or_default();
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| {
                    let mut user = usecases::create_new_user(
                        conn,
                        usecases::NewUser {
                            name,
                            ..new_user(email, role)
                        },
                    )?;
                    user.status = ApprovalStatus::Approved;
                    conn.update_user(&user)?;
                    Ok::<_, usecases::Error>(user)
                })
                .unwrap()
        }

        pub fn try_get_user(&self, id: &str) -> Option<User> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_user(id)
                .unwrap()
        }

        pub fn create_topic(&self, account: &User, title: &str) -> Topic {
            flows::create_topic(
                &self.db_connections,
                account.id.as_str(),
                usecases::NewTopic {
                    title: title.into(),
                    description: "Let's talk".into(),
                },
            )
            .unwrap()
        }

        pub fn add_comment(
            &self,
            account: &User,
            topic_id: &Id,
            parent_id: Option<&Id>,
            text: &str,
        ) -> Comment {
            flows::add_comment(
                &self.db_connections,
                account.id.as_str(),
                usecases::NewComment {
                    topic_id: topic_id.clone(),
                    parent_id: parent_id.cloned(),
                    text: text.into(),
                },
            )
            .unwrap()
        }
    }
}
