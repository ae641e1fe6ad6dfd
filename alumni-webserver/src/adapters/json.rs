pub use alumni_boundary::*;

use crate::core::{comment_tree, entities as e, usecases};

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            name,
            email,
            password,
            role,
            profile,
        } = from;
        usecases::NewUser {
            name,
            email,
            password,
            role: role.into(),
            profile: profile.into(),
        }
    }

    pub fn profile_update(from: UpdateProfile) -> usecases::ProfileUpdate {
        let UpdateProfile {
            name,
            email,
            role,
            avatar,
            profile,
        } = from;
        usecases::ProfileUpdate {
            name,
            email,
            role: role.map(Into::into),
            avatar,
            profile: profile.into(),
        }
    }

    pub fn admin_profile_update(from: UpdateAdminProfile) -> usecases::AdminProfileUpdate {
        let UpdateAdminProfile {
            name,
            avatar,
            password,
        } = from;
        usecases::AdminProfileUpdate {
            name,
            avatar,
            password,
        }
    }

    pub fn new_topic(from: NewTopic) -> usecases::NewTopic {
        let NewTopic { title, description } = from;
        usecases::NewTopic { title, description }
    }

    pub fn try_topic_update(from: UpdateTopic) -> Result<usecases::TopicUpdate, e::IdParseError> {
        let UpdateTopic {
            id,
            title,
            description,
        } = from;
        Ok(usecases::TopicUpdate {
            id: id.parse()?,
            title,
            description,
        })
    }

    /// An empty parent id denotes a root comment.
    pub fn try_new_comment(from: NewComment) -> Result<usecases::NewComment, e::IdParseError> {
        let NewComment {
            topic_id,
            parent_id,
            text,
        } = from;
        let parent_id = parent_id
            .filter(|id| !id.trim().is_empty())
            .map(|id| id.parse())
            .transpose()?;
        Ok(usecases::NewComment {
            topic_id: topic_id.parse()?,
            parent_id,
            text,
        })
    }

    pub fn new_event(from: NewEvent) -> usecases::NewEvent {
        let NewEvent {
            name,
            date,
            location,
            description,
            image,
        } = from;
        usecases::NewEvent {
            name,
            date,
            location,
            description,
            image,
        }
    }

    pub fn new_job(from: NewJob) -> usecases::NewJob {
        let NewJob {
            title,
            company,
            location,
            description,
            hr_name,
            email,
        } = from;
        usecases::NewJob {
            title,
            company,
            location,
            description,
            hr_name,
            email,
        }
    }

    pub fn job_update(from: UpdateJob) -> usecases::JobUpdate {
        let UpdateJob {
            title,
            company,
            location,
            description,
            hr_name,
            email,
        } = from;
        usecases::JobUpdate {
            title,
            company,
            location,
            description,
            hr_name,
            email,
        }
    }

    pub fn new_gallery_item(from: NewGalleryItem) -> usecases::NewGalleryItem {
        let NewGalleryItem {
            image_url,
            description,
        } = from;
        usecases::NewGalleryItem {
            image_url,
            description,
        }
    }

    pub fn gallery_item_update(from: UpdateGalleryItem) -> usecases::GalleryItemUpdate {
        let UpdateGalleryItem {
            image_url,
            description,
        } = from;
        usecases::GalleryItemUpdate {
            image_url,
            description,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    type PendingReplies = std::vec::IntoIter<comment_tree::CommentNode>;

    /// Converts a whole forest without recursing into the replies.
    pub fn comment_tree(roots: Vec<comment_tree::CommentNode>) -> Vec<CommentNode> {
        let mut converted = Vec::with_capacity(roots.len());
        let mut pending_roots = roots.into_iter();
        // Path from the current root down to the node being converted
        let mut path: Vec<(CommentNode, PendingReplies)> = vec![];
        loop {
            let next = match path.last_mut() {
                Some((_, pending)) => pending.next(),
                None => pending_roots.next(),
            };
            if let Some(node) = next {
                path.push(comment_node_without_replies(node));
                continue;
            }
            match path.pop() {
                Some((node, _)) => match path.last_mut() {
                    Some((parent, _)) => parent.replies.push(node),
                    None => converted.push(node),
                },
                None => return converted,
            }
        }
    }

    fn comment_node_without_replies(
        mut from: comment_tree::CommentNode,
    ) -> (CommentNode, PendingReplies) {
        let replies = std::mem::take(&mut from.replies);
        let node = CommentNode {
            comment: from.comment.clone().into(),
            author_name: from.author_name.take(),
            author_avatar_url: std::mem::take(&mut from.author_avatar_url),
            replies: Vec::with_capacity(replies.len()),
        };
        (node, replies.into_iter())
    }

    pub fn topic(from: usecases::TopicSummary) -> Topic {
        let usecases::TopicSummary {
            topic,
            comment_count,
            creator_name,
            creator_avatar_url,
        } = from;
        let e::Topic {
            id,
            title,
            description,
            created_by,
            status,
            created_at,
        } = topic;
        Topic {
            id: id.into(),
            title,
            description,
            created_by: created_by.into(),
            status: status.into(),
            created_at: created_at.as_millis(),
            comment_count: comment_count as u64,
            creator_name,
            creator_avatar_url,
        }
    }

    pub fn author_comment((comment, topic_title): (e::Comment, Option<String>)) -> AuthorComment {
        AuthorComment {
            comment: comment.into(),
            topic_title,
        }
    }

    pub fn dashboard_counts(from: usecases::DashboardCounts) -> DashboardCounts {
        let usecases::DashboardCounts {
            alumni,
            students,
            topics,
            jobs,
            events,
            gallery_items,
        } = from;
        DashboardCounts {
            alumni: alumni as u64,
            students: students as u64,
            topics: topics as u64,
            jobs: jobs as u64,
            events: events as u64,
            gallery_items: gallery_items as u64,
        }
    }

    pub fn user_jobs((user, jobs): (e::User, Vec<e::Job>)) -> UserJobs {
        UserJobs {
            user: user.into(),
            jobs: jobs.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::avatar::AvatarUrls;
    use alumni_entities::builders::*;

    fn reply_chain(depth: usize) -> Vec<comment_tree::CommentNode> {
        let ids: Vec<_> = (0..depth).map(|_| e::Id::new()).collect();
        let comments = ids.iter().enumerate().map(|(i, id)| {
            let comment = e::Comment::build()
                .id(id.as_str())
                .topic("t")
                .author("alice")
                .text("Re")
                .created_at(i as i64);
            let comment = match i {
                0 => comment,
                _ => comment.parent(ids[i - 1].as_str()),
            };
            (comment.finish(), None::<e::Author>)
        });
        comment_tree::build_comment_tree(comments, &AvatarUrls::default())
    }

    #[test]
    fn convert_comment_forest() {
        let mut forest = reply_chain(3);
        forest.extend(reply_chain(1));
        let converted = to_json::comment_tree(forest);
        assert_eq!(2, converted.len());
        assert_eq!("Re", converted[0].comment.text);
        assert_eq!(1, converted[0].replies.len());
        assert_eq!(1, converted[0].replies[0].replies.len());
        assert!(converted[0].replies[0].replies[0].replies.is_empty());
        assert!(converted[1].replies.is_empty());
        assert_eq!(
            Some(&converted[0].comment.id),
            converted[0].replies[0].comment.parent_id.as_ref()
        );
    }

    #[test]
    fn convert_deeply_nested_comment_trees() {
        let depth = 10_000;
        let converted = to_json::comment_tree(reply_chain(depth));
        assert_eq!(1, converted.len());
        let mut node = &converted[0];
        let mut levels = 1;
        while let Some(reply) = node.replies.first() {
            node = reply;
            levels += 1;
        }
        assert_eq!(depth, levels);
        drop(converted);
    }

    #[test]
    fn empty_parent_ids_denote_root_comments() {
        let topic_id = e::Id::new();
        let new_comment = from_json::try_new_comment(NewComment {
            topic_id: topic_id.to_string(),
            parent_id: Some(" ".into()),
            text: "Hi".into(),
        })
        .unwrap();
        assert_eq!(topic_id, new_comment.topic_id);
        assert!(new_comment.parent_id.is_none());
    }

    #[test]
    fn reject_malformed_comment_ids() {
        let result = from_json::try_new_comment(NewComment {
            topic_id: e::Id::new().to_string(),
            parent_id: Some("nonexistent".into()),
            text: "Hi".into(),
        });
        assert!(result.is_err());
        let result = from_json::try_new_comment(NewComment {
            topic_id: "65d1f0c2a9b3".into(),
            parent_id: None,
            text: "Hi".into(),
        });
        assert!(result.is_err());
    }
}
