use super::*;
use alumni_entities as e;

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Student => UserRole::Student,
            Alumni => UserRole::Alumni,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Student => Student,
            UserRole::Alumni => Alumni,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::user::ApprovalStatus> for ApprovalStatus {
    fn from(from: e::user::ApprovalStatus) -> Self {
        use e::user::ApprovalStatus::*;
        match from {
            Pending => ApprovalStatus::Pending,
            Approved => ApprovalStatus::Approved,
            Rejected => ApprovalStatus::Rejected,
        }
    }
}

impl From<ApprovalStatus> for e::user::ApprovalStatus {
    fn from(from: ApprovalStatus) -> Self {
        use e::user::ApprovalStatus::*;
        match from {
            ApprovalStatus::Pending => Pending,
            ApprovalStatus::Approved => Approved,
            ApprovalStatus::Rejected => Rejected,
        }
    }
}

impl From<e::forum::TopicStatus> for TopicStatus {
    fn from(from: e::forum::TopicStatus) -> Self {
        use e::forum::TopicStatus::*;
        match from {
            Pending => TopicStatus::Pending,
            Approved => TopicStatus::Approved,
            Rejected => TopicStatus::Rejected,
        }
    }
}

impl From<TopicStatus> for e::forum::TopicStatus {
    fn from(from: TopicStatus) -> Self {
        use e::forum::TopicStatus::*;
        match from {
            TopicStatus::Pending => Pending,
            TopicStatus::Approved => Approved,
            TopicStatus::Rejected => Rejected,
        }
    }
}

impl From<e::user::Profile> for Profile {
    fn from(from: e::user::Profile) -> Self {
        let e::user::Profile {
            phone_number,
            enrollment_number,
            degree,
            branch,
            graduation_year,
            skills,
            areas_of_interest,
            job_title,
            experience,
            company,
            social_links,
        } = from;
        let e::user::SocialLinks { linkedin, website } = social_links;
        Self {
            phone_number,
            enrollment_number,
            degree,
            branch,
            graduation_year,
            skills,
            areas_of_interest,
            job_title,
            experience,
            company,
            social_links: SocialLinks { linkedin, website },
        }
    }
}

impl From<Profile> for e::user::Profile {
    fn from(from: Profile) -> Self {
        let Profile {
            phone_number,
            enrollment_number,
            degree,
            branch,
            graduation_year,
            skills,
            areas_of_interest,
            job_title,
            experience,
            company,
            social_links,
        } = from;
        let SocialLinks { linkedin, website } = social_links;
        Self {
            phone_number,
            enrollment_number,
            degree,
            branch,
            graduation_year,
            skills,
            areas_of_interest,
            job_title,
            experience,
            company,
            social_links: e::user::SocialLinks { linkedin, website },
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            password: _,
            role,
            status,
            avatar,
            profile,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            name,
            email,
            role: role.into(),
            status: status.into(),
            avatar,
            profile: profile.into(),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            topic_id,
            author_id,
            parent_id,
            text,
            likes,
            created_at,
        } = from;
        Self {
            id: id.into(),
            topic_id: topic_id.into(),
            author_id: author_id.into(),
            parent_id: parent_id.map(Into::into),
            text,
            likes,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let e::event::Event {
            id,
            name,
            date,
            location,
            description,
            status,
            image,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            date: e::time::format_date(date),
            location,
            description,
            status,
            image,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::event::Registration> for Registration {
    fn from(from: e::event::Registration) -> Self {
        let e::event::Registration {
            id,
            user_id,
            event_id,
            event_name,
            event_date,
            name,
            email,
            role,
            graduation_year,
            phone_number,
            joined_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            event_id: event_id.into(),
            event_name,
            event_date: e::time::format_date(event_date),
            name,
            email,
            role: role.into(),
            graduation_year,
            phone_number,
            joined_at: joined_at.as_millis(),
        }
    }
}

impl From<e::job::Job> for Job {
    fn from(from: e::job::Job) -> Self {
        let e::job::Job {
            id,
            title,
            company,
            location,
            description,
            hr_name,
            email,
            posted_by,
            created_at,
        } = from;
        Self {
            id: id.into(),
            title,
            company,
            location,
            description,
            hr_name,
            email,
            posted_by: posted_by.into(),
            posted_by_name: None,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<(e::job::Job, Option<String>)> for Job {
    fn from((job, posted_by_name): (e::job::Job, Option<String>)) -> Self {
        Self {
            posted_by_name,
            ..job.into()
        }
    }
}

impl From<e::gallery::GalleryItem> for GalleryItem {
    fn from(from: e::gallery::GalleryItem) -> Self {
        let e::gallery::GalleryItem {
            id,
            image_url,
            description,
            uploaded_by,
            uploader_name,
            created_at,
            updated_at,
        } = from;
        Self {
            id: id.into(),
            image_url,
            description,
            uploaded_by: uploaded_by.into(),
            uploader_name,
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
        }
    }
}
