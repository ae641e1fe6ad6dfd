use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub alumni        : usize,
    pub students      : usize,
    pub topics        : usize,
    pub jobs          : usize,
    pub events        : usize,
    pub gallery_items : usize,
}

pub fn dashboard_counts<R>(repo: &R) -> Result<DashboardCounts>
where
    R: UserRepo + TopicRepo + JobRepo + EventRepo + GalleryRepo,
{
    Ok(DashboardCounts {
        alumni: repo.count_users_by_role(Role::Alumni)?,
        students: repo.count_users_by_role(Role::Student)?,
        topics: repo.count_topics()?,
        jobs: repo.count_jobs()?,
        events: repo.count_events()?,
        gallery_items: repo.count_gallery_items()?,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            tests::{new_user, MockDb},
            *,
        },
        *,
    };
    use alumni_entities::builders::*;

    #[test]
    fn count_everything() {
        let db = MockDb::default();
        assert_eq!(DashboardCounts::default(), dashboard_counts(&db).unwrap());
        let alumnus = create_new_user(&db, new_user("a@bar.de", Role::Alumni)).unwrap();
        create_new_user(&db, new_user("s1@bar.de", Role::Student)).unwrap();
        create_new_user(&db, new_user("s2@bar.de", Role::Student)).unwrap();
        create_new_user(&db, new_user("admin@bar.de", Role::Admin)).unwrap();
        db.create_topic(&Topic::build().created_by(alumnus.id.as_str()).finish())
            .unwrap();
        let counts = dashboard_counts(&db).unwrap();
        assert_eq!(1, counts.alumni);
        assert_eq!(2, counts.students);
        assert_eq!(1, counts.topics);
        assert_eq!(0, counts.jobs);
    }
}
