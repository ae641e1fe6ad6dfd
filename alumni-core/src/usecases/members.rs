use super::{authorize_admin, prelude::*};
use crate::repositories::Error as RepoError;

pub fn list_members<R: UserRepo>(repo: &R, role: Role) -> Result<Vec<User>> {
    debug_assert!(role.is_member());
    Ok(repo.get_users_by_role(role)?)
}

/// Users with a different role are treated as nonexistent.
pub fn get_member<R: UserRepo>(repo: &R, role: Role, user_id: &str) -> Result<User> {
    let user = repo.get_user(user_id)?;
    if user.role != role {
        return Err(Error::Repo(RepoError::NotFound));
    }
    Ok(user)
}

pub fn review_member<R: UserRepo>(
    repo: &R,
    account: &User,
    role: Role,
    user_id: &str,
    status: ApprovalStatus,
) -> Result<User> {
    authorize_admin(account)?;
    let mut user = get_member(repo, role, user_id)?;
    user.status = status;
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    log::info!("Changed status of {} {} to {}", user.role, user.id, status);
    Ok(user)
}

pub fn delete_member<R: UserRepo>(repo: &R, account: &User, role: Role, user_id: &str) -> Result<()> {
    authorize_admin(account)?;
    let user = get_member(repo, role, user_id)?;
    repo.delete_user(user.id.as_str())?;
    log::info!("Deleted {} {}", user.role, user.id);
    Ok(())
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

    #[test]
    fn list_members_by_role() {
        let db = MockDb::default();
        create_new_user(&db, new_user("s1@bar.de", Role::Student)).unwrap();
        create_new_user(&db, new_user("s2@bar.de", Role::Student)).unwrap();
        create_new_user(&db, new_user("a1@bar.de", Role::Alumni)).unwrap();
        assert_eq!(2, list_members(&db, Role::Student).unwrap().len());
        assert_eq!(1, list_members(&db, Role::Alumni).unwrap().len());
    }

    #[test]
    fn members_of_another_role_are_not_found() {
        let db = MockDb::default();
        let student = create_new_user(&db, new_user("s@bar.de", Role::Student)).unwrap();
        assert!(get_member(&db, Role::Student, student.id.as_str()).is_ok());
        assert!(matches!(
            get_member(&db, Role::Alumni, student.id.as_str()),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn only_admins_approve_members() {
        let db = MockDb::default();
        let alumnus = create_new_user(&db, new_user("a@bar.de", Role::Alumni)).unwrap();
        let admin = create_new_user(&db, new_user("admin@bar.de", Role::Admin)).unwrap();
        assert!(matches!(
            review_member(
                &db,
                &alumnus,
                Role::Alumni,
                alumnus.id.as_str(),
                ApprovalStatus::Approved
            ),
            Err(Error::Forbidden)
        ));
        let approved = review_member(
            &db,
            &admin,
            Role::Alumni,
            alumnus.id.as_str(),
            ApprovalStatus::Approved,
        )
        .unwrap();
        assert_eq!(ApprovalStatus::Approved, approved.status);
        assert_eq!(
            ApprovalStatus::Approved,
            db.get_user(alumnus.id.as_str()).unwrap().status
        );
    }

    #[test]
    fn delete_a_member() {
        let db = MockDb::default();
        let student = create_new_user(&db, new_user("s@bar.de", Role::Student)).unwrap();
        let admin = create_new_user(&db, new_user("admin@bar.de", Role::Admin)).unwrap();
        assert!(delete_member(&db, &admin, Role::Alumni, student.id.as_str()).is_err());
        delete_member(&db, &admin, Role::Student, student.id.as_str()).unwrap();
        assert!(db.try_get_user(student.id.as_str()).unwrap().is_none());
    }
}
