use super::{authorize_admin, authorize_owner_or_admin, prelude::*};
use crate::repositories::Error as RepoError;

/// Public profile of a student or alumnus.
pub fn get_member_profile<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    let user = repo.get_user(user_id)?;
    if !user.role.is_member() {
        return Err(Error::Forbidden);
    }
    Ok(user)
}

#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    /// Must match the stored email if present.
    pub email: Option<String>,
    /// Must match the stored role if present.
    pub role: Option<Role>,
    /// Keeps the stored avatar if absent or empty.
    pub avatar: Option<String>,
    pub profile: Profile,
}

pub fn update_profile<R: UserRepo>(
    repo: &R,
    account: &User,
    user_id: &str,
    update: ProfileUpdate,
) -> Result<User> {
    let mut user = repo.get_user(user_id)?;
    authorize_owner_or_admin(account, &user.id)?;
    let ProfileUpdate {
        name,
        email,
        role,
        avatar,
        profile,
    } = update;
    if email.is_some_and(|email| !email.trim().eq_ignore_ascii_case(&user.email)) {
        log::debug!("Refusing to change the email of user {}", user.id);
        return Err(Error::Forbidden);
    }
    if role.is_some_and(|role| role != user.role) {
        log::debug!("Refusing to change the role of user {}", user.id);
        return Err(Error::Forbidden);
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Name);
    }
    user.name = name.to_owned();
    if let Some(avatar) = avatar.filter(|a| !a.is_empty()) {
        user.avatar = avatar;
    }
    user.profile = profile;
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    Ok(user)
}

pub fn update_avatar<R: UserRepo>(
    repo: &R,
    account: &User,
    user_id: &str,
    avatar: String,
) -> Result<User> {
    let mut user = repo.get_user(user_id)?;
    authorize_owner_or_admin(account, &user.id)?;
    if avatar.trim().is_empty() {
        return Err(Error::Image);
    }
    user.avatar = avatar;
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    Ok(user)
}

pub fn change_password<R: UserRepo>(
    repo: &R,
    account: &User,
    user_id: &str,
    new_password: &str,
) -> Result<()> {
    let mut user = repo.get_user(user_id)?;
    authorize_owner_or_admin(account, &user.id)?;
    user.password = new_password.parse()?;
    user.updated_at = Timestamp::now();
    repo.update_user(&user)?;
    log::info!("Changed password of user {}", user.id);
    Ok(())
}

pub fn get_admin_profile<R: UserRepo>(repo: &R, account: &User, admin_id: &str) -> Result<User> {
    authorize_admin(account)?;
    let admin = repo.get_user(admin_id)?;
    if admin.role != Role::Admin {
        return Err(Error::Repo(RepoError::NotFound));
    }
    Ok(admin)
}

#[derive(Debug, Clone, Default)]
pub struct AdminProfileUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub password: Option<String>,
}

/// Admins may only modify their own profile.
pub fn update_admin_profile<R: UserRepo>(
    repo: &R,
    account: &User,
    admin_id: &str,
    update: AdminProfileUpdate,
) -> Result<User> {
    let mut admin = get_admin_profile(repo, account, admin_id)?;
    if admin.id != account.id {
        return Err(Error::Forbidden);
    }
    let AdminProfileUpdate {
        name,
        avatar,
        password,
    } = update;
    if let Some(name) = name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        admin.name = name.to_owned();
    }
    if let Some(avatar) = avatar.filter(|a| !a.is_empty()) {
        admin.avatar = avatar;
    }
    if let Some(password) = password.filter(|p| !p.is_empty()) {
        admin.password = password.parse()?;
    }
    admin.updated_at = Timestamp::now();
    repo.update_user(&admin)?;
    Ok(admin)
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

    fn update(name: &str) -> ProfileUpdate {
        ProfileUpdate {
            name: name.into(),
            email: None,
            role: None,
            avatar: None,
            profile: Profile::default(),
        }
    }

    #[test]
    fn only_members_have_public_profiles() {
        let db = MockDb::default();
        let student = create_new_user(&db, new_user("s@bar.de", Role::Student)).unwrap();
        let admin = create_new_user(&db, new_user("a@bar.de", Role::Admin)).unwrap();
        assert!(get_member_profile(&db, student.id.as_str()).is_ok());
        assert!(matches!(
            get_member_profile(&db, admin.id.as_str()),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            get_member_profile(&db, "missing"),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn update_own_profile() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("s@bar.de", Role::Alumni)).unwrap();
        let mut up = update("Alice Smith");
        up.email = Some("S@bar.de".into());
        up.role = Some(Role::Alumni);
        up.profile.skills = vec!["rust".into(), "sql".into()];
        up.profile.company = Some("ACME".into());
        let updated = update_profile(&db, &user, user.id.as_str(), up).unwrap();
        assert_eq!("Alice Smith", updated.name);
        assert_eq!(DEFAULT_AVATAR, updated.avatar);
        let stored = db.get_user(user.id.as_str()).unwrap();
        assert_eq!(vec!["rust", "sql"], stored.profile.skills);
        assert_eq!(Some("ACME"), stored.profile.company.as_deref());
    }

    #[test]
    fn email_and_role_cannot_be_changed() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("s@bar.de", Role::Student)).unwrap();
        let mut up = update("Alice");
        up.email = Some("other@bar.de".into());
        assert!(matches!(
            update_profile(&db, &user, user.id.as_str(), up),
            Err(Error::Forbidden)
        ));
        let mut up = update("Alice");
        up.role = Some(Role::Admin);
        assert!(matches!(
            update_profile(&db, &user, user.id.as_str(), up),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn profiles_of_others_cannot_be_changed() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("s@bar.de", Role::Student)).unwrap();
        let other = create_new_user(&db, new_user("o@bar.de", Role::Student)).unwrap();
        assert!(matches!(
            update_profile(&db, &other, user.id.as_str(), update("Eve")),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            change_password(&db, &other, user.id.as_str(), "hijacked"),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn change_own_password() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("s@bar.de", Role::Student)).unwrap();
        assert!(matches!(
            change_password(&db, &user, user.id.as_str(), "short"),
            Err(Error::Password)
        ));
        change_password(&db, &user, user.id.as_str(), "secret2").unwrap();
        let stored = db.get_user(user.id.as_str()).unwrap();
        assert!(stored.password.verify("secret2"));
    }

    #[test]
    fn update_admin_profile_keeps_missing_fields() {
        let db = MockDb::default();
        let admin = create_new_user(&db, new_user("a@bar.de", Role::Admin)).unwrap();
        let up = AdminProfileUpdate {
            name: None,
            avatar: Some("uploads/admin.png".into()),
            password: None,
        };
        let updated = update_admin_profile(&db, &admin, admin.id.as_str(), up).unwrap();
        assert_eq!("Alice", updated.name);
        assert_eq!("uploads/admin.png", updated.avatar);
        assert!(updated.password.verify("secret1"));
    }
}
