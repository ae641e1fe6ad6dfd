use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub profile: Profile,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let NewUser {
        name,
        email,
        password,
        role,
        profile,
    } = u;
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let email = email.trim().to_lowercase();
    if !validate::is_valid_email(&email) {
        return Err(Error::Email);
    }
    let password = password.parse::<Password>()?;
    if repo.try_get_user_by_email(&email)?.is_some() {
        return Err(Error::UserExists);
    }
    // Admins don't need to be approved by another admin
    let status = match role {
        Role::Admin => ApprovalStatus::Approved,
        Role::Student | Role::Alumni => ApprovalStatus::Pending,
    };
    let now = Timestamp::now();
    let new_user = User {
        id: Id::new(),
        name,
        email,
        password,
        role,
        status,
        avatar: DEFAULT_AVATAR.to_owned(),
        profile,
        created_at: now,
        updated_at: now,
    };
    log::debug!(
        "Creating new user: email = {}, role = {}",
        new_user.email,
        new_user.role
    );
    repo.create_user(&new_user)?;
    Ok(new_user)
}

/// Self-registration is restricted to students and alumni.
pub fn register_member<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    if !u.role.is_member() {
        return Err(Error::Role);
    }
    create_new_user(repo, u)
}
