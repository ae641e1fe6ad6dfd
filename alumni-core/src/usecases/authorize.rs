use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Resolves the account of an authenticated request.
pub fn authorize_user_by_id<R: UserRepo>(repo: &R, user_id: &str) -> Result<User> {
    match repo.get_user(user_id) {
        Ok(user) => Ok(user),
        Err(RepoError::NotFound) => Err(Error::Unauthorized),
        Err(err) => Err(Error::Repo(err)),
    }
}

pub fn authorize_admin(account: &User) -> Result<()> {
    if account.role == Role::Admin {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

/// Owners may modify their own content, admins may modify everything.
pub fn authorize_owner_or_admin(account: &User, owner_id: &Id) -> Result<()> {
    if &account.id == owner_id {
        return Ok(());
    }
    authorize_admin(account)
}
