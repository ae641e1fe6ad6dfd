use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    let email = login.email.trim().to_lowercase();
    let Some(user) = repo.try_get_user_by_email(&email)? else {
        return Err(Error::Credentials);
    };
    if !user.password.verify(login.password) {
        return Err(Error::Credentials);
    }
    if user.status == ApprovalStatus::Rejected {
        return Err(Error::AccountRejected);
    }
    Ok(user)
}
