use super::{authorize_owner_or_admin, prelude::*};
use crate::util::validate::Validate;

#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub hr_name: String,
    pub email: String,
}

pub fn create_job<R: JobRepo>(repo: &R, account: &User, new_job: NewJob) -> Result<Job> {
    let NewJob {
        title,
        company,
        location,
        description,
        hr_name,
        email,
    } = new_job;
    let job = Job {
        id: Id::new(),
        title: title.trim().to_owned(),
        company: company.trim().to_owned(),
        location,
        description,
        hr_name,
        email: email.trim().to_owned(),
        posted_by: account.id.clone(),
        created_at: Timestamp::now(),
    };
    job.validate()?;
    repo.create_job(&job)?;
    Ok(job)
}

/// Only non-empty fields replace the stored values.
#[derive(Debug, Clone, Default)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub hr_name: Option<String>,
    pub email: Option<String>,
}

pub fn update_job<R: JobRepo>(
    repo: &R,
    account: &User,
    job_id: &str,
    update: JobUpdate,
) -> Result<Job> {
    let mut job = repo.get_job(job_id)?;
    authorize_owner_or_admin(account, &job.posted_by)?;
    let JobUpdate {
        title,
        company,
        location,
        description,
        hr_name,
        email,
    } = update;
    let replace = |field: &mut String, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            *field = value;
        }
    };
    replace(&mut job.title, title);
    replace(&mut job.company, company);
    replace(&mut job.location, location);
    replace(&mut job.description, description);
    replace(&mut job.hr_name, hr_name);
    replace(&mut job.email, email);
    job.validate()?;
    repo.update_job(&job)?;
    Ok(job)
}

pub fn delete_job<R: JobRepo>(repo: &R, account: &User, job_id: &str) -> Result<()> {
    let job = repo.get_job(job_id)?;
    authorize_owner_or_admin(account, &job.posted_by)?;
    repo.delete_job(job.id.as_str())?;
    Ok(())
}

/// A user together with all jobs the user posted.
pub fn jobs_of_user<R>(repo: &R, user_id: &str) -> Result<(User, Vec<Job>)>
where
    R: UserRepo + JobRepo,
{
    let user = repo.get_user(user_id)?;
    let jobs = repo.jobs_posted_by(user.id.as_str())?;
    Ok((user, jobs))
}
