use super::*;

#[get("/job")]
pub fn get_jobs(db: sqlite::Connections) -> Result<Vec<json::Job>> {
    let jobs = db.shared()?.all_jobs()?;
    Ok(Json(jobs.into_iter().map(Into::into).collect()))
}

#[get("/job/profile/<user_id>")]
pub fn get_jobs_of_user(db: sqlite::Connections, user_id: String) -> Result<json::UserJobs> {
    let user_id: Id = user_id.parse()?;
    let user_jobs = usecases::jobs_of_user(&db.shared()?, user_id.as_str())?;
    Ok(Json(to_json::user_jobs(user_jobs)))
}

#[post("/job", format = "application/json", data = "<job>")]
pub fn post_job(
    db: sqlite::Connections,
    account: Account,
    job: JsonResult<json::NewJob>,
) -> Result<json::Job> {
    let new_job = from_json::new_job(job?.into_inner());
    let job = flows::create_job(&db, account.id(), new_job)?;
    Ok(Json(job.into()))
}

#[put("/job/<id>", format = "application/json", data = "<update>")]
pub fn put_job(
    db: sqlite::Connections,
    account: Account,
    id: String,
    update: JsonResult<json::UpdateJob>,
) -> Result<json::Job> {
    let id: Id = id.parse()?;
    let update = from_json::job_update(update?.into_inner());
    let job = flows::update_job(&db, account.id(), id.as_str(), update)?;
    Ok(Json(job.into()))
}

#[delete("/job/<id>")]
pub fn delete_job(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    let id: Id = id.parse()?;
    flows::delete_job(&db, account.id(), id.as_str())?;
    Ok(Json(()))
}
