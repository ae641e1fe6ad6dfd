use super::*;

impl_repo!(JobRepo {
    fn create_job(&self, job: &Job) -> Result<()>;
    fn update_job(&self, job: &Job) -> Result<()>;
    fn delete_job(&self, id: &str) -> Result<()>;
    fn get_job(&self, id: &str) -> Result<Job>;
    fn all_jobs(&self) -> Result<Vec<(Job, Option<String>)>>;
    fn jobs_posted_by(&self, user_id: &str) -> Result<Vec<Job>>;
    fn count_jobs(&self) -> Result<usize>;
});

impl<'a> From<&'a Job> for models::NewJob<'a> {
    fn from(j: &'a Job) -> Self {
        Self {
            id: j.id.as_str(),
            title: &j.title,
            company: &j.company,
            location: &j.location,
            description: &j.description,
            hr_name: &j.hr_name,
            email: &j.email,
            posted_by: j.posted_by.as_str(),
            created_at: j.created_at.as_millis(),
        }
    }
}

impl From<models::JobEntity> for Job {
    fn from(j: models::JobEntity) -> Self {
        let models::JobEntity {
            rowid: _,
            id,
            title,
            company,
            location,
            description,
            hr_name,
            email,
            posted_by,
            created_at,
        } = j;
        Job {
            id: id.into(),
            title,
            company,
            location,
            description,
            hr_name,
            email,
            posted_by: posted_by.into(),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

fn create_job(conn: &mut SqliteConnection, job: &Job) -> Result<()> {
    diesel::insert_into(schema::job::table)
        .values(&models::NewJob::from(job))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_job(conn: &mut SqliteConnection, job: &Job) -> Result<()> {
    use schema::job::dsl;
    let count = diesel::update(dsl::job.filter(dsl::id.eq(job.id.as_str())))
        .set(&models::NewJob::from(job))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_job(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::job::dsl;
    let count = diesel::delete(dsl::job.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_job(conn: &mut SqliteConnection, id: &str) -> Result<Job> {
    use schema::job::dsl;
    Ok(dsl::job
        .filter(dsl::id.eq(id))
        .first::<models::JobEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_jobs(conn: &mut SqliteConnection) -> Result<Vec<(Job, Option<String>)>> {
    use schema::{job::dsl as j_dsl, users::dsl as u_dsl};
    Ok(schema::job::table
        .left_join(schema::users::table.on(u_dsl::id.eq(j_dsl::posted_by)))
        .select((schema::job::all_columns, u_dsl::name.nullable()))
        .order_by((j_dsl::created_at.desc(), j_dsl::rowid.desc()))
        .load::<(models::JobEntity, Option<String>)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(job, poster)| (job.into(), poster))
        .collect())
}

fn jobs_posted_by(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Job>> {
    use schema::job::dsl;
    Ok(dsl::job
        .filter(dsl::posted_by.eq(user_id))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::JobEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_jobs(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::job::dsl;
    Ok(dsl::job
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
