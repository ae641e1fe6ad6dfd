use super::*;

pub fn create_job(
    connections: &sqlite::Connections,
    account_id: &str,
    new_job: usecases::NewJob,
) -> Result<Job> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::create_job(conn, account, new_job)
    })
}

pub fn update_job(
    connections: &sqlite::Connections,
    account_id: &str,
    job_id: &str,
    update: usecases::JobUpdate,
) -> Result<Job> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::update_job(conn, account, job_id, update)
    })
}

pub fn delete_job(connections: &sqlite::Connections, account_id: &str, job_id: &str) -> Result<()> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::delete_job(conn, account, job_id)
    })
}
