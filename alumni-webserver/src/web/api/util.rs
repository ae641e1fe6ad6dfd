use super::*;

#[get("/check")]
pub fn get_check() -> &'static str {
    "The alumni portal API is up and running"
}

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}
