use super::*;

#[get("/forums")]
pub fn get_topics(db: sqlite::Connections, cfg: &State<Cfg>) -> Result<Vec<json::Topic>> {
    let topics = usecases::load_topic_summaries(&db.shared()?, &cfg.avatar_urls)?;
    Ok(Json(topics.into_iter().map(to_json::topic).collect()))
}

#[get("/forums/<id>")]
pub fn get_topic(db: sqlite::Connections, cfg: &State<Cfg>, id: String) -> Result<json::Topic> {
    let id: Id = id.parse()?;
    let topic = usecases::load_topic_summary(&db.shared()?, &cfg.avatar_urls, id.as_str())?;
    Ok(Json(to_json::topic(topic)))
}

#[get("/forum/user/<user_id>")]
pub fn get_topics_of_user(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    user_id: String,
) -> Result<Vec<json::Topic>> {
    let user_id: Id = user_id.parse()?;
    let topics =
        usecases::load_topic_summaries_of_user(&db.shared()?, &cfg.avatar_urls, user_id.as_str())?;
    Ok(Json(topics.into_iter().map(to_json::topic).collect()))
}

#[post("/manageforum", format = "application/json", data = "<topic>")]
pub fn post_topic(
    db: sqlite::Connections,
    account: Account,
    topic: JsonResult<json::NewTopic>,
) -> Result<String> {
    let new_topic = from_json::new_topic(topic?.into_inner());
    let topic = flows::create_topic(&db, account.id(), new_topic)?;
    Ok(Json(topic.id.into()))
}

#[put("/manageforum", format = "application/json", data = "<topic>")]
pub fn put_topic(
    db: sqlite::Connections,
    account: Account,
    topic: JsonResult<json::UpdateTopic>,
) -> Result<()> {
    let update = from_json::try_topic_update(topic?.into_inner())?;
    flows::update_topic(&db, account.id(), update)?;
    Ok(Json(()))
}

#[put("/forum/status/<id>", format = "application/json", data = "<status>")]
pub fn put_topic_status(
    db: sqlite::Connections,
    account: Account,
    id: String,
    status: JsonResult<json::UpdateTopicStatus>,
) -> Result<()> {
    let id: Id = id.parse()?;
    let json::UpdateTopicStatus { status } = status?.into_inner();
    flows::change_topic_status(&db, account.id(), id.as_str(), status.into())?;
    Ok(Json(()))
}

/// Deletes the topic together with all of its comments.
#[delete("/forum/<id>")]
pub fn delete_topic(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    let id: Id = id.parse()?;
    flows::delete_topic(&db, account.id(), id.as_str())?;
    Ok(Json(()))
}
