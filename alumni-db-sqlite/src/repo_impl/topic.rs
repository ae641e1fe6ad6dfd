use super::*;

impl_repo!(TopicRepo {
    fn create_topic(&self, topic: &Topic) -> Result<()>;
    fn update_topic(&self, topic: &Topic) -> Result<()>;
    fn delete_topic(&self, id: &str) -> Result<()>;
    fn get_topic(&self, id: &str) -> Result<Topic>;
    fn all_topics(&self) -> Result<Vec<Topic>>;
    fn topics_created_by(&self, user_id: &str) -> Result<Vec<Topic>>;
    fn count_topics(&self) -> Result<usize>;
});

impl<'a> From<&'a Topic> for models::NewTopic<'a> {
    fn from(t: &'a Topic) -> Self {
        Self {
            id: t.id.as_str(),
            title: &t.title,
            description: &t.description,
            created_by: t.created_by.as_str(),
            status: topic_status_into_i16(t.status),
            created_at: t.created_at.as_millis(),
        }
    }
}

fn load_topic(entity: models::TopicEntity) -> Result<Topic> {
    let models::TopicEntity {
        rowid: _,
        id,
        title,
        description,
        created_by,
        status,
        created_at,
    } = entity;
    Ok(Topic {
        id: id.into(),
        title,
        description,
        created_by: created_by.into(),
        status: load_topic_status(status)?,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn create_topic(conn: &mut SqliteConnection, topic: &Topic) -> Result<()> {
    diesel::insert_into(schema::forum_topic::table)
        .values(&models::NewTopic::from(topic))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_topic(conn: &mut SqliteConnection, topic: &Topic) -> Result<()> {
    use schema::forum_topic::dsl;
    let count = diesel::update(dsl::forum_topic.filter(dsl::id.eq(topic.id.as_str())))
        .set(&models::NewTopic::from(topic))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_topic(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::forum_topic::dsl;
    let count = diesel::delete(dsl::forum_topic.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_topic(conn: &mut SqliteConnection, id: &str) -> Result<Topic> {
    use schema::forum_topic::dsl;
    let entity = dsl::forum_topic
        .filter(dsl::id.eq(id))
        .first::<models::TopicEntity>(conn)
        .map_err(from_diesel_err)?;
    load_topic(entity)
}

fn all_topics(conn: &mut SqliteConnection) -> Result<Vec<Topic>> {
    use schema::forum_topic::dsl;
    dsl::forum_topic
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::TopicEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_topic)
        .collect()
}

fn topics_created_by(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Topic>> {
    use schema::forum_topic::dsl;
    dsl::forum_topic
        .filter(dsl::created_by.eq(user_id))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::TopicEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_topic)
        .collect()
}

fn count_topics(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::forum_topic::dsl;
    Ok(dsl::forum_topic
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
