use super::*;

impl_repo!(CommentRepo {
    fn create_comment(&self, comment: &Comment) -> Result<()>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;
    fn delete_comment(&self, id: &str) -> Result<()>;
    fn delete_comments_of_topic(&self, topic_id: &str) -> Result<usize>;
    fn load_comment(&self, id: &str) -> Result<Comment>;
    fn load_comments_of_topic(&self, topic_id: &str) -> Result<Vec<(Comment, Option<Author>)>>;
    fn load_comments_of_author(&self, author_id: &str) -> Result<Vec<(Comment, Option<String>)>>;
    fn count_comments_of_topic(&self, topic_id: &str) -> Result<usize>;
});

impl<'a> From<&'a Comment> for models::NewComment<'a> {
    fn from(c: &'a Comment) -> Self {
        Self {
            id: c.id.as_str(),
            topic_id: c.topic_id.as_str(),
            author_id: c.author_id.as_str(),
            parent_id: c.parent_id.as_ref().map(Id::as_str),
            text: &c.text,
            likes: i64::from(c.likes),
            created_at: c.created_at.as_millis(),
        }
    }
}

impl From<models::CommentEntity> for Comment {
    fn from(c: models::CommentEntity) -> Self {
        let models::CommentEntity {
            rowid: _,
            id,
            topic_id,
            author_id,
            parent_id,
            text,
            likes,
            created_at,
        } = c;
        Comment {
            id: id.into(),
            topic_id: topic_id.into(),
            author_id: author_id.into(),
            parent_id: parent_id.map(Into::into),
            text,
            likes: u32::try_from(likes).unwrap_or_else(|_| {
                log::warn!("Invalid number of likes: {likes}");
                0
            }),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    diesel::insert_into(schema::forum_comment::table)
        .values(&models::NewComment::from(comment))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    use schema::forum_comment::dsl;
    let count = diesel::update(dsl::forum_comment.filter(dsl::id.eq(comment.id.as_str())))
        .set(&models::NewComment::from(comment))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_comment(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::forum_comment::dsl;
    let count = diesel::delete(dsl::forum_comment.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_comments_of_topic(conn: &mut SqliteConnection, topic_id: &str) -> Result<usize> {
    use schema::forum_comment::dsl;
    diesel::delete(dsl::forum_comment.filter(dsl::topic_id.eq(topic_id)))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::forum_comment::dsl;
    Ok(dsl::forum_comment
        .filter(dsl::id.eq(id))
        .first::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn load_comments_of_topic(
    conn: &mut SqliteConnection,
    topic_id: &str,
) -> Result<Vec<(Comment, Option<Author>)>> {
    use schema::{forum_comment::dsl as c_dsl, users::dsl as u_dsl};
    Ok(schema::forum_comment::table
        .left_join(schema::users::table.on(u_dsl::id.eq(c_dsl::author_id)))
        .select((
            schema::forum_comment::all_columns,
            (u_dsl::name, u_dsl::avatar).nullable(),
        ))
        .filter(c_dsl::topic_id.eq(topic_id))
        .order_by((c_dsl::created_at, c_dsl::rowid))
        .load::<(models::CommentEntity, Option<(String, String)>)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(comment, author)| {
            let author = author.map(|(name, avatar)| Author { name, avatar });
            (comment.into(), author)
        })
        .collect())
}

fn load_comments_of_author(
    conn: &mut SqliteConnection,
    author_id: &str,
) -> Result<Vec<(Comment, Option<String>)>> {
    use schema::{forum_comment::dsl as c_dsl, forum_topic::dsl as t_dsl};
    Ok(schema::forum_comment::table
        .left_join(schema::forum_topic::table.on(t_dsl::id.eq(c_dsl::topic_id)))
        .select((schema::forum_comment::all_columns, t_dsl::title.nullable()))
        .filter(c_dsl::author_id.eq(author_id))
        .order_by((c_dsl::created_at.desc(), c_dsl::rowid.desc()))
        .load::<(models::CommentEntity, Option<String>)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(comment, title)| (comment.into(), title))
        .collect())
}

fn count_comments_of_topic(conn: &mut SqliteConnection, topic_id: &str) -> Result<usize> {
    use schema::forum_comment::dsl;
    Ok(dsl::forum_comment
        .select(diesel::dsl::count(dsl::rowid))
        .filter(dsl::topic_id.eq(topic_id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
