use super::*;

fn comment_tree(
    db: &sqlite::Connections,
    cfg: &Cfg,
    topic_id: &str,
) -> Result<Vec<json::CommentNode>> {
    let topic_id: Id = topic_id.parse()?;
    let tree = usecases::load_comment_tree(&db.shared()?, topic_id.as_str(), &cfg.avatar_urls)?;
    Ok(Json(to_json::comment_tree(tree)))
}

#[get("/forums/<id>/comments")]
pub fn get_comment_tree(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    id: String,
) -> Result<Vec<json::CommentNode>> {
    comment_tree(&db, cfg, &id)
}

#[post("/topiccomments", format = "application/json", data = "<topic>")]
pub fn post_topic_comments(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    topic: JsonResult<json::TopicComments>,
) -> Result<Vec<json::CommentNode>> {
    let json::TopicComments { topic_id } = topic?.into_inner();
    comment_tree(&db, cfg, &topic_id)
}

#[get("/comment/user/<user_id>")]
pub fn get_comments_of_user(
    db: sqlite::Connections,
    user_id: String,
) -> Result<Vec<json::AuthorComment>> {
    let user_id: Id = user_id.parse()?;
    let comments = usecases::load_comments_of_author(&db.shared()?, user_id.as_str())?;
    Ok(Json(
        comments.into_iter().map(to_json::author_comment).collect(),
    ))
}

#[post("/view_forum", format = "application/json", data = "<comment>")]
pub fn post_comment(
    db: sqlite::Connections,
    account: Account,
    comment: JsonResult<json::NewComment>,
) -> Result<json::Comment> {
    let mut new_comment = from_json::try_new_comment(comment?.into_inner())?;
    new_comment.parent_id = None;
    let comment = flows::add_comment(&db, account.id(), new_comment)?;
    Ok(Json(comment.into()))
}

#[post("/reply", format = "application/json", data = "<comment>")]
pub fn post_reply(
    db: sqlite::Connections,
    account: Account,
    comment: JsonResult<json::NewComment>,
) -> result::Result<status::Created<Json<json::Comment>>, ApiError> {
    let new_comment = from_json::try_new_comment(comment?.into_inner())?;
    let comment = flows::add_comment(&db, account.id(), new_comment)?;
    let location = format!("/view_forum/{}", comment.id);
    Ok(status::Created::new(location).body(Json(comment.into())))
}

#[put("/view_forum/<id>", format = "application/json", data = "<edit>")]
pub fn put_comment(
    db: sqlite::Connections,
    account: Account,
    id: String,
    edit: JsonResult<json::EditComment>,
) -> Result<json::Comment> {
    let id: Id = id.parse()?;
    let json::EditComment { text } = edit?.into_inner();
    let comment = flows::edit_comment(&db, account.id(), id.as_str(), &text)?;
    Ok(Json(comment.into()))
}

#[post("/view_forum/<id>/like")]
pub fn post_like(db: sqlite::Connections, id: String) -> Result<json::Comment> {
    let id: Id = id.parse()?;
    let comment = flows::like_comment(&db, id.as_str())?;
    Ok(Json(comment.into()))
}

#[delete("/view_forum/<id>")]
pub fn delete_comment(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    let id: Id = id.parse()?;
    flows::delete_comment(&db, account.id(), id.as_str())?;
    Ok(Json(()))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn reply(client: &Client, token: &str, topic_id: &Id, parent_id: Option<&str>, text: &str) -> Id {
        let parent = parent_id
            .map(|id| format!(r#","parent_id":"{id}""#))
            .unwrap_or_default();
        let res = client
            .post("/reply")
            .header(ContentType::JSON)
            .header(bearer(token))
            .body(format!(
                r#"{{"topic_id":"{topic_id}"{parent},"text":"{text}"}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::Created);
        json_body(res)["id"].as_str().unwrap().parse().unwrap()
    }

    fn comment_tree(client: &Client, topic_id: &Id) -> serde_json::Value {
        let res = client.get(format!("/forums/{topic_id}/comments")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        test_json(&res);
        json_body(res)
    }

    #[test]
    fn nest_replies_below_their_parents() {
        let (client, db) = setup();
        let mut alice = create_user(&db, "alice@example.com", Role::Alumni);
        alice.avatar = "alice.png".into();
        db.exclusive().unwrap().update_user(&alice).unwrap();
        create_user(&db, "bob@example.com", Role::Student);
        let alice_token = login(&client, "alice@example.com");
        let bob_token = login(&client, "bob@example.com");
        let topic_id = create_topic(&client, &alice_token, "Reunion");

        let c1 = reply(&client, &alice_token, &topic_id, None, "C1");
        let c2 = reply(&client, &bob_token, &topic_id, Some(c1.as_str()), "C2");
        let c3 = reply(&client, &alice_token, &topic_id, None, "C3");

        let tree = comment_tree(&client, &topic_id);
        let roots = tree.as_array().unwrap();
        assert_eq!(2, roots.len());
        assert_eq!(c1.as_str(), roots[0]["id"]);
        assert_eq!("C1", roots[0]["text"]);
        assert_eq!("Alice", roots[0]["author_name"]);
        assert_eq!(
            format!("{BASE_URL}alice.png").as_str(),
            roots[0]["author_avatar_url"]
        );
        let replies = roots[0]["replies"].as_array().unwrap();
        assert_eq!(1, replies.len());
        assert_eq!(c2.as_str(), replies[0]["id"]);
        assert_eq!(c1.as_str(), replies[0]["parent_id"]);
        assert_eq!("Bob", replies[0]["author_name"]);
        assert_eq!(serde_json::json!([]), replies[0]["replies"]);
        assert_eq!(c3.as_str(), roots[1]["id"]);
        assert_eq!(serde_json::json!([]), roots[1]["replies"]);

        // The admin panel loads the same tree
        let res = client
            .post("/topiccomments")
            .header(ContentType::JSON)
            .body(format!(r#"{{"topic_id":"{topic_id}"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!(tree, json_body(res));
    }

    #[test]
    fn reject_replies_nested_too_deeply() {
        let (client, db) = setup();
        create_user(&db, "alice@example.com", Role::Alumni);
        let token = login(&client, "alice@example.com");
        let topic_id = create_topic(&client, &token, "Reunion");
        let mut parent = reply(&client, &token, &topic_id, None, "Root");
        for _ in 0..usecases::MAX_REPLY_DEPTH {
            parent = reply(&client, &token, &topic_id, Some(parent.as_str()), "Re");
        }
        let res = client
            .post("/reply")
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(format!(
                r#"{{"topic_id":"{topic_id}","parent_id":"{parent}","text":"Re"}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);

        let tree = comment_tree(&client, &topic_id);
        let mut node = &tree[0];
        let mut levels = 0;
        while let Some(reply) = node["replies"].get(0) {
            node = reply;
            levels += 1;
        }
        assert_eq!(usecases::MAX_REPLY_DEPTH, levels);
        assert_eq!(parent.as_str(), node["id"]);
    }

    #[test]
    fn topics_without_comments_have_an_empty_tree() {
        let (client, db) = setup();
        create_user(&db, "alice@example.com", Role::Alumni);
        let token = login(&client, "alice@example.com");
        let topic_id = create_topic(&client, &token, "Reunion");
        assert_eq!(serde_json::json!([]), comment_tree(&client, &topic_id));
        assert_eq!(serde_json::json!([]), comment_tree(&client, &Id::new()));
    }

    #[test]
    fn reject_malformed_topic_ids() {
        let (client, _db) = setup();
        let res = client.get("/forums/not-an-id/comments").dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        test_json(&res);
    }

    #[test]
    fn reject_replies_to_nonexistent_comments() {
        let (client, db) = setup();
        create_user(&db, "alice@example.com", Role::Alumni);
        let token = login(&client, "alice@example.com");
        let topic_id = create_topic(&client, &token, "Reunion");
        let res = client
            .post("/reply")
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(format!(
                r#"{{"topic_id":"{topic_id}","parent_id":"{}","text":"Hi"}}"#,
                Id::new()
            ))
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        assert_eq!(serde_json::json!([]), comment_tree(&client, &topic_id));
    }

    #[test]
    fn reject_empty_comments() {
        let (client, db) = setup();
        create_user(&db, "alice@example.com", Role::Alumni);
        let token = login(&client, "alice@example.com");
        let topic_id = create_topic(&client, &token, "Reunion");
        let res = client
            .post("/view_forum")
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(format!(r#"{{"topic_id":"{topic_id}","text":"  "}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn drop_orphans_of_deleted_comments() {
        let (client, db) = setup();
        create_user(&db, "alice@example.com", Role::Alumni);
        create_user(&db, "bob@example.com", Role::Alumni);
        let alice = login(&client, "alice@example.com");
        let bob = login(&client, "bob@example.com");
        let topic_id = create_topic(&client, &alice, "Reunion");
        let c1 = reply(&client, &alice, &topic_id, None, "C1");
        let c2 = reply(&client, &bob, &topic_id, Some(c1.as_str()), "C2");
        reply(&client, &alice, &topic_id, Some(c2.as_str()), "C3");
        let c4 = reply(&client, &bob, &topic_id, None, "C4");

        let res = client
            .delete(format!("/view_forum/{c1}"))
            .header(bearer(&bob))
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);
        let res = client
            .delete(format!("/view_forum/{c1}"))
            .header(bearer(&alice))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);

        let tree = comment_tree(&client, &topic_id);
        let roots = tree.as_array().unwrap();
        assert_eq!(1, roots.len());
        assert_eq!(c4.as_str(), roots[0]["id"]);
        // The orphans are still stored
        assert_eq!(
            3,
            db.shared()
                .unwrap()
                .count_comments_of_topic(topic_id.as_str())
                .unwrap()
        );
    }

    #[test]
    fn comments_of_deleted_authors_use_the_default_avatar() {
        let (client, db) = setup();
        let bob = create_user(&db, "bob@example.com", Role::Alumni);
        create_user(&db, "alice@example.com", Role::Alumni);
        let alice_token = login(&client, "alice@example.com");
        let bob_token = login(&client, "bob@example.com");
        let topic_id = create_topic(&client, &alice_token, "Reunion");
        reply(&client, &bob_token, &topic_id, None, "Bye");
        db.exclusive().unwrap().delete_user(bob.id.as_str()).unwrap();

        let tree = comment_tree(&client, &topic_id);
        assert_eq!(1, tree.as_array().unwrap().len());
        assert!(tree[0].get("author_name").is_none());
        assert_eq!("/default-avatar.png", tree[0]["author_avatar_url"]);
    }

    #[test]
    fn edit_and_like_comments() {
        let (client, db) = setup();
        create_user(&db, "alice@example.com", Role::Alumni);
        create_user(&db, "bob@example.com", Role::Alumni);
        let alice = login(&client, "alice@example.com");
        let bob = login(&client, "bob@example.com");
        let topic_id = create_topic(&client, &alice, "Reunion");
        let id = reply(&client, &alice, &topic_id, None, "Hello");

        let res = client
            .put(format!("/view_forum/{id}"))
            .header(ContentType::JSON)
            .header(bearer(&bob))
            .body(r#"{"text":"Hacked"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);
        let res = client
            .put(format!("/view_forum/{id}"))
            .header(ContentType::JSON)
            .header(bearer(&alice))
            .body(r#"{"text":"Hello there"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);

        for _ in 0..2 {
            let res = client.post(format!("/view_forum/{id}/like")).dispatch();
            assert_eq!(res.status(), Status::Ok);
        }
        let res = client.post(format!("/view_forum/{}/like", Id::new())).dispatch();
        assert_eq!(res.status(), Status::NotFound);

        let tree = comment_tree(&client, &topic_id);
        assert_eq!("Hello there", tree[0]["text"]);
        assert_eq!(2, tree[0]["likes"]);
    }

    #[test]
    fn list_comments_of_a_user() {
        let (client, db) = setup();
        let alice = create_user(&db, "alice@example.com", Role::Alumni);
        let token = login(&client, "alice@example.com");
        let topic_id = create_topic(&client, &token, "Reunion");
        reply(&client, &token, &topic_id, None, "First");
        reply(&client, &token, &topic_id, None, "Second");

        let res = client.get(format!("/comment/user/{}", alice.id)).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let comments = json_body(res);
        assert_eq!(2, comments.as_array().unwrap().len());
        assert_eq!("Reunion", comments[0]["topic_title"]);
    }
}
