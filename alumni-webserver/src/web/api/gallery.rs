use super::*;

#[get("/gallery")]
pub fn get_gallery(db: sqlite::Connections) -> Result<Vec<json::GalleryItem>> {
    let items = db.shared()?.all_gallery_items()?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[get("/gallery/<user_id>")]
pub fn get_gallery_of_user(
    db: sqlite::Connections,
    user_id: String,
) -> Result<Vec<json::GalleryItem>> {
    let user_id: Id = user_id.parse()?;
    let items = db.shared()?.gallery_items_uploaded_by(user_id.as_str())?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[post("/gallery", format = "application/json", data = "<item>")]
pub fn post_gallery_item(
    db: sqlite::Connections,
    account: Account,
    item: JsonResult<json::NewGalleryItem>,
) -> Result<json::GalleryItem> {
    let new_item = from_json::new_gallery_item(item?.into_inner());
    let item = flows::create_gallery_item(&db, account.id(), new_item)?;
    Ok(Json(item.into()))
}

#[put("/gallery/<id>", format = "application/json", data = "<update>")]
pub fn put_gallery_item(
    db: sqlite::Connections,
    account: Account,
    id: String,
    update: JsonResult<json::UpdateGalleryItem>,
) -> Result<json::GalleryItem> {
    let id: Id = id.parse()?;
    let update = from_json::gallery_item_update(update?.into_inner());
    let item = flows::update_gallery_item(&db, account.id(), id.as_str(), update)?;
    Ok(Json(item.into()))
}

#[delete("/gallery/<id>")]
pub fn delete_gallery_item(db: sqlite::Connections, account: Account, id: String) -> Result<()> {
    let id: Id = id.parse()?;
    flows::delete_gallery_item(&db, account.id(), id.as_str())?;
    Ok(Json(()))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn upload_update_and_delete_items() {
        let (client, db) = setup();
        let alice = create_user(&db, "alice@example.com", Role::Alumni);
        create_user(&db, "bob@example.com", Role::Alumni);
        let alice_token = login(&client, "alice@example.com");
        let bob_token = login(&client, "bob@example.com");

        let res = client
            .post("/gallery")
            .header(ContentType::JSON)
            .header(bearer(&alice_token))
            .body(r#"{"image_url":"uploads/reunion.jpg","description":"Reunion 2024"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let item = json_body(res);
        assert_eq!("Alice", item["uploader_name"]);
        let id = item["id"].as_str().unwrap();

        let items = json_body(client.get("/gallery").dispatch());
        assert_eq!(1, items.as_array().unwrap().len());
        let items = json_body(client.get(format!("/gallery/{}", alice.id)).dispatch());
        assert_eq!(1, items.as_array().unwrap().len());
        let items = json_body(client.get(format!("/gallery/{}", Id::new())).dispatch());
        assert_eq!(serde_json::json!([]), items);

        let res = client
            .put(format!("/gallery/{id}"))
            .header(ContentType::JSON)
            .header(bearer(&bob_token))
            .body(r#"{"description":"Mine now"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Forbidden);
        let res = client
            .put(format!("/gallery/{id}"))
            .header(ContentType::JSON)
            .header(bearer(&alice_token))
            .body(r#"{"description":"Reunion 2024, main hall"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert_eq!("Reunion 2024, main hall", json_body(res)["description"]);

        let res = client
            .delete(format!("/gallery/{id}"))
            .header(bearer(&alice_token))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let res = client
            .delete(format!("/gallery/{id}"))
            .header(bearer(&alice_token))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn reject_too_long_descriptions() {
        let (client, db) = setup();
        create_user(&db, "alice@example.com", Role::Alumni);
        let token = login(&client, "alice@example.com");
        let description = "x".repeat(301);
        let res = client
            .post("/gallery")
            .header(ContentType::JSON)
            .header(bearer(&token))
            .body(format!(
                r#"{{"image_url":"uploads/a.jpg","description":"{description}"}}"#
            ))
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        assert!(db.shared().unwrap().all_gallery_items().unwrap().is_empty());
    }
}
