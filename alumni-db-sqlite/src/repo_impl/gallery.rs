use super::*;

impl_repo!(GalleryRepo {
    fn create_gallery_item(&self, item: &GalleryItem) -> Result<()>;
    fn update_gallery_item(&self, item: &GalleryItem) -> Result<()>;
    fn delete_gallery_item(&self, id: &str) -> Result<()>;
    fn get_gallery_item(&self, id: &str) -> Result<GalleryItem>;
    fn all_gallery_items(&self) -> Result<Vec<GalleryItem>>;
    fn gallery_items_uploaded_by(&self, user_id: &str) -> Result<Vec<GalleryItem>>;
    fn count_gallery_items(&self) -> Result<usize>;
});

impl<'a> From<&'a GalleryItem> for models::NewGalleryItem<'a> {
    fn from(i: &'a GalleryItem) -> Self {
        Self {
            id: i.id.as_str(),
            image_url: &i.image_url,
            description: &i.description,
            uploaded_by: i.uploaded_by.as_str(),
            uploader_name: &i.uploader_name,
            created_at: i.created_at.as_millis(),
            updated_at: i.updated_at.as_millis(),
        }
    }
}

impl From<models::GalleryItemEntity> for GalleryItem {
    fn from(i: models::GalleryItemEntity) -> Self {
        let models::GalleryItemEntity {
            rowid: _,
            id,
            image_url,
            description,
            uploaded_by,
            uploader_name,
            created_at,
            updated_at,
        } = i;
        GalleryItem {
            id: id.into(),
            image_url,
            description,
            uploaded_by: uploaded_by.into(),
            uploader_name,
            created_at: Timestamp::from_millis(created_at),
            updated_at: Timestamp::from_millis(updated_at),
        }
    }
}

fn create_gallery_item(conn: &mut SqliteConnection, item: &GalleryItem) -> Result<()> {
    diesel::insert_into(schema::gallery_item::table)
        .values(&models::NewGalleryItem::from(item))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_gallery_item(conn: &mut SqliteConnection, item: &GalleryItem) -> Result<()> {
    use schema::gallery_item::dsl;
    let count = diesel::update(dsl::gallery_item.filter(dsl::id.eq(item.id.as_str())))
        .set(&models::NewGalleryItem::from(item))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn delete_gallery_item(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::gallery_item::dsl;
    let count = diesel::delete(dsl::gallery_item.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_single_row(count)
}

fn get_gallery_item(conn: &mut SqliteConnection, id: &str) -> Result<GalleryItem> {
    use schema::gallery_item::dsl;
    Ok(dsl::gallery_item
        .filter(dsl::id.eq(id))
        .first::<models::GalleryItemEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_gallery_items(conn: &mut SqliteConnection) -> Result<Vec<GalleryItem>> {
    use schema::gallery_item::dsl;
    Ok(dsl::gallery_item
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::GalleryItemEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn gallery_items_uploaded_by(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<GalleryItem>> {
    use schema::gallery_item::dsl;
    Ok(dsl::gallery_item
        .filter(dsl::uploaded_by.eq(user_id))
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .load::<models::GalleryItemEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_gallery_items(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::gallery_item::dsl;
    Ok(dsl::gallery_item
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
