use super::{authorize_owner_or_admin, prelude::*};
use crate::util::validate::Validate;

#[derive(Debug, Clone)]
pub struct NewGalleryItem {
    pub image_url: String,
    pub description: String,
}

pub fn create_gallery_item<R: GalleryRepo>(
    repo: &R,
    account: &User,
    new_item: NewGalleryItem,
) -> Result<GalleryItem> {
    let NewGalleryItem {
        image_url,
        description,
    } = new_item;
    let uploader_name = if account.name.trim().is_empty() {
        UNKNOWN_UPLOADER.to_owned()
    } else {
        account.name.clone()
    };
    let now = Timestamp::now();
    let item = GalleryItem {
        id: Id::new(),
        image_url,
        description: description.trim().to_owned(),
        uploaded_by: account.id.clone(),
        uploader_name,
        created_at: now,
        updated_at: now,
    };
    item.validate()?;
    repo.create_gallery_item(&item)?;
    Ok(item)
}

#[derive(Debug, Clone, Default)]
pub struct GalleryItemUpdate {
    pub image_url: Option<String>,
    pub description: Option<String>,
}

pub fn update_gallery_item<R: GalleryRepo>(
    repo: &R,
    account: &User,
    item_id: &str,
    update: GalleryItemUpdate,
) -> Result<GalleryItem> {
    let mut item = repo.get_gallery_item(item_id)?;
    authorize_owner_or_admin(account, &item.uploaded_by)?;
    let GalleryItemUpdate {
        image_url,
        description,
    } = update;
    if let Some(image_url) = image_url.filter(|i| !i.is_empty()) {
        item.image_url = image_url;
    }
    if let Some(description) = description {
        item.description = description.trim().to_owned();
    }
    item.validate()?;
    item.updated_at = Timestamp::now();
    repo.update_gallery_item(&item)?;
    Ok(item)
}

pub fn delete_gallery_item<R: GalleryRepo>(repo: &R, account: &User, item_id: &str) -> Result<()> {
    let item = repo.get_gallery_item(item_id)?;
    authorize_owner_or_admin(account, &item.uploaded_by)?;
    repo.delete_gallery_item(item.id.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            tests::{new_user, MockDb},
            *,
        },
        *,
    };

    #[test]
    fn upload_with_uploader_name() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("s@bar.de", Role::Student)).unwrap();
        let item = create_gallery_item(
            &db,
            &user,
            NewGalleryItem {
                image_url: "uploads/campus.jpg".into(),
                description: "Campus".into(),
            },
        )
        .unwrap();
        assert_eq!("Alice", item.uploader_name);
        assert_eq!(user.id, item.uploaded_by);
        assert_eq!(
            vec![item],
            db.gallery_items_uploaded_by(user.id.as_str()).unwrap()
        );
    }

    #[test]
    fn reject_long_descriptions() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("s@bar.de", Role::Student)).unwrap();
        let result = create_gallery_item(
            &db,
            &user,
            NewGalleryItem {
                image_url: "uploads/campus.jpg".into(),
                description: "x".repeat(MAX_DESCRIPTION_LEN + 1),
            },
        );
        assert!(matches!(result, Err(Error::DescriptionTooLong)));
    }

    #[test]
    fn update_and_delete_own_items() {
        let db = MockDb::default();
        let user = create_new_user(&db, new_user("s@bar.de", Role::Student)).unwrap();
        let other = create_new_user(&db, new_user("o@bar.de", Role::Student)).unwrap();
        let item = create_gallery_item(
            &db,
            &user,
            NewGalleryItem {
                image_url: "uploads/campus.jpg".into(),
                description: "Campus".into(),
            },
        )
        .unwrap();
        let update = GalleryItemUpdate {
            image_url: None,
            description: Some("Main campus".into()),
        };
        assert!(matches!(
            update_gallery_item(&db, &other, item.id.as_str(), update.clone()),
            Err(Error::Forbidden)
        ));
        let updated = update_gallery_item(&db, &user, item.id.as_str(), update).unwrap();
        assert_eq!("Main campus", updated.description);
        assert_eq!("uploads/campus.jpg", updated.image_url);
        delete_gallery_item(&db, &user, item.id.as_str()).unwrap();
        assert!(db.all_gallery_items().unwrap().is_empty());
    }
}
