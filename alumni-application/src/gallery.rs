use super::*;

pub fn create_gallery_item(
    connections: &sqlite::Connections,
    account_id: &str,
    new_item: usecases::NewGalleryItem,
) -> Result<GalleryItem> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::create_gallery_item(conn, account, new_item)
    })
}

pub fn update_gallery_item(
    connections: &sqlite::Connections,
    account_id: &str,
    item_id: &str,
    update: usecases::GalleryItemUpdate,
) -> Result<GalleryItem> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::update_gallery_item(conn, account, item_id, update)
    })
}

pub fn delete_gallery_item(
    connections: &sqlite::Connections,
    account_id: &str,
    item_id: &str,
) -> Result<()> {
    authorized_transaction(connections, account_id, |conn, account| {
        usecases::delete_gallery_item(conn, account, item_id)
    })
}
