use crate::api::models::{ClosetItem, ClosetItemUpdate, ListPayload, NewClosetItem};
use crate::api::paths;
use crate::request::{RequestBody, RequestHelper};
use crate::screens::messages;
use crate::screens::{CollectionState, Identified};

use log::info;

/// Multipart field name the backend expects for the item photo.
const IMAGE_FIELD: &str = "image";

impl Identified for ClosetItem {
    fn id(&self) -> i64 {
        self.id
    }
}

/// The user's wardrobe inventory.
pub struct ClosetScreen {
    helper: RequestHelper,
    pub state: CollectionState<ClosetItem>,
}

impl ClosetScreen {
    pub fn new(helper: RequestHelper) -> Self {
        Self {
            helper,
            state: CollectionState::default(),
        }
    }

    pub fn items(&self) -> &[ClosetItem] {
        &self.state.items
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Screen became visible: pick up an anti-forgery token, then load.
    pub async fn mount(&mut self) -> bool {
        self.helper.refresh_csrf_token().await;
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> bool {
        self.state.begin();
        match self
            .helper
            .get::<ListPayload<ClosetItem>>(paths::CLOSET_ITEMS)
            .await
        {
            Ok(payload) => {
                self.state.replace_all(payload.into_items());
                true
            }
            Err(e) => {
                self.state.fail("load closet items", &e);
                false
            }
        }
    }

    pub async fn add_item(&mut self, item: NewClosetItem) -> bool {
        if item.name.trim().is_empty() {
            self.state.reject(messages::NAME_REQUIRED);
            return false;
        }

        self.state.begin();
        let body = RequestBody::form(item.fields(), IMAGE_FIELD, item.image);
        match self
            .helper
            .create::<ClosetItem>(paths::CLOSET_ITEMS, body)
            .await
        {
            Ok(created) => {
                info!("Added closet item {}", created.id);
                self.state.append(created);
                true
            }
            Err(e) => {
                self.state.fail("add closet item", &e);
                false
            }
        }
    }

    pub async fn update_item(&mut self, id: i64, update: ClosetItemUpdate) -> bool {
        self.state.begin();
        let body = match RequestBody::json(&update) {
            Ok(body) => body,
            Err(e) => {
                self.state.fail("encode closet item update", &e);
                return false;
            }
        };

        match self
            .helper
            .update::<ClosetItem>(&paths::closet_item(id), body)
            .await
        {
            Ok(updated) => {
                self.state.replace(updated);
                true
            }
            Err(e) => {
                self.state.fail("update closet item", &e);
                false
            }
        }
    }

    pub async fn delete_item(&mut self, id: i64) -> bool {
        self.state.begin();
        match self.helper.delete(&paths::closet_item(id)).await {
            Ok(()) => {
                info!("Deleted closet item {id}");
                self.state.remove(id);
                true
            }
            Err(e) => {
                self.state.fail("delete closet item", &e);
                false
            }
        }
    }
}
