use crate::domain::{Item, ItemId, UserId};
use crate::ports::item_repository::{ItemRepository as ItemRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock implementation of ItemRepository
///
/// Items can be registered and toggled between available and unavailable.
pub struct ItemRepository {
    items: Mutex<HashMap<ItemId, Item>>,
}

impl ItemRepository {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
        }
    }

    /// Add an item for testing purposes
    pub fn add_item(&self, item: Item) {
        self.items.lock().unwrap().insert(item.item_id, item);
    }

    /// Change the availability of a registered item
    pub fn set_available(&self, item_id: ItemId, available: bool) {
        if let Some(item) = self.items.lock().unwrap().get_mut(&item_id) {
            item.available = available;
        }
    }

    /// Owner lookup used by the in-memory booking repository
    pub fn owner_of(&self, item_id: ItemId) -> Option<UserId> {
        self.items
            .lock()
            .unwrap()
            .get(&item_id)
            .map(|item| item.owner_id)
    }
}

impl Default for ItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepositoryTrait for ItemRepository {
    async fn find_by_id(&self, item_id: ItemId) -> Result<Option<Item>> {
        Ok(self.items.lock().unwrap().get(&item_id).cloned())
    }
}
