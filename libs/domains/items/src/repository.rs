use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemOrdering, UpdateItem};

/// Repository trait for Item persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new item; the store assigns `id` and `created_at`
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// Every item in the given order
    async fn list(&self, ordering: ItemOrdering) -> ItemResult<Vec<Item>>;

    /// Apply the present fields; `ItemError::NotFound` if the row is gone
    async fn update(&self, id: i64, input: UpdateItem) -> ItemResult<Item>;

    /// Returns false when nothing was deleted
    async fn delete(&self, id: i64) -> ItemResult<bool>;
}

#[derive(Default)]
struct Store {
    items: BTreeMap<i64, Item>,
    next_id: i64,
}

/// In-memory ItemRepository for tests and local runs
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        store.next_id += 1;

        // Keep created_at non-decreasing in insertion order
        let now = Utc::now();
        let created_at = store
            .items
            .values()
            .map(|i| i.created_at)
            .max()
            .map_or(now, |latest| latest.max(now));

        let item = Item {
            id: store.next_id,
            name: input.name,
            description: input.description,
            completed: input.completed,
            created_at,
        };
        store.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    async fn list(&self, ordering: ItemOrdering) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        let mut items: Vec<Item> = store.items.values().cloned().collect();
        items.sort_by(|a, b| ordering.compare(a, b));
        Ok(items)
    }

    async fn update(&self, id: i64, input: UpdateItem) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        let item = store.items.get_mut(&id).ok_or(ItemError::NotFound(id))?;
        item.apply_update(input);

        tracing::info!(item_id = id, "Updated item");
        Ok(item.clone())
    }

    async fn delete(&self, id: i64) -> ItemResult<bool> {
        let mut store = self.store.write().await;
        let removed = store.items.remove(&id).is_some();
        if removed {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(removed)
    }
}
