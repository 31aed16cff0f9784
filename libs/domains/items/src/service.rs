use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemOrdering, ReplaceItem, UpdateItem};
use crate::repository::ItemRepository;

/// Service layer for Item business logic
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All items, most recently created first
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list(ItemOrdering::NEWEST_FIRST).await
    }

    #[instrument(skip(self), fields(item_id = id))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Full update: `name` is required, omitted fields are kept
    #[instrument(skip(self, input), fields(item_id = id))]
    pub async fn replace_item(&self, id: i64, input: ReplaceItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository.update(id, input.into()).await
    }

    /// Partial update
    #[instrument(skip(self, input), fields(item_id = id))]
    pub async fn update_item(&self, id: i64, input: UpdateItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository.update(id, input).await
    }

    #[instrument(skip(self), fields(item_id = id))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ItemError::NotFound(id));
        }

        Ok(())
    }
}
