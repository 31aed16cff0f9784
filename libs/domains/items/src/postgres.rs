use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Order, QueryOrder};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{CreateItem, Item, ItemOrdering, ItemSortKey, SortDirection, UpdateItem},
    repository::ItemRepository,
};

pub struct PgItemRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, ordering: ItemOrdering) -> ItemResult<Vec<Item>> {
        let order = match ordering.direction {
            SortDirection::Ascending => Order::Asc,
            SortDirection::Descending => Order::Desc,
        };
        let column = match ordering.key {
            ItemSortKey::CreatedAt => entity::Column::CreatedAt,
        };

        let models = entity::Entity::find()
            .order_by(column, order.clone())
            .order_by(entity::Column::Id, order)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i64, input: UpdateItem) -> ItemResult<Item> {
        // Nothing to write; still report a missing row
        if input.is_empty() {
            return self.get_by_id(id).await?.ok_or(ItemError::NotFound(id));
        }

        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            name: input.name.map_or(NotSet, Set),
            description: input.description.map_or(NotSet, Set),
            completed: input.completed.map_or(NotSet, Set),
            created_at: NotSet,
        };

        let model = self
            .base
            .update(active_model)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ItemError::NotFound(id),
                other => ItemError::Database(other),
            })?;

        tracing::info!(item_id = id, "Updated item");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> ItemResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(item_id = id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
