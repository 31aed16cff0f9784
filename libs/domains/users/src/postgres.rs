use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{NewUser, User},
    repository::UserRepository,
};

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let username = user.username.clone();
        let active_model: entity::ActiveModel = user.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    UserError::DuplicateUsername(username)
                }
                _ => UserError::Database(e),
            })?;

        tracing::info!(user_id = model.id, username = %model.username, "Created user");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Username.eq(username))
            .one(self.base.db())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn set_active(&self, id: i64, is_active: bool) -> UserResult<bool> {
        let active_model = entity::ActiveModel {
            id: Unchanged(id),
            username: NotSet,
            password_hash: NotSet,
            is_active: Set(is_active),
            date_joined: NotSet,
        };

        match self.base.update(active_model).await {
            Ok(_) => {
                tracing::info!(user_id = id, is_active, "Updated user status");
                Ok(true)
            }
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(id: i64, username: &str) -> entity::Model {
        entity::Model {
            id,
            username: username.to_string(),
            password_hash: "$argon2id$hash".to_string(),
            is_active: true,
            date_joined: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_get_by_username_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "alice")]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_set_active_on_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(!repo.set_active(8, false).await.unwrap());
    }
}
