//! Integration tests for the Items domain
//!
//! These run `PgItemRepository` against a real PostgreSQL via testcontainers.
//! They need Docker: `cargo test -p domain_items -- --ignored`.

use domain_items::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn input(name: String) -> CreateItem {
    CreateItem {
        name,
        description: String::new(),
        completed: false,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_get_item() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let created = repo
        .create(CreateItem {
            name: builder.name("item", "main"),
            description: "2%".to_string(),
            completed: false,
        })
        .await
        .unwrap();
    assert!(created.id > 0);

    let fetched = assert_some(repo.get_by_id(created.id).await.unwrap(), "item should exist");
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.description, "2%");
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_list_orders_newest_first() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_order");

    for suffix in ["a", "b", "c"] {
        repo.create(input(builder.name("item", suffix))).await.unwrap();
    }

    let items = repo.list(ItemOrdering::NEWEST_FIRST).await.unwrap();
    assert_eq!(items.len(), 3);
    assert_sorted_desc(&items, |i| (i.created_at, i.id));
    assert_eq!(items[0].name, builder.name("item", "c"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_partial_update_keeps_other_columns() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("partial_update");

    let created = repo.create(input(builder.name("item", "todo"))).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateItem {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(updated.completed);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_and_delete_missing_row() {
    let db = TestDatabase::new().await;
    let repo = PgItemRepository::new(db.connection());

    let result = repo
        .update(
            404,
            UpdateItem {
                name: Some("nobody".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ItemError::NotFound(404))));

    let result = repo.update(404, UpdateItem::default()).await;
    assert!(matches!(result, Err(ItemError::NotFound(404))));

    assert!(!repo.delete(404).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_service_delete_then_get() {
    let db = TestDatabase::new().await;
    let service = ItemService::new(PgItemRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_delete");

    let item = service
        .create_item(input(builder.name("item", "gone")))
        .await
        .unwrap();
    service.delete_item(item.id).await.unwrap();

    assert!(matches!(
        service.get_item(item.id).await,
        Err(ItemError::NotFound(_))
    ));
}
