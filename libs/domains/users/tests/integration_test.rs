//! Integration tests for the Users domain against PostgreSQL via testcontainers.
//! They need Docker: `cargo test -p domain_users -- --ignored`.

use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_and_authenticate() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("create_and_authenticate");

    let username = builder.username("main");
    let password = builder.password();

    let created = service
        .create_user(CreateUser {
            username: username.clone(),
            password: password.clone(),
        })
        .await
        .unwrap();
    assert!(created.is_active);

    let user = service.authenticate(&username, &password).await.unwrap();
    assert_eq!(user.id, created.id);

    let found = service.find_active_user(created.id).await.unwrap();
    assert_eq!(assert_some(found, "active user").username, username);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unique_username_constraint() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());

    let user = || models::NewUser {
        username: "duplicate".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$test$test".to_string(),
    };

    repo.create(user()).await.unwrap();
    let result = repo.create(user()).await;
    assert!(matches!(result, Err(UserError::DuplicateUsername(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_deactivated_user_cannot_log_in() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("deactivated");

    let username = builder.username("inactive");
    service
        .create_user(CreateUser {
            username: username.clone(),
            password: builder.password(),
        })
        .await
        .unwrap();

    assert!(service.set_active(&username, false).await.unwrap());
    assert!(matches!(
        service.authenticate(&username, &builder.password()).await,
        Err(UserError::InvalidCredentials)
    ));
}
