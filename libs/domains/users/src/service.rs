use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;
use tracing::instrument;

/// Argon2id hash with the default parameters that matches no password.
/// Checked against when the username is unknown.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$qpqOdpzvjk9LAhKEaJ3LoQ$5ocfHlxXWZUibcJORDmyW3Fklocp3ecZuxsKgFwEqSk";
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, User};
use crate::repository::UserRepository;

/// Service layer for accounts and credential checks
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create an active account with an Argon2-hashed password
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input.validate()?;

        if self
            .repository
            .get_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(UserError::DuplicateUsername(input.username));
        }

        let password_hash = hash_password(&input.password)?;
        self.repository
            .create(NewUser {
                username: input.username,
                password_hash,
            })
            .await
    }

    /// Check a username/password pair.
    ///
    /// Unknown user, wrong password and inactive account all produce
    /// [`UserError::InvalidCredentials`], and all of them run one Argon2 verification.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> UserResult<User> {
        let Some(user) = self.repository.get_by_username(username).await? else {
            verify_password(password, DUMMY_PASSWORD_HASH)?;
            return Err(UserError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::info!(user_id = user.id, "Password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        if !user.is_active {
            tracing::info!(user_id = user.id, "Inactive account");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    /// The user behind a token, if it still exists and is active
    #[instrument(skip(self))]
    pub async fn find_active_user(&self, id: i64) -> UserResult<Option<User>> {
        let user = self.repository.get_by_id(id).await?;
        Ok(user.filter(|u| u.is_active))
    }

    /// The user behind an access token on a protected route
    #[instrument(skip(self))]
    pub async fn require_active_user(&self, id: i64) -> UserResult<User> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::UserNotFound)?;

        if !user.is_active {
            return Err(UserError::UserInactive);
        }
        Ok(user)
    }

    /// Enable or disable an account by username; false if no such user
    #[instrument(skip(self))]
    pub async fn set_active(&self, username: &str, is_active: bool) -> UserResult<bool> {
        match self.repository.get_by_username(username).await? {
            Some(user) => self.repository.set_active(user.id, is_active).await,
            None => Ok(false),
        }
    }
}

fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> UserResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryUserRepository;
    use std::time::Instant;

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(InMemoryUserRepository::new())
    }

    fn create_input(username: &str, password: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let service = service();
        let user = service
            .create_user(create_input("alice", "correct horse"))
            .await
            .unwrap();

        assert_ne!(user.password_hash, "correct horse");
        assert!(user.password_hash.starts_with("$argon2"));
        assert!(user.is_active);
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate() {
        let service = service();
        service
            .create_user(create_input("alice", "correct horse"))
            .await
            .unwrap();

        let result = service
            .create_user(create_input("alice", "another password"))
            .await;
        assert!(matches!(result, Err(UserError::DuplicateUsername(_))));
    }

    #[tokio::test]
    async fn test_create_user_rejects_short_password() {
        let result = service().create_user(create_input("alice", "short")).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let service = service();
        service
            .create_user(create_input("alice", "correct horse"))
            .await
            .unwrap();

        let user = service.authenticate("alice", "correct horse").await.unwrap();
        assert_eq!(user.username, "alice");

        assert!(matches!(
            service.authenticate("alice", "wrong password").await,
            Err(UserError::InvalidCredentials)
        ));
        assert!(matches!(
            service.authenticate("nobody", "correct horse").await,
            Err(UserError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_inactive_user_cannot_authenticate() {
        let service = service();
        let user = service
            .create_user(create_input("alice", "correct horse"))
            .await
            .unwrap();
        assert!(service.set_active("alice", false).await.unwrap());

        assert!(matches!(
            service.authenticate("alice", "correct horse").await,
            Err(UserError::InvalidCredentials)
        ));
        assert!(service.find_active_user(user.id).await.unwrap().is_none());
    }

    #[test]
    fn test_dummy_hash_is_verifiable() {
        assert!(!verify_password("correct horse", DUMMY_PASSWORD_HASH).unwrap());
    }

    #[tokio::test]
    async fn test_unknown_user_costs_a_password_check() {
        let service = service();
        service
            .create_user(create_input("alice", "correct horse"))
            .await
            .unwrap();

        let started = Instant::now();
        let known = service.authenticate("alice", "wrong password").await;
        let known_elapsed = started.elapsed();

        let started = Instant::now();
        let unknown = service.authenticate("nobody", "wrong password").await;
        let unknown_elapsed = started.elapsed();

        assert!(matches!(known, Err(UserError::InvalidCredentials)));
        assert!(matches!(unknown, Err(UserError::InvalidCredentials)));
        // Both paths hash once; allow generous scheduling noise
        assert!(
            unknown_elapsed * 4 >= known_elapsed,
            "unknown user took {unknown_elapsed:?}, known user {known_elapsed:?}"
        );
    }

    #[tokio::test]
    async fn test_require_active_user() {
        let service = service();
        let user = service
            .create_user(create_input("alice", "correct horse"))
            .await
            .unwrap();

        assert_eq!(service.require_active_user(user.id).await.unwrap().id, user.id);
        assert!(matches!(
            service.require_active_user(999).await,
            Err(UserError::UserNotFound)
        ));

        service.set_active("alice", false).await.unwrap();
        assert!(matches!(
            service.require_active_user(user.id).await,
            Err(UserError::UserInactive)
        ));
    }

    #[tokio::test]
    async fn test_set_active_unknown_user() {
        assert!(!service().set_active("ghost", false).await.unwrap());
    }
}
