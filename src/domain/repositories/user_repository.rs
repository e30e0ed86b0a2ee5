use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{error::RepositoryError, models::user::User};

/// Durable store for user records.
///
/// Uniqueness of usernames and the storage schema are the implementation's concern.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user record
    async fn save(&self, user: User) -> Result<(), RepositoryError>;
}
