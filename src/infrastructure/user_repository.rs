use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::{
        error::RepositoryError, models::user::User, repositories::user_repository::UserRepository,
    },
    infrastructure::entity::users,
};

#[derive(Clone)]
pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn save(&self, user: User) -> Result<(), RepositoryError> {
        let id = Uuid::new_v4();

        let user_model = users::ActiveModel {
            id: Set(id),
            username: Set(user.username().to_string()),
            password: Set(user.password().as_str().to_string()),
            email: Set(user.email().to_string()),
            created_at: Set(Utc::now()),
        };

        users::Entity::insert(user_model)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        debug!(user_id = %id, username = user.username(), "user row inserted");
        Ok(())
    }
}
