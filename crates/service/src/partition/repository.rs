use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait PartitionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::partition::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<models::partition::Model>, ServiceError>;
    async fn set_favorite(&self, id: i64, value: bool) -> Result<models::partition::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPartitionRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPartitionRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl PartitionRepository for SeaOrmPartitionRepository {
    async fn list(&self) -> Result<Vec<models::partition::Model>, ServiceError> {
        Ok(models::partition::list(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<models::partition::Model>, ServiceError> {
        Ok(models::partition::find(&self.db, id).await?)
    }

    async fn set_favorite(&self, id: i64, value: bool) -> Result<models::partition::Model, ServiceError> {
        Ok(models::partition::set_favorite(&self.db, id, value).await?)
    }
}
