use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::assets::AssetUrls;
use service::partition::{PartitionService, SeaOrmPartitionRepository};

pub type Partitions = PartitionService<SeaOrmPartitionRepository>;

/// Shared handler state. The connection pool is owned by whoever built the
/// state and lives as long as the router.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub partitions: Arc<Partitions>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, urls: AssetUrls) -> Self {
        let repo = Arc::new(SeaOrmPartitionRepository::new(db.clone()));
        Self { db, partitions: Arc::new(PartitionService::new(repo, urls)) }
    }
}
