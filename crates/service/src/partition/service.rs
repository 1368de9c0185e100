use std::sync::Arc;

use tracing::{info, instrument};

use crate::assets::AssetUrls;
use crate::errors::ServiceError;
use crate::partition::repository::PartitionRepository;
use crate::partition::view::PartitionView;

/// Application service for partitions. Every record it hands out has been
/// passed through `PartitionView::present`.
pub struct PartitionService<R: PartitionRepository> {
    repo: Arc<R>,
    urls: AssetUrls,
}

impl<R: PartitionRepository> PartitionService<R> {
    pub fn new(repo: Arc<R>, urls: AssetUrls) -> Self { Self { repo, urls } }

    pub fn asset_urls(&self) -> &AssetUrls { &self.urls }

    /// All partitions in storage order. An empty table yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<PartitionView>, ServiceError> {
        let rows = self.repo.list().await?;
        Ok(rows.into_iter().map(|m| PartitionView::present(m, &self.urls)).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<PartitionView, ServiceError> {
        self.repo
            .get(id)
            .await?
            .map(|m| PartitionView::present(m, &self.urls))
            .ok_or_else(|| ServiceError::not_found(&format!("partition {id}")))
    }

    #[instrument(skip(self))]
    pub async fn set_favorite(&self, id: i64, value: bool) -> Result<PartitionView, ServiceError> {
        let updated = self.repo.set_favorite(id, value).await?;
        info!(id, is_favorite = value, "partition favorite updated");
        Ok(PartitionView::present(updated, &self.urls))
    }
}
