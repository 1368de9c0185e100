use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

use models::partition;

use crate::assets::AssetUrls;

/// Client-facing shape of a partition: same fields as the row, with the
/// asset paths resolved to absolute URLs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PartitionView {
    pub id: i64,
    pub titre: String,
    pub categorie: String,
    pub pdf_url: String,
    pub audio_url: String,
    pub version: i32,
    pub is_favorite: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl PartitionView {
    pub fn present(model: partition::Model, urls: &AssetUrls) -> Self {
        Self {
            pdf_url: urls.resolve(&model.pdf_url),
            audio_url: urls.resolve(&model.audio_url),
            id: model.id,
            titre: model.titre,
            categorie: model.categorie,
            version: model.version,
            is_favorite: model.is_favorite,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
