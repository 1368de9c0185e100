use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::errors;

/// Persisted sheet-music entry. Asset paths are stored relative to the
/// public storage root and must not be serialized to clients as-is.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "partitions")]
pub struct Model {
    #[sea_orm(primary_key)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Input for provisioning a partition (seeding, fixtures).
#[derive(Clone, Debug)]
pub struct NewPartition {
    pub titre: String,
    pub categorie: String,
    pub pdf_url: String,
    pub audio_url: String,
    pub version: Option<i32>,
}

pub const DEFAULT_VERSION: i32 = 1;

pub fn validate_required(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

pub fn validate_asset_path(field: &str, path: &str) -> Result<(), errors::ModelError> {
    validate_required(field, path)?;
    if path.contains("://") {
        return Err(errors::ModelError::Validation(format!("{field} must be a relative storage path")));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: NewPartition) -> Result<Model, errors::ModelError> {
    validate_required("titre", &input.titre)?;
    validate_required("categorie", &input.categorie)?;
    validate_asset_path("pdf_url", &input.pdf_url)?;
    validate_asset_path("audio_url", &input.audio_url)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        titre: Set(input.titre),
        categorie: Set(input.categorie),
        pdf_url: Set(input.pdf_url),
        audio_url: Set(input.audio_url),
        version: Set(input.version.unwrap_or(DEFAULT_VERSION)),
        is_favorite: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Every row in primary key order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Set `is_favorite` and bump `updated_at`. Nothing is written when `id`
/// does not exist.
pub async fn set_favorite(db: &DatabaseConnection, id: i64, value: bool) -> Result<Model, errors::ModelError> {
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or_else(|| errors::ModelError::NotFound(format!("partition {id}")))?
        .into();
    found.is_favorite = Set(value);
    found.updated_at = Set(Utc::now().into());
    found.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    Entity::find()
        .count(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
