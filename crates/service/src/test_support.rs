#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_with_config, in_memory_config, migrate};
use models::partition::{self, NewPartition};

/// Migrated in-memory database private to the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&in_memory_config()).await?;
    migrate(&db).await?;
    Ok(db)
}

pub async fn seed(
    db: &DatabaseConnection,
    categorie: &str,
    pdf_url: &str,
    audio_url: &str,
) -> Result<partition::Model, anyhow::Error> {
    let created = partition::create(
        db,
        NewPartition {
            titre: format!("Partition {pdf_url}"),
            categorie: categorie.to_string(),
            pdf_url: pdf_url.to_string(),
            audio_url: audio_url.to_string(),
            version: None,
        },
    )
    .await?;
    Ok(created)
}
