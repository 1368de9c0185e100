
use sea_orm::DatabaseConnection;

use crate::db;

/// Fresh migrated in-memory database for one test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = db::connect_with_config(&db::in_memory_config()).await?;
    db::migrate(&db).await?;
    Ok(db)
}
