use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct PartitionDoc {
    pub id: i64,
    pub titre: String,
    pub categorie: String,
    /// Absolute URL of the score
    pub pdf_url: String,
    /// Absolute URL of the recording
    pub audio_url: String,
    pub version: i32,
    pub is_favorite: bool,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct FavoriteInputDoc { pub is_favorite: bool }

#[derive(ToSchema)]
pub struct AckDoc { pub success: bool }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::partitions::list,
        crate::routes::partitions::update_favorite,
    ),
    components(
        schemas(
            HealthResponse,
            PartitionDoc,
            FavoriteInputDoc,
            AckDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "partitions")
    )
)]
pub struct ApiDoc;
