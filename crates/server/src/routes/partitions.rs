use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Ack;
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;
use service::partition::PartitionView;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

/// Body of `POST /partitions/{id}/favorite`.
#[derive(Debug, Deserialize)]
pub struct FavoriteInput {
    #[serde(deserialize_with = "bool_like")]
    pub is_favorite: bool,
}

/// Accepts JSON booleans plus the usual form-style spellings: `0`/`1`,
/// `"true"`/`"false"`, `"1"`/`"0"`, `"on"`/`"off"`, `"yes"`/`"no"`.
/// Anything else, `null` included, is rejected.
fn bool_like<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(D::Error::custom(format!("is_favorite must be boolean, got {n}"))),
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" | "yes" => Ok(true),
            "false" | "0" | "off" | "no" => Ok(false),
            _ => Err(D::Error::custom(format!("is_favorite must be boolean, got {s:?}"))),
        },
        other => Err(D::Error::custom(format!("is_favorite must be boolean, got {other}"))),
    }
}

#[utoipa::path(
    get, path = "/partitions", tag = "partitions",
    responses(
        (status = 200, description = "All partitions with absolute asset URLs", body = [crate::openapi::PartitionDoc]),
        (status = 500, description = "Storage unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PartitionView>>, JsonApiError> {
    let list = state.partitions.list_all().await?;
    info!(count = list.len(), "list partitions");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/partitions/{id}/favorite", tag = "partitions",
    params(("id" = i64, Path, description = "Partition id")),
    request_body = crate::openapi::FavoriteInputDoc,
    responses(
        (status = 200, description = "Favorite flag stored", body = crate::openapi::AckDoc),
        (status = 400, description = "Malformed id or body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Unknown partition", body = crate::openapi::ErrorDoc),
        (status = 422, description = "is_favorite missing or not boolean", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_favorite(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    input: Result<Json<FavoriteInput>, JsonRejection>,
) -> Result<Json<Ack>, JsonApiError> {
    let Path(id) = id.map_err(|e| JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Path", Some(e.body_text())))?;
    let Json(input) = input.map_err(|e| JsonApiError::new(e.status(), "Invalid Body", Some(e.body_text())))?;

    state.partitions.set_favorite(id, input.is_favorite).await?;
    info!(id, is_favorite = input.is_favorite, "favorite updated");
    Ok(Json(Ack::ok()))
}
