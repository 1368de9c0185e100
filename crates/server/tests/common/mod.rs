#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, Response};
use axum::Router;
use sea_orm::DatabaseConnection;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use models::partition::{self, NewPartition};
use server::{routes, state::ServerState};
use service::assets::AssetUrls;

pub const BASE: &str = "https://chorale.example.org";

/// Router over a fresh migrated in-memory database, plus a handle on that
/// database for seeding and assertions.
pub async fn build_test_app() -> anyhow::Result<(Router, DatabaseConnection)> {
    let db = models::db::connect_with_config(&models::db::in_memory_config()).await?;
    models::db::migrate(&db).await?;
    let state = ServerState::new(db.clone(), AssetUrls::new(BASE, "storage"));
    Ok((routes::build_router(state, CorsLayer::very_permissive()), db))
}

/// Router whose database pool has already been closed, so every storage
/// call fails.
pub async fn build_app_with_closed_db() -> anyhow::Result<Router> {
    let (app, db) = build_test_app().await?;
    db.close_by_ref().await?;
    Ok(app)
}

pub async fn seed_ave_maria(db: &DatabaseConnection) -> anyhow::Result<partition::Model> {
    let created = partition::create(
        db,
        NewPartition {
            titre: "Ave Maria".into(),
            categorie: "Sacred".into(),
            pdf_url: "ave.pdf".into(),
            audio_url: "ave.mp3".into(),
            version: Some(1),
        },
    )
    .await?;
    Ok(created)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
