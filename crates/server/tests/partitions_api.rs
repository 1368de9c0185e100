//! HTTP-level tests for the partition routes, driven through the real router.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, seed_ave_maria, BASE};
use serde_json::json;

#[tokio::test]
async fn list_is_empty_array_on_empty_table() -> anyhow::Result<()> {
    let (app, _db) = build_test_app().await?;
    let res = get(app, "/partitions").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!([]));
    Ok(())
}

#[tokio::test]
async fn ave_maria_scenario() -> anyhow::Result<()> {
    let (app, db) = build_test_app().await?;
    let seeded = seed_ave_maria(&db).await?;

    let res = get(app.clone(), "/partitions").await;
    assert_eq!(res.status(), StatusCode::OK);
    let list = body_json(res).await;
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], seeded.id);
    assert_eq!(items[0]["titre"], "Ave Maria");
    assert_eq!(items[0]["categorie"], "Sacred");
    assert_eq!(items[0]["pdf_url"], format!("{BASE}/storage/ave.pdf"));
    assert_eq!(items[0]["audio_url"], format!("{BASE}/storage/ave.mp3"));
    assert_eq!(items[0]["version"], 1);
    assert_eq!(items[0]["is_favorite"], false);
    assert!(items[0]["created_at"].is_string());
    assert!(items[0]["updated_at"].is_string());

    let res = post_json(app.clone(), &format!("/partitions/{}/favorite", seeded.id), r#"{"is_favorite": true}"#).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({ "success": true }));

    let list = body_json(get(app, "/partitions").await).await;
    assert_eq!(list[0]["is_favorite"], true);

    // storage keeps the relative paths
    let row = models::partition::find(&db, seeded.id).await?.unwrap();
    assert_eq!(row.pdf_url, "ave.pdf");
    assert!(row.is_favorite);
    Ok(())
}

#[tokio::test]
async fn favorite_can_be_cleared_with_a_boolean_like_value() -> anyhow::Result<()> {
    let (app, db) = build_test_app().await?;
    let seeded = seed_ave_maria(&db).await?;
    let uri = format!("/partitions/{}/favorite", seeded.id);

    let res = post_json(app.clone(), &uri, r#"{"is_favorite": "1"}"#).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(models::partition::find(&db, seeded.id).await?.unwrap().is_favorite);

    let res = post_json(app, &uri, r#"{"is_favorite": 0}"#).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(!models::partition::find(&db, seeded.id).await?.unwrap().is_favorite);
    Ok(())
}

#[tokio::test]
async fn favorite_on_id_beyond_32_bits_is_404() -> anyhow::Result<()> {
    let (app, db) = build_test_app().await?;
    seed_ave_maria(&db).await?;

    let res = post_json(app, "/partitions/99999999999/favorite", r#"{"is_favorite": true}"#).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await["error"], "Not Found");
    assert!(!models::partition::list(&db).await?[0].is_favorite);
    Ok(())
}

#[tokio::test]
async fn favorite_on_unknown_id_is_404_and_changes_nothing() -> anyhow::Result<()> {
    let (app, db) = build_test_app().await?;
    seed_ave_maria(&db).await?;
    let before = models::partition::list(&db).await?;

    let res = post_json(app, "/partitions/999/favorite", r#"{"is_favorite": true}"#).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = body_json(res).await;
    assert_eq!(body["error"], "Not Found");

    assert_eq!(models::partition::list(&db).await?, before);
    Ok(())
}

#[tokio::test]
async fn malformed_requests_are_client_errors() -> anyhow::Result<()> {
    let (app, db) = build_test_app().await?;
    let seeded = seed_ave_maria(&db).await?;
    let uri = format!("/partitions/{}/favorite", seeded.id);

    let res = post_json(app.clone(), "/partitions/abc/favorite", r#"{"is_favorite": true}"#).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"], "Invalid Path");

    let res = post_json(app.clone(), &uri, "{not json").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = post_json(app.clone(), &uri, r#"{}"#).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = post_json(app, &uri, r#"{"is_favorite": "maybe"}"#).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(res).await["error"], "Invalid Body");

    assert!(!models::partition::find(&db, seeded.id).await?.unwrap().is_favorite);
    Ok(())
}

#[tokio::test]
async fn routes_are_also_served_under_api_prefix() -> anyhow::Result<()> {
    let (app, db) = build_test_app().await?;
    let seeded = seed_ave_maria(&db).await?;

    let res = post_json(app.clone(), &format!("/api/partitions/{}/favorite", seeded.id), r#"{"is_favorite": true}"#).await;
    assert_eq!(res.status(), StatusCode::OK);

    let list = body_json(get(app, "/api/partitions").await).await;
    assert_eq!(list[0]["is_favorite"], true);
    Ok(())
}
