//! HTTP-level integration tests for the pin endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_pin, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create / read round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_pin_round_trips_through_the_wire_shape(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/pins",
        serde_json::json!({
            "title": "Village clinic",
            "position": [52.1, 19.0],
            "mainTag": "health",
            "supportingTags": [],
            "content": [{ "kind": "text", "value": "Open weekdays." }],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["id"].is_string());
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let id = created["id"].as_str().unwrap();
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/pins/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["title"], "Village clinic");
    assert_eq!(fetched["position"], serde_json::json!([52.1, 19.0]));
    assert_eq!(fetched["mainTag"], "health");
    assert_eq!(fetched["supportingTags"], serde_json::json!([]));
    assert_eq!(
        fetched["content"],
        serde_json::json!([{ "kind": "text", "value": "Open weekdays." }])
    );
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_pin_without_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/pins",
        serde_json::json!({ "position": [52.1, 19.0], "mainTag": "health" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_pin_with_out_of_range_position_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/pins",
        serde_json::json!({
            "title": "Nowhere",
            "position": [123.0, 19.0],
            "mainTag": "health",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("latitude"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_pin_with_unknown_content_kind_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/pins",
        serde_json::json!({
            "title": "Bad content",
            "position": [52.1, 19.0],
            "mainTag": "health",
            "content": [{ "kind": "audio", "value": "x" }],
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn title_only_update_preserves_the_rest_and_advances_updated_at(pool: PgPool) {
    let created = create_pin(&pool, "Old title", "health").await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/pins/{id}"),
        serde_json::json!({ "title": "New title" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["title"], "New title");
    assert_eq!(updated["position"], created["position"]);
    assert_eq!(updated["mainTag"], created["mainTag"]);
    assert_eq!(updated["supportingTags"], created["supportingTags"]);
    assert_eq!(updated["content"], created["content"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(
        updated["updatedAt"].as_str().unwrap() >= created["updatedAt"].as_str().unwrap(),
        "updatedAt must advance"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_pin_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/pins/00000000-0000-0000-0000-000000000000",
        serde_json::json!({ "title": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_pin_returns_204_then_404(pool: PgPool) {
    let created = create_pin(&pool, "Delete me", "food").await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/pins/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/pins/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing with tag filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_with_tag_matches_main_and_supporting_tags(pool: PgPool) {
    create_pin(&pool, "Clinic", "health").await;
    create_pin(&pool, "Cafe", "food").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/pins",
        serde_json::json!({
            "title": "Library",
            "position": [51.0, 17.0],
            "mainTag": "education",
            "supportingTags": ["health"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/pins").await).await;
    assert_eq!(all.as_array().unwrap().len(), 3);

    let app = common::build_test_app(pool);
    let filtered = body_json(get(app, "/api/pins?tag=health").await).await;
    let titles: Vec<_> = filtered
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Clinic", "Library"]);

    // The supporting tags made it onto the wire shape.
    let library = &filtered.as_array().unwrap()[1];
    assert_eq!(library["supportingTags"], serde_json::json!(["health"]));
}
