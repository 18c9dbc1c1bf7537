//! HTTP-level integration tests for the tag endpoints, including the
//! in-use delete guard and the duplicate-name conflict.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_pin, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_the_seed_tags(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/tags").await;
    assert_eq!(response.status(), StatusCode::OK);

    let tags = body_json(response).await;
    let names: Vec<_> = tags
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["culture", "education", "food", "health", "nature", "transport"]
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_tag_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/tags",
        serde_json::json!({ "name": "heritage", "color": "#AA00AA" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let tag = body_json(response).await;
    assert!(tag["id"].is_string());
    assert_eq!(tag["name"], "heritage");
    assert_eq!(tag["color"], "#AA00AA");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_tag_name_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/tags",
        serde_json::json!({ "name": "health", "color": "#000000" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_tag_color(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/tags",
            serde_json::json!({ "name": "rivers", "color": "#0000FF" }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/tags/{id}"),
        serde_json::json!({ "color": "#00FFFF" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["name"], "rivers");
    assert_eq!(updated["color"], "#00FFFF");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_is_refused_while_a_pin_references_the_tag(pool: PgPool) {
    create_pin(&pool, "Clinic", "health").await;

    let app = common::build_test_app(pool.clone());
    let tags = body_json(get(app, "/api/tags").await).await;
    let health_id = tags
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == "health")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/tags/{health_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("health"));

    // The tag is still there.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/tags/{health_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_is_refused_for_a_supporting_tag_reference(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/pins",
        serde_json::json!({
            "title": "Library",
            "position": [51.0, 17.0],
            "mainTag": "education",
            "supportingTags": ["culture"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let tags = body_json(get(app, "/api/tags").await).await;
    let culture_id = tags
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == "culture")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/tags/{culture_id}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_unreferenced_tag_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/tags",
            serde_json::json!({ "name": "temporary", "color": "#123456" }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/tags/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/tags/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
