//! End-to-end scenarios through the full router.

use axum::http::{Method, StatusCode};
use holocron_test_utils::prelude::*;
use serde_json::json;

use crate::util::{body_json, send, TestContextExt};

/// Expect add, list, delete and list again to walk a favorite through its lifecycle
#[tokio::test]
async fn favorite_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user(1)
        .with_mock_character()
        .with_mock_character()
        .build()
        .await?;
    let app = test.app();

    let resp = send(
        &app,
        Method::POST,
        "/favorites",
        Some(json!({"user_id": 1, "character_id": 2})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({"id": 1, "user_id": 1, "character_id": 2})
    );

    let resp = send(&app, Method::GET, "/favorites/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await["favorites_characters"],
        json!([{"id": 1, "user_id": 1, "character_id": 2}])
    );

    let resp = send(&app, Method::DELETE, "/favorite/character/1/2", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, Method::GET, "/favorites/1", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, Method::DELETE, "/favorite/character/1/2", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect each add call to be listed once, duplicates included
#[tokio::test]
async fn lists_duplicate_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user(1)
        .with_mock_planet()
        .build()
        .await?;
    let app = test.app();

    for _ in 0..3 {
        let resp = send(
            &app,
            Method::POST,
            "/favorites",
            Some(json!({"user_id": 1, "planet_id": 1})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = send(&app, Method::GET, "/favorites/1", None).await;
    let body = body_json(resp).await;
    assert_eq!(body["favorites_planets"].as_array().map(Vec::len), Some(3));

    Ok(())
}

/// Expect a character link only when every target ID is supplied
#[tokio::test]
async fn prefers_character_target() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user(1)
        .with_mock_character()
        .with_mock_planet()
        .with_mock_vehicle()
        .build()
        .await?;
    let app = test.app();

    let resp = send(
        &app,
        Method::POST,
        "/favorites",
        Some(json!({"user_id": 1, "character_id": 1, "planet_id": 1, "vehicle_id": 1})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(body_json(resp).await.get("character_id").is_some());

    let body = body_json(send(&app, Method::GET, "/favorites/1", None).await).await;
    assert_eq!(body["favorites_characters"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["favorites_planets"], json!([]));
    assert_eq!(body["favorites_vehicles"], json!([]));

    Ok(())
}

/// Expect 400 for a body without user_id
#[tokio::test]
async fn rejects_body_without_user_id() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;
    let app = test.app();

    let resp = send(
        &app,
        Method::POST,
        "/favorites",
        Some(json!({"character_id": 1, "planet_id": 1})),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 with a JSON error body for non-numeric path IDs
#[tokio::test]
async fn rejects_non_numeric_path_id() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;
    let app = test.app();

    for (method, uri) in [
        (Method::GET, "/users/luke"),
        (Method::GET, "/characters/abc"),
        (Method::DELETE, "/favorite/character/1/x"),
    ] {
        let resp = send(&app, method, uri, None).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(resp.headers()["content-type"], "application/json");
        let body = body_json(resp).await;
        assert!(body["error"].is_string(), "{uri}: {body}");
    }

    Ok(())
}

/// Expect 400 with a JSON error body when the favorite body is not an object
#[tokio::test]
async fn rejects_non_object_favorite_body() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;
    let app = test.app();

    for payload in [json!([]), json!(null), json!("luke")] {
        let resp = send(&app, Method::POST, "/favorites", Some(payload.clone())).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(resp.headers()["content-type"], "application/json");
        let body = body_json(resp).await;
        assert!(body["error"].is_string(), "{payload}: {body}");
    }

    Ok(())
}

/// Expect deleting a user to also drop their favorites
#[tokio::test]
async fn deleting_user_removes_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user(1)
        .with_mock_vehicle()
        .with_favorite_vehicle(1, 1)
        .build()
        .await?;
    let app = test.app();

    let resp = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, Method::GET, "/favorites/1", None).await;
    assert_eq!(body_json(resp).await["error"], "User not found");

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = test.app();

    let resp = send(&app, Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["paths"].get("/favorites").is_some());

    Ok(())
}
