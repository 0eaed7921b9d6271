//! Tests for the user endpoints.

use holocron::server::controller::user::{delete_user, get_user, get_users};

use super::*;

/// Expect 200 with every user and no password field
#[tokio::test]
async fn lists_users_without_passwords() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_mock_user(1)
        .with_mock_user(2)
        .build()
        .await?;

    let resp = into_response(get_users(State(test.to_app_state())).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["msg"], "ok");
    assert_eq!(body["results"].as_array().map(Vec::len), Some(2));
    assert!(body["results"][0].get("password").is_none());

    Ok(())
}

/// Expect 404 when no users exist
#[tokio::test]
async fn returns_not_found_for_empty_user_table() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let resp = into_response(get_users(State(test.to_app_state())).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Users not found");

    Ok(())
}

/// Expect 200 with the requested user
#[tokio::test]
async fn gets_single_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_mock_user(1)
        .build()
        .await?;

    let resp = into_response(get_user(State(test.to_app_state()), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["result"]["email"], "user1@holocron.test");

    Ok(())
}

/// Expect 404 for a user that does not exist
#[tokio::test]
async fn returns_not_found_for_missing_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let resp = into_response(get_user(State(test.to_app_state()), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "User not found");

    Ok(())
}

/// Expect 200 on delete and 404 when deleting again
#[tokio::test]
async fn deletes_user_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user(1)
        .with_mock_character()
        .with_favorite_character(1, 1)
        .build()
        .await?;

    let resp = into_response(delete_user(State(test.to_app_state()), Path(1)).await);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["message"], "User deleted");

    let resp = into_response(delete_user(State(test.to_app_state()), Path(1)).await);
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 with a diagnostic message when the tables are missing
#[tokio::test]
async fn returns_internal_error_for_store_fault() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = into_response(get_users(State(test.to_app_state())).await);

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");
    assert!(body["message"].is_string());

    Ok(())
}
