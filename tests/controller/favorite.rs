//! Tests for the favorite endpoints.

use holocron::{
    model::favorite::AddFavoriteDto,
    server::controller::favorite::{
        add_favorite, delete_favorite_character, delete_favorite_planet, delete_favorite_vehicle,
        get_user_favorites,
    },
};
use serde_json::json;

use super::*;

fn payload(value: serde_json::Value) -> Json<AddFavoriteDto> {
    Json(serde_json::from_value(value).unwrap())
}

mod get_user_favorites {
    use super::*;

    /// Expect 200 with all three groups present
    #[tokio::test]
    async fn lists_favorites_by_kind() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .with_mock_user(1)
            .with_mock_planet()
            .with_favorite_planet(1, 1)
            .build()
            .await?;

        let resp = into_response(get_user_favorites(State(test.to_app_state()), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["favorites_characters"], json!([]));
        assert_eq!(
            body["favorites_planets"],
            json!([{"id": 1, "user_id": 1, "planet_id": 1}])
        );
        assert_eq!(body["favorites_vehicles"], json!([]));

        Ok(())
    }

    /// Expect 404 when the user has no favorites at all
    #[tokio::test]
    async fn returns_not_found_without_favorites() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .with_mock_user(1)
            .build()
            .await?;

        let resp = into_response(get_user_favorites(State(test.to_app_state()), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "No favorites found for user");

        Ok(())
    }

    /// Expect 404 naming the user when the user does not exist
    #[tokio::test]
    async fn returns_not_found_for_missing_user() -> Result<(), TestError> {
        let test = test_setup_with_favorite_tables!()?;

        let resp = into_response(get_user_favorites(State(test.to_app_state()), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "User not found");

        Ok(())
    }
}

mod add_favorite {
    use super::*;

    /// Expect 201 with the created link
    #[tokio::test]
    async fn creates_favorite_vehicle() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .with_mock_user(1)
            .with_mock_vehicle()
            .build()
            .await?;

        let resp = into_response(
            add_favorite(
                State(test.to_app_state()),
                payload(json!({"user_id": 1, "vehicle_id": "1"})),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(resp).await,
            json!({"id": 1, "user_id": 1, "vehicle_id": 1})
        );

        Ok(())
    }

    /// Expect 400 when user_id is missing, even with a valid target
    #[tokio::test]
    async fn rejects_missing_user_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .with_mock_character()
            .build()
            .await?;

        let resp = into_response(
            add_favorite(
                State(test.to_app_state()),
                payload(json!({"character_id": 1})),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"], "Missing user_id");

        Ok(())
    }

    /// Expect 400 when no target ID is supplied
    #[tokio::test]
    async fn rejects_missing_target() -> Result<(), TestError> {
        let test = test_setup_with_favorite_tables!()?;

        let resp = into_response(
            add_favorite(State(test.to_app_state()), payload(json!({"user_id": 1}))).await,
        );

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    /// Expect 404 when the target does not exist
    #[tokio::test]
    async fn returns_not_found_for_missing_target() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .with_mock_user(1)
            .build()
            .await?;

        let resp = into_response(
            add_favorite(
                State(test.to_app_state()),
                payload(json!({"user_id": 1, "character_id": 5})),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "Character not found");

        Ok(())
    }
}

mod delete_favorite {
    use super::*;

    /// Expect 200 for each kind when the link exists
    #[tokio::test]
    async fn deletes_each_kind() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .with_mock_user(1)
            .with_mock_character()
            .with_mock_planet()
            .with_mock_vehicle()
            .with_favorite_character(1, 1)
            .with_favorite_planet(1, 1)
            .with_favorite_vehicle(1, 1)
            .build()
            .await?;

        let resp = into_response(
            delete_favorite_character(State(test.to_app_state()), Path((1, 1))).await,
        );
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["message"], "Favorite character deleted");

        let resp =
            into_response(delete_favorite_planet(State(test.to_app_state()), Path((1, 1))).await);
        assert_eq!(resp.status(), StatusCode::OK);

        let resp =
            into_response(delete_favorite_vehicle(State(test.to_app_state()), Path((1, 1))).await);
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = into_response(get_user_favorites(State(test.to_app_state()), Path(1)).await);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect distinct 404 messages for a missing link and a missing entity
    #[tokio::test]
    async fn distinguishes_missing_link_from_missing_entity() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .with_mock_user(1)
            .with_mock_planet()
            .build()
            .await?;

        let missing_link =
            into_response(delete_favorite_planet(State(test.to_app_state()), Path((1, 1))).await);
        let missing_entity =
            into_response(delete_favorite_planet(State(test.to_app_state()), Path((1, 2))).await);

        assert_eq!(missing_link.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing_entity.status(), StatusCode::NOT_FOUND);

        let missing_link = body_json(missing_link).await;
        let missing_entity = body_json(missing_entity).await;
        assert_eq!(missing_link["error"], "Favorite planet not found");
        assert_eq!(missing_entity["error"], "Planet not found");

        Ok(())
    }

    /// Expect 404 naming the user when the user does not exist
    #[tokio::test]
    async fn returns_not_found_for_missing_user() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .with_mock_vehicle()
            .build()
            .await?;

        let resp =
            into_response(delete_favorite_vehicle(State(test.to_app_state()), Path((1, 1))).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "User not found");

        Ok(())
    }
}
