//! Tests for the character, planet and vehicle endpoints.

use holocron::server::controller::{
    character::{get_character, get_characters},
    planet::{get_planet, get_planets},
    vehicle::{get_vehicle, get_vehicles},
};

use super::*;

mod character {
    use super::*;

    /// Expect 200 with the stored attributes as strings
    #[tokio::test]
    async fn lists_characters() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Character)
            .with_mock_character()
            .build()
            .await?;

        let resp = into_response(get_characters(State(test.to_app_state())).await);

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["results"][0]["name"], "Luke Skywalker");
        assert_eq!(body["results"][0]["height"], "172");

        Ok(())
    }

    /// Expect 404 with a kind-specific message for a missing character
    #[tokio::test]
    async fn returns_not_found_for_missing_character() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Character)?;

        let resp = into_response(get_character(State(test.to_app_state()), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "Character not found");

        Ok(())
    }
}

mod planet {
    use super::*;

    /// Expect 200 with the requested planet
    #[tokio::test]
    async fn gets_single_planet() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Planet)
            .with_mock_planet()
            .build()
            .await?;

        let resp = into_response(get_planet(State(test.to_app_state()), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["msg"], "ok");
        assert_eq!(body["result"]["name"], "Tatooine");

        Ok(())
    }

    /// Expect 404 when no planets exist
    #[tokio::test]
    async fn returns_not_found_for_empty_table() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Planet)?;

        let resp = into_response(get_planets(State(test.to_app_state())).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "Planets not found");

        Ok(())
    }
}

mod vehicle {
    use super::*;

    /// Expect vehicle attributes such as passengers in the listing
    #[tokio::test]
    async fn lists_vehicles() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Vehicle)
            .with_mock_vehicle()
            .build()
            .await?;

        let resp = into_response(get_vehicles(State(test.to_app_state())).await);

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["results"][0]["passangers"], "30");

        Ok(())
    }

    /// Expect 404 for a missing vehicle
    #[tokio::test]
    async fn returns_not_found_for_missing_vehicle() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Vehicle)?;

        let resp = into_response(get_vehicle(State(test.to_app_state()), Path(3)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "Vehicle not found");

        Ok(())
    }
}
