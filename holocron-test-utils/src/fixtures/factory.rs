//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction. The
//! fixture inserters reuse them so stored rows and unit-test models share the same values.

use crate::model::{CharacterModel, PlanetModel, UserModel, VehicleModel};

/// Create a mock user model.
///
/// `n` is used for the ID and to keep the email unique, e.g. `user1@holocron.test`.
pub fn mock_user_model(n: i32) -> UserModel {
    UserModel {
        id: n,
        name: format!("Test User {}", n),
        email: format!("user{}@holocron.test", n),
        password: "hunter2".to_string(),
    }
}

/// Create a mock character model with Luke Skywalker's attributes.
pub fn mock_character_model(id: i32) -> CharacterModel {
    CharacterModel {
        id,
        name: "Luke Skywalker".to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        eye_color: "blue".to_string(),
        birth_year: "19BBY".to_string(),
        gender: "male".to_string(),
    }
}

/// Create a mock planet model with Tatooine's attributes.
pub fn mock_planet_model(id: i32) -> PlanetModel {
    PlanetModel {
        id,
        name: "Tatooine".to_string(),
        rotation_period: "23".to_string(),
        orbital_period: "304".to_string(),
        diameter: "10465".to_string(),
        climate: "arid".to_string(),
        gravity: "1 standard".to_string(),
        terrain: "desert".to_string(),
        surface_water: "1".to_string(),
        population: "200000".to_string(),
    }
}

/// Create a mock vehicle model with the Sand Crawler's attributes.
pub fn mock_vehicle_model(id: i32) -> VehicleModel {
    VehicleModel {
        id,
        name: "Sand Crawler".to_string(),
        model: "Digger Crawler".to_string(),
        cost_in_credits: "150000".to_string(),
        length: "36.8".to_string(),
        max_atmosphering_speed: "30".to_string(),
        passengers: "30".to_string(),
        cargo_capacity: "50000".to_string(),
        vehicle_class: "wheeled".to_string(),
        manufacturer: "Corellia Mining Corporation".to_string(),
    }
}
