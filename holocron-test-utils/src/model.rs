//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate to keep fixture signatures short.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for the favorite character link model.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for the favorite planet link model.
pub type FavoritePlanetModel = entity::favorite_planet::Model;

/// Type alias for the favorite vehicle link model.
pub type FavoriteVehicleModel = entity::favorite_vehicle::Model;
