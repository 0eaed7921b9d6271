//! Database model type aliases.
//!
//! Short names for the SeaORM models in the `entity` crate, so signatures across
//! repositories and services don't repeat the full module paths.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `email` - Unique email address
/// - `password` - Opaque credential, never serialized
pub type UserModel = entity::user::Model;

/// Type alias for the character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the vehicle database model.
pub type VehicleModel = entity::vehicle::Model;

/// Type alias for the favorite character link model.
///
/// # Fields (from `entity::favorite_character::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `character_id` - Foreign key to the favorited character
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for the favorite planet link model.
pub type FavoritePlanetModel = entity::favorite_planet::Model;

/// Type alias for the favorite vehicle link model.
pub type FavoriteVehicleModel = entity::favorite_vehicle::Model;
