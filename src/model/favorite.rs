use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteVehicleDto {
    pub id: i32,
    pub user_id: i32,
    pub vehicle_id: i32,
}

/// A newly created favorite link of any kind
///
/// Serialized without a tag, so the kind is identified by which of
/// `character_id`, `planet_id` or `vehicle_id` is present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FavoriteDto {
    Character(FavoriteCharacterDto),
    Planet(FavoritePlanetDto),
    Vehicle(FavoriteVehicleDto),
}

/// Every favorite link owned by a single user, grouped by kind
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub favorites_characters: Vec<FavoriteCharacterDto>,
    pub favorites_planets: Vec<FavoritePlanetDto>,
    pub favorites_vehicles: Vec<FavoriteVehicleDto>,
}

impl UserFavoritesDto {
    /// True when the user has no favorites of any kind
    pub fn is_empty(&self) -> bool {
        self.favorites_characters.is_empty()
            && self.favorites_planets.is_empty()
            && self.favorites_vehicles.is_empty()
    }
}

/// Request body for creating a favorite link
///
/// IDs are accepted as JSON numbers or numeric strings. A `null` or empty string
/// counts as absent. When more than one target ID is supplied the link is created
/// for the first present one in the order `character_id`, `planet_id`, `vehicle_id`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteDto {
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<serde_json::Value>,
    #[schema(value_type = Option<i32>)]
    pub character_id: Option<serde_json::Value>,
    #[schema(value_type = Option<i32>)]
    pub planet_id: Option<serde_json::Value>,
    #[schema(value_type = Option<i32>)]
    pub vehicle_id: Option<serde_json::Value>,
}

impl From<entity::favorite_character::Model> for FavoriteCharacterDto {
    fn from(favorite: entity::favorite_character::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            character_id: favorite.character_id,
        }
    }
}

impl From<entity::favorite_planet::Model> for FavoritePlanetDto {
    fn from(favorite: entity::favorite_planet::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
        }
    }
}

impl From<entity::favorite_vehicle::Model> for FavoriteVehicleDto {
    fn from(favorite: entity::favorite_vehicle::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            vehicle_id: favorite.vehicle_id,
        }
    }
}
