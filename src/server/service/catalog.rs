//! Read access to the static reference tables.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::{
    model::catalog::{CharacterDto, PlanetDto, VehicleDto},
    server::{
        data::{character::CharacterRepository, planet::PlanetRepository, vehicle::VehicleRepository},
        error::Error,
        model::kind::EntityKind,
    },
};

pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?;

        Ok(character.map(CharacterDto::from))
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet = PlanetRepository::new(self.db).get_by_id(planet_id).await?;

        Ok(planet.map(PlanetDto::from))
    }

    pub async fn get_vehicles(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicles = VehicleRepository::new(self.db).get_all().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    pub async fn get_vehicle(&self, vehicle_id: i32) -> Result<Option<VehicleDto>, Error> {
        let vehicle = VehicleRepository::new(self.db).get_by_id(vehicle_id).await?;

        Ok(vehicle.map(VehicleDto::from))
    }
}

/// Checks whether the reference row of the given kind exists
///
/// Generic over the connection so the favorite service can run it inside a transaction.
pub async fn entity_exists<C: ConnectionTrait>(
    db: &C,
    kind: EntityKind,
    entity_id: i32,
) -> Result<bool, DbErr> {
    let exists = match kind {
        EntityKind::Character => CharacterRepository::new(db)
            .get_by_id(entity_id)
            .await?
            .is_some(),
        EntityKind::Planet => PlanetRepository::new(db)
            .get_by_id(entity_id)
            .await?
            .is_some(),
        EntityKind::Vehicle => VehicleRepository::new(db)
            .get_by_id(entity_id)
            .await?
            .is_some(),
    };

    Ok(exists)
}
