//! Fixtures for the reference tables: characters, planets and vehicles.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{CharacterModel, PlanetModel, VehicleModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a character with the values of [`factory::mock_character_model`]
    pub async fn insert_mock_character(&self) -> Result<CharacterModel, TestError> {
        let character = factory::mock_character_model(0);

        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(character.name),
                height: ActiveValue::Set(character.height),
                mass: ActiveValue::Set(character.mass),
                hair_color: ActiveValue::Set(character.hair_color),
                skin_color: ActiveValue::Set(character.skin_color),
                eye_color: ActiveValue::Set(character.eye_color),
                birth_year: ActiveValue::Set(character.birth_year),
                gender: ActiveValue::Set(character.gender),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a planet with the values of [`factory::mock_planet_model`]
    pub async fn insert_mock_planet(&self) -> Result<PlanetModel, TestError> {
        let planet = factory::mock_planet_model(0);

        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(planet.name),
                rotation_period: ActiveValue::Set(planet.rotation_period),
                orbital_period: ActiveValue::Set(planet.orbital_period),
                diameter: ActiveValue::Set(planet.diameter),
                climate: ActiveValue::Set(planet.climate),
                gravity: ActiveValue::Set(planet.gravity),
                terrain: ActiveValue::Set(planet.terrain),
                surface_water: ActiveValue::Set(planet.surface_water),
                population: ActiveValue::Set(planet.population),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a vehicle with the values of [`factory::mock_vehicle_model`]
    pub async fn insert_mock_vehicle(&self) -> Result<VehicleModel, TestError> {
        let vehicle = factory::mock_vehicle_model(0);

        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(vehicle.name),
                model: ActiveValue::Set(vehicle.model),
                cost_in_credits: ActiveValue::Set(vehicle.cost_in_credits),
                length: ActiveValue::Set(vehicle.length),
                max_atmosphering_speed: ActiveValue::Set(vehicle.max_atmosphering_speed),
                passengers: ActiveValue::Set(vehicle.passengers),
                cargo_capacity: ActiveValue::Set(vehicle.cargo_capacity),
                vehicle_class: ActiveValue::Set(vehicle.vehicle_class),
                manufacturer: ActiveValue::Set(vehicle.manufacturer),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
