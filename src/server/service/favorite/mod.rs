//! Favorite link service layer.
//!
//! Validates favorite requests, resolves which table a request targets, and runs the
//! existence checks and the write in one transaction so a missing user or entity is
//! reported as a 404 rather than a store fault.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};
use serde_json::Value;

use crate::{
    model::favorite::{AddFavoriteDto, FavoriteDto, UserFavoritesDto},
    server::{
        data::{
            favorite::{
                character::FavoriteCharacterRepository, planet::FavoritePlanetRepository,
                vehicle::FavoriteVehicleRepository,
            },
            user::UserRepository,
        },
        error::{favorite::FavoriteError, not_found::NotFoundError, Error},
        model::kind::EntityKind,
        service::catalog::entity_exists,
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every favorite link owned by a user, grouped by kind.
    ///
    /// Each group is ordered by link ID and may be empty. Deciding whether an entirely
    /// empty result is an error is left to the caller.
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - The user's links
    /// - `Err(Error::NotFound)` - The user does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_for_user(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::User(user_id).into());
        }

        let characters = FavoriteCharacterRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;
        let planets = FavoritePlanetRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;
        let vehicles = FavoriteVehicleRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(UserFavoritesDto {
            favorites_characters: characters.into_iter().map(Into::into).collect(),
            favorites_planets: planets.into_iter().map(Into::into).collect(),
            favorites_vehicles: vehicles.into_iter().map(Into::into).collect(),
        })
    }

    /// Creates a favorite link from a request body.
    ///
    /// `user_id` is validated first. The target is the first present ID in the order
    /// `character_id`, `planet_id`, `vehicle_id`; any others are ignored. Duplicate links
    /// are allowed and produce a new row.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created link
    /// - `Err(Error::FavoriteError)` - Missing or malformed IDs, or the insert hit a foreign
    ///   key violation because a row was removed concurrently
    /// - `Err(Error::NotFound)` - The user or the target entity does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(&self, payload: AddFavoriteDto) -> Result<FavoriteDto, Error> {
        let user_id =
            parse_id("user_id", payload.user_id.as_ref())?.ok_or(FavoriteError::MissingUserId)?;
        let (kind, entity_id) = resolve_target(&payload)?;

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError::User(user_id).into());
        }

        if !entity_exists(&txn, kind, entity_id).await? {
            return Err(NotFoundError::Entity {
                kind,
                id: entity_id,
            }
            .into());
        }

        let favorite = create_link(&txn, kind, user_id, entity_id)
            .await
            .map_err(|err| map_insert_error(kind, err))?;

        txn.commit().await?;

        tracing::debug!(
            kind = %kind,
            user_id = %user_id,
            entity_id = %entity_id,
            "Created favorite"
        );

        Ok(favorite)
    }

    /// Deletes a single favorite link between a user and an entity.
    ///
    /// Checks run in order inside one transaction: the user exists, the entity exists,
    /// then the link exists. Only the oldest matching link is removed when duplicates exist.
    ///
    /// # Returns
    /// - `Ok(())` - One link was deleted
    /// - `Err(Error::NotFound)` - The user, the entity or the link does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, user_id: i32, kind: EntityKind, entity_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(NotFoundError::User(user_id).into());
        }

        if !entity_exists(&txn, kind, entity_id).await? {
            return Err(NotFoundError::Entity {
                kind,
                id: entity_id,
            }
            .into());
        }

        let link_id = match kind {
            EntityKind::Character => FavoriteCharacterRepository::new(&txn)
                .find_by_user_and_character(user_id, entity_id)
                .await?
                .map(|f| f.id),
            EntityKind::Planet => FavoritePlanetRepository::new(&txn)
                .find_by_user_and_planet(user_id, entity_id)
                .await?
                .map(|f| f.id),
            EntityKind::Vehicle => FavoriteVehicleRepository::new(&txn)
                .find_by_user_and_vehicle(user_id, entity_id)
                .await?
                .map(|f| f.id),
        };

        let Some(link_id) = link_id else {
            return Err(NotFoundError::Favorite {
                kind,
                user_id,
                entity_id,
            }
            .into());
        };

        match kind {
            EntityKind::Character => {
                FavoriteCharacterRepository::new(&txn).delete(link_id).await?
            }
            EntityKind::Planet => FavoritePlanetRepository::new(&txn).delete(link_id).await?,
            EntityKind::Vehicle => FavoriteVehicleRepository::new(&txn).delete(link_id).await?,
        };

        txn.commit().await?;

        tracing::debug!(
            kind = %kind,
            user_id = %user_id,
            entity_id = %entity_id,
            "Deleted favorite"
        );

        Ok(())
    }
}

async fn create_link<C: ConnectionTrait>(
    db: &C,
    kind: EntityKind,
    user_id: i32,
    entity_id: i32,
) -> Result<FavoriteDto, DbErr> {
    let favorite = match kind {
        EntityKind::Character => FavoriteDto::Character(
            FavoriteCharacterRepository::new(db)
                .create(user_id, entity_id)
                .await?
                .into(),
        ),
        EntityKind::Planet => FavoriteDto::Planet(
            FavoritePlanetRepository::new(db)
                .create(user_id, entity_id)
                .await?
                .into(),
        ),
        EntityKind::Vehicle => FavoriteDto::Vehicle(
            FavoriteVehicleRepository::new(db)
                .create(user_id, entity_id)
                .await?
                .into(),
        ),
    };

    Ok(favorite)
}

/// Reports foreign key failures on insert as a conflict, anything else as a store fault
fn map_insert_error(kind: EntityKind, err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(reason)) => {
            FavoriteError::ConstraintViolation { kind, reason }.into()
        }
        _ => err.into(),
    }
}

/// Picks the target kind and ID from the request, in [`EntityKind::PRIORITY`] order
fn resolve_target(payload: &AddFavoriteDto) -> Result<(EntityKind, i32), FavoriteError> {
    for kind in EntityKind::PRIORITY {
        let value = match kind {
            EntityKind::Character => payload.character_id.as_ref(),
            EntityKind::Planet => payload.planet_id.as_ref(),
            EntityKind::Vehicle => payload.vehicle_id.as_ref(),
        };

        if let Some(id) = parse_id(kind.id_field(), value)? {
            return Ok((kind, id));
        }
    }

    Err(FavoriteError::MissingTarget)
}

/// Reads an ID given as a JSON integer or a numeric string.
///
/// Absent, `null` and empty string values are `Ok(None)`. Anything else that is not an
/// integer in `i32` range is rejected.
fn parse_id(field: &'static str, value: Option<&Value>) -> Result<Option<i32>, FavoriteError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let invalid = || FavoriteError::InvalidId {
        field,
        value: value.to_string(),
    };

    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse::<i32>().map(Some).map_err(|_| invalid()),
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}
