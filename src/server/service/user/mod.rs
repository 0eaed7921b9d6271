//! User service layer.
//!
//! Read access to users and user deletion. Deleting a user also removes every favorite
//! link the user owns, since those rows would otherwise block the delete.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserDto,
    server::{
        data::{
            favorite::{
                character::FavoriteCharacterRepository, planet::FavoritePlanetRepository,
                vehicle::FavoriteVehicleRepository,
            },
            user::UserRepository,
        },
        error::Error,
    },
};

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every user ordered by ID, possibly empty
    pub async fn get_all(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo.get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Deletes a user along with every favorite link they own.
    ///
    /// The existence check and all deletes run in a single transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User and their favorites were deleted
    /// - `Ok(false)` - User does not exist, nothing was changed
    /// - `Err(Error::DbErr)` - Database operation failed, the transaction is rolled back
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Ok(false);
        }

        let characters = FavoriteCharacterRepository::new(&txn)
            .delete_many_by_user_id(user_id)
            .await?;
        let planets = FavoritePlanetRepository::new(&txn)
            .delete_many_by_user_id(user_id)
            .await?;
        let vehicles = FavoriteVehicleRepository::new(&txn)
            .delete_many_by_user_id(user_id)
            .await?;

        let result = user_repo.delete(user_id).await?;

        txn.commit().await?;

        let favorites_removed =
            characters.rows_affected + planets.rows_affected + vehicles.rows_affected;
        tracing::info!(
            user_id = %user_id,
            favorites_removed = %favorites_removed,
            "Deleted user"
        );

        Ok(result.rows_affected > 0)
    }
}
