use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::FavoriteCharacterModel;

pub struct FavoriteCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteCharacterRepository<'a, C> {
    /// Creates a new instance of [`FavoriteCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a link between a user and a character
    ///
    /// Fails with a foreign key error if either row does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Every character link owned by the user, ordered by link ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await
    }

    /// The oldest link between the user and the character, if any
    pub async fn find_by_user_and_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<FavoriteCharacterModel>, DbErr> {
        entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a single link by its ID
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every character link owned by the user
    pub async fn delete_many_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
