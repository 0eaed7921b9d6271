use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::FavoriteVehicleModel;

pub struct FavoriteVehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteVehicleRepository<'a, C> {
    /// Creates a new instance of [`FavoriteVehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a link between a user and a vehicle
    ///
    /// Fails with a foreign key error if either row does not exist.
    pub async fn create(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<FavoriteVehicleModel, DbErr> {
        let favorite = entity::favorite_vehicle::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Every vehicle link owned by the user, ordered by link ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteVehicleModel>, DbErr> {
        entity::prelude::FavoriteVehicle::find()
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// The oldest link between the user and the vehicle, if any
    pub async fn find_by_user_and_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<Option<FavoriteVehicleModel>, DbErr> {
        entity::prelude::FavoriteVehicle::find()
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .filter(entity::favorite_vehicle::Column::VehicleId.eq(vehicle_id))
            .order_by_asc(entity::favorite_vehicle::Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a single link by its ID
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteVehicle::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every vehicle link owned by the user
    pub async fn delete_many_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::FavoriteVehicle::delete_many()
            .filter(entity::favorite_vehicle::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
