use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20240902_000001_create_user_table::User,
    m20240902_000004_create_vehicle_table::Vehicle,
};

static IDX_FAVORITE_VEHICLE_USER_ID: &str = "idx_favorite_vehicle_user_id";
static FK_FAVORITE_VEHICLE_USER_ID: &str = "fk_favorite_vehicle_user_id";
static FK_FAVORITE_VEHICLE_VEHICLE_ID: &str = "fk_favorite_vehicle_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline since SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(FavoriteVehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteVehicle::Id))
                    .col(integer(FavoriteVehicle::UserId))
                    .col(integer(FavoriteVehicle::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_VEHICLE_USER_ID)
                            .from(FavoriteVehicle::Table, FavoriteVehicle::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_VEHICLE_VEHICLE_ID)
                            .from(FavoriteVehicle::Table, FavoriteVehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_VEHICLE_USER_ID)
                    .table(FavoriteVehicle::Table)
                    .col(FavoriteVehicle::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_VEHICLE_USER_ID)
                    .table(FavoriteVehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteVehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteVehicle {
    Table,
    Id,
    UserId,
    VehicleId,
}
