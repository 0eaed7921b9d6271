use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len(Vehicle::Name, 120))
                    .col(string_len(Vehicle::Model, 120))
                    .col(string_len(Vehicle::CostInCredits, 120))
                    .col(string_len(Vehicle::Length, 120))
                    .col(string_len(Vehicle::MaxAtmospheringSpeed, 120))
                    .col(string_len(Vehicle::Passengers, 120))
                    .col(string_len(Vehicle::CargoCapacity, 120))
                    .col(string_len(Vehicle::VehicleClass, 120))
                    .col(string_len(Vehicle::Manufacturer, 120))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    CostInCredits,
    Length,
    MaxAtmospheringSpeed,
    Passengers,
    CargoCapacity,
    VehicleClass,
    Manufacturer,
}
