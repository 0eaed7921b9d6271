use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planet::Table)
                    .if_not_exists()
                    .col(pk_auto(Planet::Id))
                    .col(string_len(Planet::Name, 120))
                    .col(string_len(Planet::RotationPeriod, 120))
                    .col(string_len(Planet::OrbitalPeriod, 120))
                    .col(string_len(Planet::Diameter, 120))
                    .col(string_len(Planet::Climate, 120))
                    .col(string_len(Planet::Gravity, 120))
                    .col(string_len(Planet::Terrain, 120))
                    .col(string_len(Planet::SurfaceWater, 120))
                    .col(string_len(Planet::Population, 120))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Planet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Planet {
    Table,
    Id,
    Name,
    RotationPeriod,
    OrbitalPeriod,
    Diameter,
    Climate,
    Gravity,
    Terrain,
    SurfaceWater,
    Population,
}
