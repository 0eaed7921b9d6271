use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::PlanetModel;

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Every planet, ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::prelude::*;

    use crate::server::data::planet::PlanetRepository;

    /// Expect the stored planet to be found by ID, and listed
    #[tokio::test]
    async fn finds_and_lists_planets() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Planet)?;
        let planet_model = test.catalog().insert_mock_planet().await?;

        let planet_repo = PlanetRepository::new(&test.db);

        assert_eq!(
            planet_repo.get_by_id(planet_model.id).await?,
            Some(planet_model.clone())
        );
        assert_eq!(planet_repo.get_all().await?, vec![planet_model]);

        Ok(())
    }

    /// Expect Ok(None) when planet is not found
    #[tokio::test]
    async fn returns_none_for_nonexistent_planet() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Planet)?;

        let planet_repo = PlanetRepository::new(&test.db);
        let result = planet_repo.get_by_id(1).await;

        assert!(matches!(result, Ok(None)));

        Ok(())
    }
}
