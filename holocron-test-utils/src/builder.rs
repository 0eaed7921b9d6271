//! Declarative test builder.
//!
//! The `TestBuilder` API configures a test database before execution. Calls are queued
//! and run in a fixed order during the final `build()` call, so rows are always inserted
//! after the tables they live in and favorites after the rows they reference.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::favorite_tables, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_favorite_tables: bool,

    // Database fixtures to insert
    users: Vec<i32>,
    characters: usize,
    planets: usize,
    vehicles: usize,
    favorite_characters: Vec<(i32, i32)>, // (user_id, character_id)
    favorite_planets: Vec<(i32, i32)>,    // (user_id, planet_id)
    favorite_vehicles: Vec<(i32, i32)>,   // (user_id, vehicle_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_favorite_tables: false,
            users: Vec::new(),
            characters: 0,
            planets: 0,
            vehicles: 0,
            favorite_characters: Vec::new(),
            favorite_planets: Vec::new(),
            favorite_vehicles: Vec::new(),
        }
    }

    /// Add the user, character, planet, vehicle and three favorite tables.
    pub fn with_favorite_tables(mut self) -> Self {
        self.include_favorite_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Tables are created in call order, after the favorite tables if those were requested.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Character)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user, see [`factory::mock_user_model`](crate::fixtures::factory::mock_user_model).
    pub fn with_mock_user(mut self, n: i32) -> Self {
        self.users.push(n);
        self
    }

    /// Insert a mock character.
    pub fn with_mock_character(mut self) -> Self {
        self.characters += 1;
        self
    }

    /// Insert a mock planet.
    pub fn with_mock_planet(mut self) -> Self {
        self.planets += 1;
        self
    }

    /// Insert a mock vehicle.
    pub fn with_mock_vehicle(mut self) -> Self {
        self.vehicles += 1;
        self
    }

    /// Insert a favorite character link between existing row IDs.
    pub fn with_favorite_character(mut self, user_id: i32, character_id: i32) -> Self {
        self.favorite_characters.push((user_id, character_id));
        self
    }

    /// Insert a favorite planet link between existing row IDs.
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorite_planets.push((user_id, planet_id));
        self
    }

    /// Insert a favorite vehicle link between existing row IDs.
    pub fn with_favorite_vehicle(mut self, user_id: i32, vehicle_id: i32) -> Self {
        self.favorite_vehicles.push((user_id, vehicle_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (favorite tables if specified, then custom tables)
    /// 2. Inserts users, characters, planets and vehicles
    /// 3. Inserts favorite links
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_favorite_tables {
            all_tables.extend(favorite_tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert reference rows
        for n in self.users {
            setup.user().insert_mock_user(n).await?;
        }

        for _ in 0..self.characters {
            setup.catalog().insert_mock_character().await?;
        }

        for _ in 0..self.planets {
            setup.catalog().insert_mock_planet().await?;
        }

        for _ in 0..self.vehicles {
            setup.catalog().insert_mock_vehicle().await?;
        }

        // 3. Insert favorite links
        for (user_id, character_id) in self.favorite_characters {
            setup
                .favorite()
                .insert_favorite_character(user_id, character_id)
                .await?;
        }

        for (user_id, planet_id) in self.favorite_planets {
            setup
                .favorite()
                .insert_favorite_planet(user_id, planet_id)
                .await?;
        }

        for (user_id, vehicle_id) in self.favorite_vehicles {
            setup
                .favorite()
                .insert_favorite_vehicle(user_id, vehicle_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
