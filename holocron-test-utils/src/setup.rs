//! Table setup macros.
//!
//! Both macros evaluate to `Result<TestContext, TestError>` and must be used inside an
//! async function.

/// Create a test context with only the given entity tables.
///
/// ```ignore
/// let test = test_setup_with_tables!(entity::prelude::User, entity::prelude::Character)?;
/// ```
///
/// Called with no arguments the database is left empty, which is useful for asserting
/// that an operation fails when its tables are missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Create a test context with every reference and favorite table.
///
/// Additional entities passed as arguments are created after the standard tables.
#[macro_export]
macro_rules! test_setup_with_favorite_tables {
    // Pattern 1: No entities provided
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup.with_tables($crate::setup::favorite_tables()).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let mut stmts = $crate::setup::favorite_tables();
            stmts.extend(vec![
                $(schema.create_table_from_entity($entity),)+
            ]);
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// CREATE TABLE statements for the reference tables followed by the favorite tables
/// that reference them.
pub fn favorite_tables() -> Vec<sea_orm::sea_query::TableCreateStatement> {
    let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::User),
        schema.create_table_from_entity(entity::prelude::Character),
        schema.create_table_from_entity(entity::prelude::Planet),
        schema.create_table_from_entity(entity::prelude::Vehicle),
        schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
        schema.create_table_from_entity(entity::prelude::FavoritePlanet),
        schema.create_table_from_entity(entity::prelude::FavoriteVehicle),
    ]
}
