//! Shared test helpers for the Holocron workspace.
//!
//! Tests start from an in-memory SQLite database, either through the
//! [`test_setup_with_tables!`] / [`test_setup_with_favorite_tables!`] macros or the
//! declarative [`TestBuilder`], then seed rows with the fixture helpers on
//! [`TestContext`] (`test.user()`, `test.catalog()`, `test.favorite()`).

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_favorite_tables, test_setup_with_tables, TestBuilder,
        TestContext, TestError,
    };
}
