//! Test fixtures for database seeding and mock model generation.
//!
//! - [`factory`] - pure functions building in-memory models with standard test values
//! - [`user`], [`catalog`], [`favorite`] - helpers on [`TestContext`](crate::TestContext)
//!   that insert rows and return the stored models
//!
//! Inserted rows receive auto-incremented IDs; in a fresh database the first user,
//! character, planet or vehicle inserted gets ID 1.

pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
