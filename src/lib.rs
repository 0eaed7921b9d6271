//! Holocron: a REST API over Star Wars reference data with per-user favorites.

pub mod model;
pub mod server;
