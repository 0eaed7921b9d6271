//! Server application models and type definitions.
//!
//! Application state shared by handlers, database model type aliases, and the
//! [`kind::EntityKind`] discriminator used by the favorites operations.

pub mod app;
pub mod db;
pub mod kind;
