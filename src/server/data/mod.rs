//! Data access layer repositories.
//!
//! Repositories are thin wrappers over SeaORM queries, generic over `ConnectionTrait` so
//! services can run them against the connection pool or inside a transaction. They return
//! `DbErr` only; deciding whether a missing row is an error is left to the service layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
