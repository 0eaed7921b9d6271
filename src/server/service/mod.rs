//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories. They turn missing rows into
//! [`NotFoundError`](crate::server::error::not_found::NotFoundError)s, validate favorite
//! requests, and own the transaction boundaries for the read-then-write operations.

pub mod catalog;
pub mod favorite;
pub mod user;
