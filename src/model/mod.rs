//! Data transfer objects returned by and accepted by the HTTP API.
//!
//! Every DTO serializes to a flat JSON object. Entity DTOs are built from their
//! database models with `From`, which is where sensitive columns such as the user
//! password are left out.

pub mod api;
pub mod catalog;
pub mod favorite;
pub mod user;
