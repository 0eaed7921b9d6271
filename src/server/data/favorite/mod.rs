//! Repositories for the three favorite link tables.
//!
//! Each table links a user to one reference row and allows duplicate pairs, so lookups by
//! `(user_id, entity_id)` resolve to the oldest matching link.

pub mod character;
pub mod planet;
pub mod vehicle;
