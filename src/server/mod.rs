//! Server application core modules.
//!
//! This module contains all server-side functionality for Holocron: HTTP routing and
//! handlers, the favorites consistency rules, database repositories, configuration and
//! startup. The database handle is created once in `main` and handed to every handler
//! through [`model::app::AppState`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
