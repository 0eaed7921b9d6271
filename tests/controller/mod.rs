//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, the same way axum would call
//! them, and the resulting responses are checked for status and body.

mod catalog;
mod favorite;
mod user;

use axum::{extract::State, http::StatusCode};
use holocron::server::controller::extract::{Json, Path};
use holocron_test_utils::prelude::*;

use crate::util::{body_json, into_response};
