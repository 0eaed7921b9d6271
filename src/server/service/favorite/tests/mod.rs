
use holocron_test_utils::prelude::*;
use serde_json::json;

use super::*;

/// Request body built from a JSON literal, e.g. `body(json!({"user_id": 1}))`
fn body(value: serde_json::Value) -> AddFavoriteDto {
    serde_json::from_value(value).unwrap()
}
