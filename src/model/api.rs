use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of the `msg` field on every successful read response
pub static OK_MSG: &str = "ok";

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
    /// Raw diagnostic, only present on internal server errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }
}

/// The response for a successful mutation without a payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The response when listing every record of a table
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListDto<T> {
    pub msg: String,
    pub results: Vec<T>,
}

impl<T> ListDto<T> {
    pub fn ok(results: Vec<T>) -> Self {
        Self {
            msg: OK_MSG.to_string(),
            results,
        }
    }
}

/// The response when retrieving a single record by ID
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemDto<T> {
    pub msg: String,
    pub result: T,
}

impl<T> ItemDto<T> {
    pub fn ok(result: T) -> Self {
        Self {
            msg: OK_MSG.to_string(),
            result,
        }
    }
}
