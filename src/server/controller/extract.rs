//! Extractors whose rejections go through [`Error`] so they answer with a JSON body.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::server::error::Error;

/// JSON body extractor and response, rejecting with a 400 [`ErrorDto`](crate::model::api::ErrorDto)
#[derive(FromRequest, Debug, Clone, Copy, Default)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor, rejecting with a 400 [`ErrorDto`](crate::model::api::ErrorDto)
#[derive(FromRequestParts, Debug, Clone, Copy, Default)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);
