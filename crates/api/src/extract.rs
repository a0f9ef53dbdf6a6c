//! Request extractors whose rejections use the application error format.
//!
//! Axum's own `Json` and `Path` reject malformed input with a plain-text
//! 4xx. These wrappers route the rejection through [`AppError`] so clients
//! always receive `{ "error", "code" }`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use chamados_core::error::CoreError;

use crate::error::AppError;

/// JSON request body. Undecodable bodies are validation errors.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. Unparseable segments are validation errors.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::Core(CoreError::Validation(rejection.body_text()))
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                AppError::Core(CoreError::Validation(rejection.body_text()))
            }
            other => AppError::InternalError(other.body_text()),
        }
    }
}
