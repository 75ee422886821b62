//! Request extractors that reject with `AppError`.

mod validated_json;

use axum::extract::FromRequestParts;
use common::AppError;

pub use validated_json::ValidatedJson;

/// `axum::extract::Path` answering bad segments with a 400 `{"error": ...}` body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// `axum::extract::Query` answering bad parameters with a 400 `{"error": ...}` body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
