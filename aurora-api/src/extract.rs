/// Request extractors that reject with [`ApiError`]
///
/// Drop-in replacements for axum's `Query`, `Path` and `Json`. A malformed
/// request produces the usual `{"error", "message"}` body instead of axum's
/// plain-text rejection.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// Query string extractor (400 on failure)
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Path parameter extractor (400 on failure)
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// JSON body extractor (422 when the body does not decode)
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
