//! Input extractors that turn axum's binding rejections into [`AppError`].
//!
//! axum answers a JSON body with the wrong field types with 422 and a missing
//! content type with 415. Every binding failure here is a client input error,
//! so all three wrappers reject with `AppError::BadRequest` (400) and the
//! shared JSON error body.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

/// Query string parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

/// Path segments captured by the route.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParams<T>(pub T);

fn bad_request(kind: &str, detail: String) -> AppError {
    tracing::debug!(kind, detail = %detail, "Rejected request input");
    AppError::BadRequest(anyhow::anyhow!(detail))
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| bad_request("json", rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| bad_request("query", rejection.body_text()))?;

        Ok(QueryParams(value))
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| bad_request("path", rejection.body_text()))?;

        Ok(PathParams(value))
    }
}
