//! HTTP adapter mapping for domain errors.
//!
//! Domain errors stay HTTP-agnostic. Handlers pair them with the request path
//! through [`ApiError`], which renders the `{url, status, message}` payload
//! clients rely on. Extractor failures are routed through the same type by the
//! config handlers in this module, so no error leaves the service in another
//! shape.

use actix_web::error::{PathError, QueryPayloadError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Path of the request that failed, without the query string.
    pub url: String,
    /// Numeric HTTP status, repeated from the status line.
    pub status: u16,
    /// Human-readable reason.
    pub message: String,
}

/// A domain error bound to the request it was raised for.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    url: String,
    error: Error,
}

impl ApiError {
    /// Attach `error` to the path of `req`.
    pub fn new(req: &HttpRequest, error: Error) -> Self {
        Self {
            url: req.path().to_owned(),
            error,
        }
    }

    /// Underlying domain error.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Path reported in the payload.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Client-facing payload for this error.
    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload {
            url: self.url.clone(),
            status: self.status_code().as_u16(),
            message: self.error.to_string(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.error.code())
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = TraceId::current().map(|id| id.to_string());
        let payload = self.payload();
        if self.error.code() == ErrorCode::InternalError {
            error!(
                url = %payload.url,
                message = %payload.message,
                trace_id = trace_id.as_deref(),
                "request failed"
            );
        } else {
            debug!(
                url = %payload.url,
                status = payload.status,
                message = %payload.message,
                trace_id = trace_id.as_deref(),
                "request rejected"
            );
        }
        HttpResponse::build(self.status_code()).json(payload)
    }
}

fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    ApiError::new(req, Error::invalid_parameter("query", err.to_string())).into()
}

fn form_error(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    ApiError::new(req, Error::invalid_parameter("body", err.to_string())).into()
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let message = match req.match_info().get("id") {
        Some(raw) => format!("Failed to convert value '{raw}' of path parameter 'id' to a number"),
        None => err.to_string(),
    };
    ApiError::new(req, Error::invalid_parameter("id", message)).into()
}

/// Query extractor config reporting failures as error payloads.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

/// Largest accepted form body. Names far beyond the length limit still reach
/// validation and are rejected as too long.
pub const FORM_BODY_LIMIT: usize = 256 * 1024;

/// Form extractor config reporting failures as error payloads.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(FORM_BODY_LIMIT)
        .error_handler(form_error)
}

/// Path extractor config reporting failures as error payloads.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

/// Fallback service answering every unrouted request with a 404 payload.
pub async fn no_handler(req: HttpRequest) -> ApiResult<HttpResponse> {
    let error = Error::no_handler(req.method().as_str(), req.path());
    Err(ApiError::new(&req, error))
}

#[cfg(test)]
mod tests;
