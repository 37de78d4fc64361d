//! # Runtime Support
//!
//! The small HTTP surface generated handlers are written against. A
//! generated file imports everything it needs from here:
//!
//! ```rust,ignore
//! use apigen::runtime::{ApiError, Envelope, Request, ResponseWriter, StatusCode};
//! ```
//!
//! Handlers run one call per request and share no state, so the types are
//! plain values. Adapters to a real server convert with
//! [`Request::from`] (from `&http::Request<B>`) and
//! [`ResponseWriter::into_http`].
//!
//! ## Error envelope
//!
//! | Situation                           | Status | Body                                   |
//! |-------------------------------------|--------|----------------------------------------|
//! | success                             | 200    | `{"error":"","response":...}`          |
//! | validation failure                  | 400    | `{"error":"login must not be empty"}`  |
//! | business error without a status     | 400    | `{"error":"..."}`                      |
//! | business [`ApiError`]               | its own| `{"error":"..."}`                      |
//! | missing or wrong auth header        | 401    | `{"error":"unauthorized"}`             |
//! | unknown path                        | 404    | `{"error":"unknown method"}`           |
//! | response serialization failure      | 500    | `{"error":"..."}`                      |

mod request;
mod response;

pub use http::StatusCode;
pub use request::{parse_query_params, Request};
pub use response::{Envelope, ResponseWriter};

use thiserror::Error;

/// An error carrying the HTTP status it should be answered with.
///
/// Validators always return this type. Business methods may return it to
/// pick a status; any other error type is answered with 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Normalize an error returned by a business method. An [`ApiError`] is
    /// kept as is; anything else keeps its text and takes its status from
    /// [`status_of`].
    pub fn from_business<E: Into<anyhow::Error>>(err: E) -> Self {
        match err.into().downcast::<ApiError>() {
            Ok(api) => api,
            Err(other) => Self::new(status_of(&other), other.to_string()),
        }
    }
}

/// Status an error should be answered with: the status of the first
/// [`ApiError`] in its source chain, otherwise 400.
pub fn status_of(err: &anyhow::Error) -> StatusCode {
    err.chain()
        .find_map(|e| e.downcast_ref::<ApiError>())
        .map(|api| api.status)
        .unwrap_or(StatusCode::BAD_REQUEST)
}
