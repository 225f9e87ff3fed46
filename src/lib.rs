//! Structured HTTP error responses for axum services.
//!
//! [`HttpError`] bundles a status code, its canonical reason phrase, and a
//! human-readable message. It implements `std::error::Error` for use in
//! error chains and `IntoResponse` to answer a request with a JSON body of
//! the form `{"code", "status", "message"}`.
//!
//! ```
//! use httperror::{http_error, HttpError};
//!
//! let err = http_error!(404, "no card named {:?}", "Sol Ring");
//! assert_eq!(err.status, "Not Found");
//! assert_eq!(err.to_string(), "[404] Not Found: no card named \"Sol Ring\"");
//! ```

pub mod error;
pub mod macros;
pub mod response;

pub use error::{as_http_error, is_http_error, HttpError};
pub use response::AppError;
