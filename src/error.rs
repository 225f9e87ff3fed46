use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// An HTTP error response: a status code, its canonical reason phrase,
/// and a human-readable message.
///
/// Immutable after construction; safe to share across tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HttpError {
    /// The HTTP status code
    pub code: u16,
    /// The canonical reason phrase for the code
    pub status: String,
    /// Human-readable error message
    pub message: String,
}

/// Canonical reason phrase for a status code, empty when the code has
/// no assigned phrase in the IANA registry.
fn status_text(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}

impl HttpError {
    /// Create a new error for the given status code. The `status` field is
    /// looked up from the IANA registry and the message defaults to it.
    ///
    /// The code is not validated; an unassigned code yields an empty
    /// `status` and `message`.
    pub fn new(code: u16) -> Self {
        let status = status_text(code).to_string();
        Self {
            code,
            message: status.clone(),
            status,
        }
    }

    /// Replace the default message with a custom one. The `status` field
    /// keeps the canonical phrase for the code.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

macro_rules! status_constructors {
    ($($(#[$doc:meta])* $name:ident => $code:literal,)*) => {
        impl HttpError {
            $(
                $(#[$doc])*
                pub fn $name() -> Self {
                    Self::new($code)
                }
            )*
        }
    };
}

status_constructors! {
    /// `400 Bad Request`
    bad_request => 400,
    /// `401 Unauthorized`
    unauthorized => 401,
    /// `402 Payment Required`
    payment_required => 402,
    /// `403 Forbidden`
    forbidden => 403,
    /// `404 Not Found`
    not_found => 404,
    /// `405 Method Not Allowed`
    method_not_allowed => 405,
    /// `406 Not Acceptable`
    not_acceptable => 406,
    /// `407 Proxy Authentication Required`
    proxy_authentication_required => 407,
    /// `408 Request Timeout`
    request_timeout => 408,
    /// `409 Conflict`
    conflict => 409,
    /// `410 Gone`
    gone => 410,
    /// `411 Length Required`
    length_required => 411,
    /// `412 Precondition Failed`
    precondition_failed => 412,
    /// `413 Payload Too Large`
    payload_too_large => 413,
    /// `414 URI Too Long`
    uri_too_long => 414,
    /// `415 Unsupported Media Type`
    unsupported_media_type => 415,
    /// `416 Range Not Satisfiable`
    range_not_satisfiable => 416,
    /// `417 Expectation Failed`
    expectation_failed => 417,
    /// `418 I'm a teapot`
    im_a_teapot => 418,
    /// `421 Misdirected Request`
    misdirected_request => 421,
    /// `422 Unprocessable Entity`
    unprocessable_entity => 422,
    /// `423 Locked`
    locked => 423,
    /// `424 Failed Dependency`
    failed_dependency => 424,
    /// `426 Upgrade Required`
    upgrade_required => 426,
    /// `428 Precondition Required`
    precondition_required => 428,
    /// `429 Too Many Requests`
    too_many_requests => 429,
    /// `431 Request Header Fields Too Large`
    request_header_fields_too_large => 431,
    /// `451 Unavailable For Legal Reasons`
    unavailable_for_legal_reasons => 451,
    /// `500 Internal Server Error`
    internal_server_error => 500,
    /// `501 Not Implemented`
    not_implemented => 501,
    /// `502 Bad Gateway`
    bad_gateway => 502,
    /// `503 Service Unavailable`
    service_unavailable => 503,
    /// `504 Gateway Timeout`
    gateway_timeout => 504,
    /// `505 HTTP Version Not Supported`
    http_version_not_supported => 505,
    /// `506 Variant Also Negotiates`
    variant_also_negotiates => 506,
    /// `507 Insufficient Storage`
    insufficient_storage => 507,
    /// `508 Loop Detected`
    loop_detected => 508,
    /// `510 Not Extended`
    not_extended => 510,
    /// `511 Network Authentication Required`
    network_authentication_required => 511,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message == self.status {
            write!(f, "[{}] {}", self.code, self.status)
        } else {
            write!(f, "[{}] {}: {}", self.code, self.status, self.message)
        }
    }
}

impl std::error::Error for HttpError {}

/// Find the `HttpError` behind an arbitrary error, if any: the error itself
/// is checked first, then its `source()` chain.
pub fn as_http_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a HttpError> {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(http_err) = err.downcast_ref::<HttpError>() {
            return Some(http_err);
        }
        current = err.source();
    }
    None
}

/// Returns true if the error is, or wraps, an [`HttpError`].
///
/// Lets callers that receive a generic error from deeper layers tell a
/// structured status error apart from an unexpected internal failure.
pub fn is_http_error(err: &(dyn std::error::Error + 'static)) -> bool {
    as_http_error(err).is_some()
}
