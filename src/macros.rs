/// Build an [`HttpError`](crate::HttpError) from a status code and an
/// optional formatted message.
///
/// With just a code, the message defaults to the canonical reason phrase;
/// any further arguments are a `format!` template and its substitutions.
///
/// ```
/// use httperror::http_error;
///
/// let plain = http_error!(404);
/// let detailed = http_error!(404, "no card with id {}", 7);
/// assert_eq!(detailed.message, "no card with id 7");
/// ```
#[macro_export]
macro_rules! http_error {
    ($code:expr) => {
        $crate::HttpError::new($code)
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::HttpError::new($code).with_message(::std::format!($($arg)+))
    };
}
