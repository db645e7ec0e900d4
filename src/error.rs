pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::GlooNetError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::new(ErrorKind::StdIoError(e))
    }
}

pub enum ErrorKind {
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "wasm")]
    GlooNetError(gloo_net::Error),
    SerdeJsonError(serde_json::Error),
    StdIoError(std::io::Error),
    /// Local pre-network validation failure. Never produced by the gateway.
    ValidationError(String),
    AuthError(String),
    ForbiddenError(String),
    NotFoundError(String),
    TimeoutError,
    /// Any other non-2xx response, carrying the server message when one was
    /// provided.
    ApiError { status: u16, message: String },
    StorageError(String),
    #[cfg(feature = "wasm")]
    PlatformError(String),
}

/// Translates a non-2xx status into the error taxonomy. `server_message` is
/// the body's `message`/`error` field when the envelope parsed.
pub fn status_error(status: u16, server_message: Option<String>) -> Error {
    let message =
        server_message.unwrap_or_else(|| format!("request failed with status {status}"));
    let kind = match status {
        401 => ErrorKind::AuthError(message),
        403 => ErrorKind::ForbiddenError(message),
        404 => ErrorKind::NotFoundError(message),
        _ => ErrorKind::ApiError { status, message },
    };
    Error::new(kind)
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::StdIoError(ref e) => write!(f, "StdIoError: {e:?}"),
            ErrorKind::ValidationError(ref e) => write!(f, "ValidationError: {e:?}"),
            ErrorKind::AuthError(ref e) => write!(f, "AuthError: {e:?}"),
            ErrorKind::ForbiddenError(ref e) => write!(f, "ForbiddenError: {e:?}"),
            ErrorKind::NotFoundError(ref e) => write!(f, "NotFoundError: {e:?}"),
            ErrorKind::TimeoutError => write!(f, "TimeoutError"),
            ErrorKind::ApiError { status, ref message } => {
                write!(f, "ApiError[{status}]: {message:?}")
            }
            ErrorKind::StorageError(ref e) => write!(f, "StorageError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::PlatformError(ref e) => write!(f, "PlatformError: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "network error: {e}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "network error: {e}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "malformed response: {e}"),
            ErrorKind::StdIoError(ref e) => write!(f, "storage error: {e}"),
            ErrorKind::ValidationError(ref e) => write!(f, "{e}"),
            ErrorKind::AuthError(ref e) => write!(f, "{e}"),
            ErrorKind::ForbiddenError(ref e) => write!(f, "{e}"),
            ErrorKind::NotFoundError(ref e) => write!(f, "{e}"),
            ErrorKind::TimeoutError => write!(f, "request timed out"),
            ErrorKind::ApiError { ref message, .. } => write!(f, "{message}"),
            ErrorKind::StorageError(ref e) => write!(f, "storage error: {e}"),
            #[cfg(feature = "wasm")]
            ErrorKind::PlatformError(ref e) => write!(f, "browser error: {e}"),
        }
    }
}
