use bytes::Bytes;
use http::StatusCode;
use std::any::Any;
use std::fmt;
use thiserror::Error;

/// The error type for every b2bpay operation.
///
/// The [`ErrorKind`] tells which stage of the invocation produced the error.
/// Transport and application errors carry the extra context callers need to
/// branch on: the HTTP status and raw body, or the `errcode`/`errmsg` pair
/// together with the decoded response payload.
#[derive(Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    body: Option<Bytes>,
    errcode: Option<i64>,
    errmsg: Option<String>,
    payload: Option<Box<dyn Any + Send + Sync>>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call was made with missing inputs: an empty access token, an
    /// empty appKey, or a request without its required fields.
    ///
    /// Always detected before any network I/O.
    Usage,

    /// The request could not be encoded or the response could not be decoded.
    Serialization,

    /// Network level failure or a non-2xx HTTP status.
    Transport,

    /// The remote platform answered with a non-zero `errcode`.
    Application,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            errcode: None,
            errmsg: None,
            payload: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the HTTP status returned by the remote platform.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the raw response body.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach the decoded response payload.
    pub fn with_payload<T: Any + Send + Sync>(mut self, payload: T) -> Self {
        self.payload = Some(Box::new(payload));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status of a transport error, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Raw response body, if one was received.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// `errcode` of an application error.
    pub fn errcode(&self) -> Option<i64> {
        self.errcode
    }

    /// `errmsg` of an application error.
    pub fn errmsg(&self) -> Option<&str> {
        self.errmsg.as_deref()
    }

    /// Borrow the typed payload decoded alongside an application error.
    ///
    /// Returns `None` if there is no payload or it is not a `T`.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref()?.downcast_ref::<T>()
    }

    /// Take the typed payload decoded alongside an application error.
    pub fn into_payload<T: Any>(self) -> Option<T> {
        self.payload?.downcast::<T>().ok().map(|v| *v)
    }

    /// Check if this is a usage error
    pub fn is_usage(&self) -> bool {
        self.kind == ErrorKind::Usage
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        self.kind == ErrorKind::Serialization
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    /// Check if this is an application error
    pub fn is_application(&self) -> bool {
        self.kind == ErrorKind::Application
    }
}

// Convenience constructors
impl Error {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage, message)
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create an application error from a response envelope.
    pub fn application(errcode: i64, errmsg: impl Into<String>) -> Self {
        let errmsg = errmsg.into();
        let mut err = Self::new(
            ErrorKind::Application,
            format!("api error: errcode={errcode} errmsg={errmsg}"),
        );
        err.errcode = Some(errcode);
        err.errmsg = Some(errmsg);
        err
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Error");
        d.field("kind", &self.kind).field("message", &self.message);
        if let Some(status) = self.status {
            d.field("status", &status);
        }
        if let Some(body) = &self.body {
            d.field("body", &String::from_utf8_lossy(body));
        }
        if let Some(errcode) = self.errcode {
            d.field("errcode", &errcode);
        }
        if let Some(errmsg) = &self.errmsg {
            d.field("errmsg", errmsg);
        }
        if self.payload.is_some() {
            d.field("payload", &"..");
        }
        if let Some(source) = &self.source {
            d.field("source", source);
        }
        d.finish()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Usage => write!(f, "usage error"),
            ErrorKind::Serialization => write!(f, "serialization error"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Application => write!(f, "application error"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::usage(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::usage(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
