//! Fetch errors and the retry classification policy.
//!
//! Only four transport codes earn the retry screen. Everything else is
//! reported to diagnostics and leaves the screen as it was.

use thiserror::Error;

/// The request timed out
pub const CODE_TIMED_OUT: i64 = -1001;
/// A server with the specified hostname could not be found
pub const CODE_CANNOT_FIND_HOST: i64 = -1003;
/// The host was reached but refused the connection. Not retryable.
pub const CODE_CANNOT_CONNECT_TO_HOST: i64 = -1004;
/// The connection dropped mid-request. Not retryable.
pub const CODE_NETWORK_CONNECTION_LOST: i64 = -1005;
/// The Internet connection appears to be offline
pub const CODE_NOT_CONNECTED: i64 = -1009;
/// A TLS error occurred and a secure connection could not be made
pub const CODE_SECURE_CONNECTION_FAILED: i64 = -1200;

/// Error produced by a campaign source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport level failure carrying a numeric error code
    #[error("transport error {code}: {message}")]
    Transport { code: i64, message: String },

    /// The server answered with a non-success status
    #[error("server responded with status {0}")]
    Status(u16),

    /// The response body could not be decoded
    #[error("failed to decode campaign list: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    pub fn transport(code: i64, message: impl Into<String>) -> Self {
        Self::Transport {
            code,
            message: message.into(),
        }
    }

    /// Transport code, if the error has one
    pub fn code(&self) -> Option<i64> {
        match self {
            FetchError::Transport { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return FetchError::Status(status.as_u16());
        }

        let message = error_chain_text(&err);
        match transport_code(&err) {
            Some(code) => FetchError::transport(code, message),
            None => FetchError::Other(message),
        }
    }
}

/// Transport code for a request that failed before a response arrived.
///
/// Looks at the typed sources below the reqwest error. The reqwest error's own
/// text carries the request URL and is never inspected.
fn transport_code(err: &reqwest::Error) -> Option<i64> {
    if err.is_timeout() {
        return Some(CODE_TIMED_OUT);
    }

    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        // hyper-util's connector names resolver failures "dns error"
        if inner.to_string().starts_with("dns error") {
            return Some(CODE_CANNOT_FIND_HOST);
        }
        if let Some(io) = inner.downcast_ref::<std::io::Error>() {
            if let Some(code) = io_error_code(io, err.is_connect()) {
                return Some(code);
            }
        }
        source = inner.source();
    }

    err.is_connect().then_some(CODE_CANNOT_CONNECT_TO_HOST)
}

fn io_error_code(io: &std::io::Error, connecting: bool) -> Option<i64> {
    use std::io::ErrorKind;

    match io.kind() {
        ErrorKind::TimedOut => Some(CODE_TIMED_OUT),
        ErrorKind::NetworkUnreachable | ErrorKind::HostUnreachable | ErrorKind::NetworkDown => {
            Some(CODE_NOT_CONNECTED)
        }
        ErrorKind::ConnectionRefused => Some(CODE_CANNOT_CONNECT_TO_HOST),
        ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted => {
            Some(CODE_NETWORK_CONNECTION_LOST)
        }
        // rustls reports handshake and certificate failures as InvalidData
        ErrorKind::InvalidData if connecting => Some(CODE_SECURE_CONNECTION_FAILED),
        _ => None,
    }
}

/// Text of an error and all of its sources
fn error_chain_text(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        source = inner.source();
    }
    text
}

/// Retryable network failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Timeout,
    HostUnresolvable,
    NoConnectivity,
    SecureChannelFailure,
}

impl ErrorClass {
    /// Map a transport code to its class. Unknown codes are not retryable.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            CODE_TIMED_OUT => Some(ErrorClass::Timeout),
            CODE_CANNOT_FIND_HOST => Some(ErrorClass::HostUnresolvable),
            CODE_NOT_CONNECTED => Some(ErrorClass::NoConnectivity),
            CODE_SECURE_CONNECTION_FAILED => Some(ErrorClass::SecureChannelFailure),
            _ => None,
        }
    }

    /// Classify a fetch error. `None` means the failure does not get a retry screen.
    pub fn classify(error: &FetchError) -> Option<Self> {
        error.code().and_then(Self::from_code)
    }

    pub fn code(&self) -> i64 {
        match self {
            ErrorClass::Timeout => CODE_TIMED_OUT,
            ErrorClass::HostUnresolvable => CODE_CANNOT_FIND_HOST,
            ErrorClass::NoConnectivity => CODE_NOT_CONNECTED,
            ErrorClass::SecureChannelFailure => CODE_SECURE_CONNECTION_FAILED,
        }
    }

    /// User facing explanation shown on the error screen
    pub fn message(&self) -> &'static str {
        match self {
            ErrorClass::Timeout => "The request timed out.",
            ErrorClass::HostUnresolvable => {
                "A server with the specified hostname could not be found."
            }
            ErrorClass::NoConnectivity => "The Internet connection appears to be offline.",
            ErrorClass::SecureChannelFailure => {
                "A secure connection to the server could not be made."
            }
        }
    }
}
