//! Error types for lndconnect string parsing.

use thiserror::Error;

/// The reason a connect string was rejected.
///
/// Exactly one kind is reported per failed parse. When several problems are
/// present, the one detected first by the parsing pipeline wins:
///
/// 1. missing input, wrong scheme, malformed URI
/// 2. missing host or port
/// 3. missing query component
/// 4. certificate problems
/// 5. missing or malformed macaroon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Input is absent, does not use the `lndconnect://` scheme, is not a
    /// well-formed URI, or carries no query component.
    #[error("invalid lndconnect string")]
    InvalidConnectString,
    /// The query does not contain a `macaroon` parameter.
    #[error("lndconnect string does not include a macaroon")]
    NoMacaroon,
    /// The `cert` parameter is not valid base64url, or its bytes could not
    /// be turned into a TLS context.
    #[error("invalid TLS certificate")]
    InvalidCertificate,
    /// The `macaroon` parameter is not valid base64url.
    #[error("invalid macaroon encoding")]
    InvalidMacaroon,
    /// The authority has no host or no explicit port, or the port is out of
    /// range.
    #[error("invalid host or port")]
    InvalidHostOrPort,
}

impl ErrorKind {
    /// All error kinds, ordered by numeric code.
    pub const ALL: [Self; 5] = [
        Self::InvalidConnectString,
        Self::NoMacaroon,
        Self::InvalidCertificate,
        Self::InvalidMacaroon,
        Self::InvalidHostOrPort,
    ];

    /// Returns the stable numeric code of this kind.
    ///
    /// Codes are `0` through `4`, in the order of [`ErrorKind::ALL`].
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::InvalidConnectString => 0,
            Self::NoMacaroon => 1,
            Self::InvalidCertificate => 2,
            Self::InvalidMacaroon => 3,
            Self::InvalidHostOrPort => 4,
        }
    }

    /// Looks up an error kind by its numeric code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::InvalidConnectString),
            1 => Some(Self::NoMacaroon),
            2 => Some(Self::InvalidCertificate),
            3 => Some(Self::InvalidMacaroon),
            4 => Some(Self::InvalidHostOrPort),
            _ => None,
        }
    }
}

/// Failure reported by a [`TlsContextFactory`](crate::TlsContextFactory).
///
/// The parser never inspects this beyond logging it; every such failure
/// surfaces as [`ErrorKind::InvalidCertificate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to build TLS context: {message}")]
pub struct TlsContextError {
    message: String,
}

impl TlsContextError {
    /// Creates an error with the given description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the description of what went wrong.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<rustls::Error> for TlsContextError {
    fn from(err: rustls::Error) -> Self {
        Self::new(err.to_string())
    }
}
