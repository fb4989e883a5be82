//! The connection descriptor produced by a successful parse.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use base64::DecodeError;

use crate::base64url;
use crate::constants::{CERT_PARAM, MACAROON_PARAM, SCHEME_PREFIX};
use crate::error::ErrorKind;
use crate::parser::ConnectStringParser;

/// Everything needed to reach an LND node.
///
/// A value of this type returned by the parser always has a non-empty host,
/// an explicit port and a macaroon whose encoding has been verified. The
/// certificate and macaroon are kept as the base64url text found in the
/// connect string; use [`cert_der`](Self::cert_der) and
/// [`macaroon_bytes`](Self::macaroon_bytes) to obtain raw bytes.
///
/// # Examples
///
/// ```
/// use lndconnect::ConnectionConfig;
///
/// let config = ConnectionConfig::parse("lndconnect://10.0.0.1:10009?macaroon=YWJjZA").unwrap();
/// assert_eq!(config.host(), "10.0.0.1");
/// assert_eq!(config.port(), 10009);
/// assert_eq!(config.cert(), None);
/// assert_eq!(config.macaroon(), "YWJjZA");
/// assert_eq!(config.macaroon_hex().unwrap(), "61626364");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnectionConfig {
    host: String,
    port: u16,
    cert: Option<String>,
    macaroon: String,
}

impl ConnectionConfig {
    /// Parses a connect string, validating the certificate with rustls.
    ///
    /// Shorthand for [`ConnectStringParser::new`] followed by
    /// [`ConnectStringParser::parse`].
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorKind`] describing the first problem found.
    pub fn parse(input: &str) -> Result<Self, ErrorKind> {
        ConnectStringParser::new().parse(input)
    }

    /// Creates a config from already-encoded parts.
    ///
    /// No validation is performed; pass the result through
    /// [`to_connect_string`](Self::to_connect_string) and the parser to
    /// validate it.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        port: u16,
        cert: Option<String>,
        macaroon: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            cert,
            macaroon: macaroon.into(),
        }
    }

    /// Creates a config from a raw DER certificate and raw macaroon bytes,
    /// encoding both as unpadded base64url.
    ///
    /// # Examples
    ///
    /// ```
    /// use lndconnect::ConnectionConfig;
    ///
    /// let config = ConnectionConfig::from_raw("localhost", 10009, None, b"abcd");
    /// assert_eq!(
    ///     config.to_connect_string(),
    ///     "lndconnect://localhost:10009?macaroon=YWJjZA"
    /// );
    /// ```
    #[must_use]
    pub fn from_raw(
        host: impl Into<String>,
        port: u16,
        cert_der: Option<&[u8]>,
        macaroon: &[u8],
    ) -> Self {
        Self::new(
            host,
            port,
            cert_der.map(base64url::encode),
            base64url::encode(macaroon),
        )
    }

    /// Returns the host as written in the connect string.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the base64url-encoded certificate, if one was supplied.
    #[must_use]
    pub fn cert(&self) -> Option<&str> {
        self.cert.as_deref()
    }

    /// Returns the base64url-encoded macaroon.
    #[must_use]
    pub fn macaroon(&self) -> &str {
        &self.macaroon
    }

    /// Returns `host:port`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Decodes the certificate into DER bytes.
    ///
    /// Returns `None` when no certificate was supplied.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the stored text is not valid base64url,
    /// which cannot happen for configs produced by the parser.
    pub fn cert_der(&self) -> Option<Result<Vec<u8>, DecodeError>> {
        self.cert.as_deref().map(base64url::decode)
    }

    /// Decodes the macaroon into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the stored text is not valid base64url,
    /// which cannot happen for configs produced by the parser.
    pub fn macaroon_bytes(&self) -> Result<Vec<u8>, DecodeError> {
        base64url::decode(&self.macaroon)
    }

    /// Returns the macaroon as lowercase hex, the form LND expects in the
    /// `macaroon` gRPC metadata header.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError` if the stored text is not valid base64url,
    /// which cannot happen for configs produced by the parser.
    pub fn macaroon_hex(&self) -> Result<String, DecodeError> {
        self.macaroon_bytes().map(hex::encode)
    }

    /// Renders the config back into an lndconnect string.
    ///
    /// The certificate parameter is omitted when absent. For configs returned
    /// by the parser or built with [`from_raw`](Self::from_raw), parsing the
    /// result yields a config equal to `self`; configs built with
    /// [`new`](Self::new) carry no such guarantee.
    #[must_use]
    pub fn to_connect_string(&self) -> String {
        let mut out = format!("{SCHEME_PREFIX}{}:{}?", self.host, self.port);
        if let Some(cert) = &self.cert {
            let _ = write!(out, "{CERT_PARAM}={cert}&");
        }
        let _ = write!(out, "{MACAROON_PARAM}={}", self.macaroon);
        out
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cert", &self.cert)
            .field("macaroon", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for ConnectionConfig {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
