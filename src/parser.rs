//! The lndconnect string parser.

use tracing::debug;
use url::Url;

use crate::base64url;
use crate::config::ConnectionConfig;
use crate::constants::SCHEME_PREFIX;
use crate::error::ErrorKind;
use crate::query::ConnectParams;
use crate::tls::{RustlsContextFactory, TlsContextFactory};

/// Parser and validator for `lndconnect://` strings.
///
/// The connect string has the form:
///
/// ```text
/// lndconnect://<host>:<port>?cert=<base64url-cert>&macaroon=<base64url-macaroon>
/// ```
///
/// The certificate is optional; nodes behind a publicly trusted certificate
/// (a BTCPay Server deployment, for example) omit it. The macaroon is
/// mandatory.
///
/// Parsing is a pure function of the input and the TLS factory. The parser
/// holds no per-parse state and can be shared between threads.
///
/// # Examples
///
/// ```
/// use lndconnect::{ConnectStringParser, ErrorKind};
///
/// let parser = ConnectStringParser::new();
///
/// let config = parser.parse("lndconnect://10.0.0.1:10009?macaroon=YWJjZA").unwrap();
/// assert_eq!(config.host(), "10.0.0.1");
/// assert_eq!(config.port(), 10009);
///
/// assert_eq!(
///     parser.parse("lndconnect://10.0.0.1?macaroon=YWJjZA"),
///     Err(ErrorKind::InvalidHostOrPort)
/// );
/// assert_eq!(parser.parse(None), Err(ErrorKind::InvalidConnectString));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConnectStringParser<F = RustlsContextFactory> {
    tls: F,
}

impl ConnectStringParser {
    /// Creates a parser that validates certificates with rustls.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tls: RustlsContextFactory::new(),
        }
    }
}

impl<F: TlsContextFactory> ConnectStringParser<F> {
    /// Creates a parser that validates certificates with the given factory.
    ///
    /// # Examples
    ///
    /// ```
    /// use lndconnect::ConnectStringParser;
    ///
    /// let accept_any = |_: &[u8]| Ok::<_, String>(());
    /// let parser = ConnectStringParser::with_tls_factory(accept_any);
    /// let config = parser
    ///     .parse("lndconnect://node.example.com:443?cert=Zm9v&macaroon=YmFy")
    ///     .unwrap();
    /// assert_eq!(config.cert(), Some("Zm9v"));
    /// ```
    #[must_use]
    pub const fn with_tls_factory(tls: F) -> Self {
        Self { tls }
    }

    /// Returns the TLS factory used to validate certificates.
    #[must_use]
    pub const fn tls_factory(&self) -> &F {
        &self.tls
    }

    /// Parses and validates a connect string.
    ///
    /// Accepts either a `&str` or an `Option<&str>`; `None` models an absent
    /// input.
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorKind`] of the first problem found, checking in
    /// this order:
    /// - absent input, wrong scheme, or malformed URI
    ///   ([`InvalidConnectString`](ErrorKind::InvalidConnectString))
    /// - missing host or port ([`InvalidHostOrPort`](ErrorKind::InvalidHostOrPort))
    /// - no query component ([`InvalidConnectString`](ErrorKind::InvalidConnectString))
    /// - `cert` not base64url or rejected by the TLS factory
    ///   ([`InvalidCertificate`](ErrorKind::InvalidCertificate))
    /// - no `macaroon` ([`NoMacaroon`](ErrorKind::NoMacaroon))
    /// - `macaroon` not base64url ([`InvalidMacaroon`](ErrorKind::InvalidMacaroon))
    pub fn parse<'a>(
        &self,
        input: impl Into<Option<&'a str>>,
    ) -> Result<ConnectionConfig, ErrorKind> {
        let Some(input) = input.into() else {
            debug!("lndconnect string is absent");
            return Err(ErrorKind::InvalidConnectString);
        };

        Self::check_scheme(input)?;
        let uri = Self::parse_uri(input)?;
        let (host, port) = Self::host_and_port(input, &uri)?;

        let Some(query) = uri.query() else {
            debug!("lndconnect URI has no parameters");
            return Err(ErrorKind::InvalidConnectString);
        };
        let params = ConnectParams::parse(query).map_err(|e| {
            debug!(error = %e, "lndconnect query is not valid UTF-8");
            ErrorKind::InvalidConnectString
        })?;

        if let Some(cert) = &params.cert {
            self.validate_cert(cert)?;
        }
        let macaroon = Self::validate_macaroon(params.macaroon)?;

        Ok(ConnectionConfig::new(host, port, params.cert, macaroon))
    }

    fn check_scheme(input: &str) -> Result<(), ErrorKind> {
        let has_scheme = input
            .get(..SCHEME_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(SCHEME_PREFIX));
        if has_scheme {
            Ok(())
        } else {
            debug!("lndconnect string has the wrong scheme");
            Err(ErrorKind::InvalidConnectString)
        }
    }

    fn parse_uri(input: &str) -> Result<Url, ErrorKind> {
        if let Some((position, c)) = input.char_indices().find(|&(_, c)| !is_uri_char(c)) {
            debug!(
                position,
                character = ?c,
                "lndconnect string contains a character not allowed in a URI"
            );
            return Err(ErrorKind::InvalidConnectString);
        }
        if let Err(reason) = check_uri_syntax(input) {
            debug!(reason, "lndconnect string is not a well-formed URI");
            return Err(ErrorKind::InvalidConnectString);
        }

        Url::parse(input).map_err(|e| {
            debug!(error = %e, "lndconnect URI could not be parsed");
            match e {
                url::ParseError::EmptyHost | url::ParseError::InvalidPort => {
                    ErrorKind::InvalidHostOrPort
                }
                _ => ErrorKind::InvalidConnectString,
            }
        })
    }

    fn host_and_port(input: &str, uri: &Url) -> Result<(String, u16), ErrorKind> {
        let host = authority_host(input);
        if host.is_empty() {
            debug!("lndconnect URI has no host");
            return Err(ErrorKind::InvalidHostOrPort);
        }

        let Some(port) = uri.port() else {
            debug!("lndconnect URI has no port");
            return Err(ErrorKind::InvalidHostOrPort);
        };

        Ok((host.to_string(), port))
    }

    fn validate_cert(&self, cert: &str) -> Result<(), ErrorKind> {
        let der = base64url::decode(cert).map_err(|e| {
            debug!(error = %e, len = cert.len(), "cert decoding failed");
            ErrorKind::InvalidCertificate
        })?;

        self.tls.build(&der).map(drop).map_err(|e| {
            debug!(error = %e, "certificate creation failed");
            ErrorKind::InvalidCertificate
        })
    }

    fn validate_macaroon(macaroon: Option<String>) -> Result<String, ErrorKind> {
        let Some(macaroon) = macaroon else {
            debug!("lndconnect string does not include a macaroon");
            return Err(ErrorKind::NoMacaroon);
        };

        if let Err(e) = base64url::decode(&macaroon) {
            debug!(error = %e, len = macaroon.len(), "macaroon decoding failed");
            return Err(ErrorKind::InvalidMacaroon);
        }

        Ok(macaroon)
    }
}

/// Returns the host exactly as written in the authority of a connect string
/// that has already passed URI parsing.
///
/// The URI parser normalizes some hosts (IPv6 literals are compressed), so
/// the host is sliced from the input instead.
fn authority_host(input: &str) -> &str {
    let rest = input.get(SCHEME_PREFIX.len()..).unwrap_or_default();
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);

    if host_port.starts_with('[') {
        host_port
            .find(']')
            .map_or(host_port, |end| &host_port[..=end])
    } else {
        host_port.split_once(':').map_or(host_port, |(host, _)| host)
    }
}

/// Checks the URI grammar rules the `url` crate tolerates: every `%` must
/// start a two-digit hex escape, and at most one `#` may appear.
fn check_uri_syntax(input: &str) -> Result<(), &'static str> {
    let bytes = input.as_bytes();
    let mut fragment_seen = false;

    for (idx, &b) in bytes.iter().enumerate() {
        match b {
            b'%' => {
                let escape = bytes.get(idx + 1..idx + 3);
                if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                    return Err("malformed percent escape");
                }
            }
            b'#' if fragment_seen => return Err("more than one fragment delimiter"),
            b'#' => fragment_seen = true,
            _ => {}
        }
    }

    Ok(())
}

/// Returns true for characters allowed anywhere in an RFC 3986 URI:
/// unreserved, reserved, and `%`.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(c)
}
