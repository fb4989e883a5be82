//! Constants for lndconnect string parsing.

/// The URI scheme.
pub const SCHEME: &str = "lndconnect";

/// The scheme together with the authority separator, as it must prefix
/// every connect string (matched case-insensitively).
pub const SCHEME_PREFIX: &str = "lndconnect://";

/// Query key carrying the base64url-encoded TLS certificate.
pub const CERT_PARAM: &str = "cert";

/// Query key carrying the base64url-encoded macaroon.
pub const MACAROON_PARAM: &str = "macaroon";
