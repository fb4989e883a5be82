//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use lndconnect::prelude::*;
//!
//! let config = ConnectionConfig::parse("lndconnect://10.0.0.1:10009?macaroon=YWJjZA").unwrap();
//! assert_eq!(config.port(), 10009);
//! ```

pub use crate::{
    // Core types
    ConnectParams, ConnectStringParser, ConnectionConfig,
    // TLS
    RustlsContextFactory, TlsContextFactory,
    // Errors
    ErrorKind, TlsContextError,
    // Constants
    CERT_PARAM, MACAROON_PARAM, SCHEME, SCHEME_PREFIX,
};
