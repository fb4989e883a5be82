//! Parser and validator for `lndconnect://` connection strings.
//!
//! An lndconnect string packs everything a client needs to reach an LND
//! node into a single URI: host, port, an optional pinned TLS certificate,
//! and the macaroon used for authorization.
//!
//! # Overview
//!
//! ```text
//! lndconnect://<host>:<port>?cert=<base64url-cert>&macaroon=<base64url-macaroon>
//! ```
//!
//! Parsing either yields a [`ConnectionConfig`] or exactly one
//! [`ErrorKind`] naming the first problem found. The certificate, when
//! present, must decode and be accepted by a [`TlsContextFactory`]; the
//! default factory builds a rustls client configuration from it.
//!
//! # Quick Start
//!
//! ```rust
//! use lndconnect::{ConnectionConfig, ErrorKind};
//!
//! let config = ConnectionConfig::parse("lndconnect://10.0.0.1:10009?macaroon=YWJjZA").unwrap();
//! assert_eq!(config.host(), "10.0.0.1");
//! assert_eq!(config.port(), 10009);
//! assert_eq!(config.macaroon(), "YWJjZA");
//!
//! let err = ConnectionConfig::parse("lndconnect://10.0.0.1:10009?cert=Zm9v").unwrap_err();
//! assert_eq!(err, ErrorKind::InvalidCertificate);
//! ```
//!
//! # Custom Certificate Validation
//!
//! ```rust
//! use lndconnect::ConnectStringParser;
//!
//! let parser = ConnectStringParser::with_tls_factory(|cert: &[u8]| {
//!     if cert.is_empty() { Err("empty") } else { Ok(()) }
//! });
//! let config = parser
//!     .parse("lndconnect://node.example.com:443?cert=Zm9v&macaroon=YmFy")
//!     .unwrap();
//! assert_eq!(config.cert(), Some("Zm9v"));
//! ```
//!
//! # Logging
//!
//! Each rejection emits a `tracing` debug event describing the failed step.
//! Events never include the certificate or macaroon text. Install a
//! subscriber to see them; without one they cost nothing.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod base64url;
mod config;
mod constants;
mod error;
mod parser;
pub mod prelude;
mod query;
mod tls;

pub use config::ConnectionConfig;
pub use constants::{CERT_PARAM, MACAROON_PARAM, SCHEME, SCHEME_PREFIX};
pub use error::{ErrorKind, TlsContextError};
pub use parser::ConnectStringParser;
pub use query::ConnectParams;
pub use tls::{RustlsContextFactory, TlsContextFactory};
