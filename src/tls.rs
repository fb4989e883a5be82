//! TLS context construction from a pinned node certificate.

use std::fmt;
use std::sync::Arc;

use rustls::pki_types::pem::PemObject;
use rustls::pki_types::CertificateDer;
use rustls::{ClientConfig, RootCertStore};

use crate::error::TlsContextError;

const PEM_MARKER: &[u8] = b"-----BEGIN";

/// Builds a TLS client context that trusts a given certificate.
///
/// The parser treats implementations as a fallible black box: it only cares
/// whether [`build`](Self::build) succeeds. Any closure of the form
/// `Fn(&[u8]) -> Result<C, E>` with `E: Display` is also a factory, which
/// makes it easy to substitute behavior in tests.
pub trait TlsContextFactory {
    /// The context produced on success.
    type Context;

    /// Builds a TLS context trusting the certificate in `cert`.
    ///
    /// # Errors
    ///
    /// Returns `TlsContextError` if the bytes do not describe a usable
    /// certificate.
    fn build(&self, cert: &[u8]) -> Result<Self::Context, TlsContextError>;
}

impl<F, C, E> TlsContextFactory for F
where
    F: Fn(&[u8]) -> Result<C, E>,
    E: fmt::Display,
{
    type Context = C;

    fn build(&self, cert: &[u8]) -> Result<C, TlsContextError> {
        self(cert).map_err(|e| TlsContextError::new(e.to_string()))
    }
}

/// Default factory producing a rustls [`ClientConfig`].
///
/// Accepts the certificate as DER (what lndconnect strings carry) or as a
/// PEM document (what LND writes to `tls.cert`). The certificate becomes
/// the only trust anchor of the returned configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustlsContextFactory;

impl RustlsContextFactory {
    /// Creates the factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn certificate(cert: &[u8]) -> Result<CertificateDer<'static>, TlsContextError> {
        if cert.trim_ascii_start().starts_with(PEM_MARKER) {
            CertificateDer::from_pem_slice(cert)
                .map_err(|e| TlsContextError::new(format!("malformed PEM certificate: {e}")))
        } else {
            Ok(CertificateDer::from(cert.to_vec()))
        }
    }
}

impl TlsContextFactory for RustlsContextFactory {
    type Context = Arc<ClientConfig>;

    fn build(&self, cert: &[u8]) -> Result<Self::Context, TlsContextError> {
        if cert.is_empty() {
            return Err(TlsContextError::new("certificate is empty"));
        }

        let mut roots = RootCertStore::empty();
        roots.add(Self::certificate(cert)?)?;

        let provider = Arc::new(rustls::crypto::ring::default_provider());
        let config = ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()?
            .with_root_certificates(roots)
            .with_no_client_auth();

        Ok(Arc::new(config))
    }
}
